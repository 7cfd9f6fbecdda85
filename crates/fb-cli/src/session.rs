use fb_config::SessionConfig;

/// Credentials attached to every backend request.
///
/// A session is created explicitly and handed to the client; dropping it
/// (or calling [`crate::Client::end_session`]) is the teardown.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    access_token: String,
    /// Carried for a token refresh; requests only send the access token.
    refresh_token: Option<String>,
}

impl Session {
    pub fn new<S: Into<String>>(access_token: S) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: None,
        }
    }

    pub fn with_refresh_token<S: Into<String>>(mut self, refresh_token: S) -> Self {
        self.refresh_token = Some(refresh_token.into());
        self
    }

    /// Build a session from configured tokens; `None` without an access token
    pub fn from_config(config: &SessionConfig) -> Option<Self> {
        let session = Self::new(config.access_token.clone()?);
        Some(match &config.refresh_token {
            Some(refresh) => session.with_refresh_token(refresh.clone()),
            None => session,
        })
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"<redacted>")
            .field(
                "refresh_token",
                &self.refresh_token.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}
