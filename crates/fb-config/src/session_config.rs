use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

/// Credentials for the backend session.
///
/// Obtaining tokens is outside this tool; they are supplied here or through
/// `FB_ACCESS_TOKEN` / `FB_REFRESH_TOKEN`.
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub access_token: Option<String>,
    /// Not sent by any request yet; kept so a token refresh can use it.
    pub refresh_token: Option<String>,
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self
            .access_token
            .as_deref()
            .is_some_and(|token| token.trim().is_empty())
        {
            return Err(ConfigError::session("session.access_token must not be blank"));
        }

        if self
            .refresh_token
            .as_deref()
            .is_some_and(|token| token.trim().is_empty())
        {
            return Err(ConfigError::session("session.refresh_token must not be blank"));
        }

        Ok(())
    }

    pub fn has_access_token(&self) -> bool {
        self.access_token.is_some()
    }
}

// Tokens never reach logs or panic messages
impl std::fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionConfig")
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field(
                "refresh_token",
                &self.refresh_token.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}
