use crate::{CliClientResult, ClientError, Session};

use fb_core::{FeedbackId, FeedbackItem, FeedbackStatus};
use fb_kanban::{KanbanApi, KanbanError, KanbanErrorResult, KanbanPayload, UpvoteState};

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

/// HTTP client for the feedback backend REST API
pub struct Client {
    pub base_url: String,
    session: Option<Session>,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - API root (e.g., "http://localhost:8001/api")
    /// * `session` - Optional credentials sent as a bearer token
    pub fn new(base_url: &str, session: Option<Session>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
            client: ReqwestClient::new(),
        }
    }

    /// Create a client whose requests give up after `timeout`
    pub fn with_timeout(
        base_url: &str,
        session: Option<Session>,
        timeout: Duration,
    ) -> CliClientResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
            client,
        })
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Attach credentials, replacing any current session
    pub fn attach_session(&mut self, session: Session) {
        self.session = Some(session);
    }

    /// Drop the current credentials; later requests are anonymous
    pub fn end_session(&mut self) -> Option<Session> {
        self.session.take()
    }

    /// Build a request with the bearer token, if any
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let req = self.client.request(method, &url);

        match &self.session {
            Some(session) => req.bearer_auth(session.access_token()),
            None => req,
        }
    }

    /// Execute request and handle errors
    async fn execute<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> CliClientResult<T> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::api_error(
                status.as_u16(),
                error_message(status, &body),
            ));
        }

        Ok(serde_json::from_str(&body)?)
    }

    // =========================================================================
    // Kanban Operations
    // =========================================================================

    /// Fetch every feedback item grouped by status
    pub async fn fetch_kanban(&self) -> CliClientResult<KanbanPayload> {
        debug!("GET {}/feedback/kanban/", self.base_url);
        let req = self.request(Method::GET, "/feedback/kanban/");
        self.execute(req).await
    }

    // =========================================================================
    // Feedback Operations
    // =========================================================================

    /// Get one feedback item
    pub async fn get_feedback(&self, id: FeedbackId) -> CliClientResult<FeedbackItem> {
        let req = self.request(Method::GET, &format!("/feedback/{}/", id));
        self.execute(req).await
    }

    /// Change only the status of a feedback item
    pub async fn update_feedback_status(
        &self,
        id: FeedbackId,
        status: FeedbackStatus,
    ) -> CliClientResult<FeedbackItem> {
        #[derive(Serialize)]
        struct UpdateRequest {
            status: FeedbackStatus,
        }

        debug!("PATCH {}/feedback/{}/ status={}", self.base_url, id, status);
        let req = self
            .request(Method::PATCH, &format!("/feedback/{}/", id))
            .json(&UpdateRequest { status });
        self.execute(req).await
    }

    /// Toggle the caller's upvote
    pub async fn toggle_upvote(&self, id: FeedbackId) -> CliClientResult<UpvoteState> {
        #[derive(Deserialize)]
        struct UpvoteResponse {
            status: UpvoteState,
        }

        let req = self.request(Method::POST, &format!("/feedback/{}/upvote/", id));
        let response: UpvoteResponse = self.execute(req).await?;
        Ok(response.status)
    }
}

/// Pull a readable message out of an error body.
///
/// `{"detail": ...}` is used when present; other JSON is shown compactly and
/// anything else verbatim. An empty body falls back to the status reason.
pub(crate) fn error_message(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) if map.get("detail").is_some_and(Value::is_string) => map
            .get("detail")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        Ok(value) => value.to_string(),
        Err(_) if !body.trim().is_empty() => body.trim().to_string(),
        Err(_) => status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string(),
    }
}

#[async_trait]
impl KanbanApi for Client {
    async fn fetch_kanban(&self) -> KanbanErrorResult<KanbanPayload> {
        Client::fetch_kanban(self).await.map_err(to_kanban_error)
    }

    async fn update_status(
        &self,
        id: FeedbackId,
        status: FeedbackStatus,
    ) -> KanbanErrorResult<FeedbackItem> {
        self.update_feedback_status(id, status)
            .await
            .map_err(to_kanban_error)
    }

    async fn toggle_upvote(&self, id: FeedbackId) -> KanbanErrorResult<UpvoteState> {
        Client::toggle_upvote(self, id).await.map_err(to_kanban_error)
    }
}

#[track_caller]
fn to_kanban_error(err: ClientError) -> KanbanError {
    KanbanError::api(err.to_string())
}
