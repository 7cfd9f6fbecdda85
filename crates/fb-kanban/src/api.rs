use crate::KanbanErrorResult;

use fb_core::{FeedbackId, FeedbackItem, FeedbackStatus, StatusBucket};

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Raw `GET /feedback/kanban/` body: status key to bucket.
///
/// Keys are kept as strings; the loader decides which ones are columns.
pub type KanbanPayload = BTreeMap<String, StatusBucket>;

/// Result of toggling the viewer's upvote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpvoteState {
    Upvoted,
    Removed,
}

impl UpvoteState {
    pub fn is_upvoted(&self) -> bool {
        matches!(self, Self::Upvoted)
    }
}

/// Backend operations the Kanban board depends on.
#[async_trait]
pub trait KanbanApi: Send + Sync {
    /// Fetch every feedback item grouped by status
    async fn fetch_kanban(&self) -> KanbanErrorResult<KanbanPayload>;

    /// Persist a status change (partial update)
    async fn update_status(
        &self,
        id: FeedbackId,
        status: FeedbackStatus,
    ) -> KanbanErrorResult<FeedbackItem>;

    /// Toggle the viewer's upvote on an item
    async fn toggle_upvote(&self, id: FeedbackId) -> KanbanErrorResult<UpvoteState>;
}

#[async_trait]
impl<T: KanbanApi + ?Sized> KanbanApi for std::sync::Arc<T> {
    async fn fetch_kanban(&self) -> KanbanErrorResult<KanbanPayload> {
        (**self).fetch_kanban().await
    }

    async fn update_status(
        &self,
        id: FeedbackId,
        status: FeedbackStatus,
    ) -> KanbanErrorResult<FeedbackItem> {
        (**self).update_status(id, status).await
    }

    async fn toggle_upvote(&self, id: FeedbackId) -> KanbanErrorResult<UpvoteState> {
        (**self).toggle_upvote(id).await
    }
}
