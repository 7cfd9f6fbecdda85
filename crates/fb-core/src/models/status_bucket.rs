use crate::FeedbackItem;

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

static NEXT_REVISION: AtomicU64 = AtomicU64::new(1);

fn next_revision() -> u64 {
    NEXT_REVISION.fetch_add(1, Ordering::Relaxed)
}

/// One Kanban column: a display label and the items currently in that status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusBucket {
    pub label: String,
    #[serde(default)]
    pub feedbacks: Vec<FeedbackItem>,

    /// Identity of the bucket contents, unique per process. A fresh value is
    /// taken on construction (including deserialization) and on every local
    /// mutation; clones share it. Never sent over the wire.
    #[serde(skip, default = "next_revision")]
    revision: u64,
}

impl StatusBucket {
    pub fn new<S: Into<String>>(label: S, feedbacks: Vec<FeedbackItem>) -> Self {
        Self {
            label: label.into(),
            feedbacks,
            revision: next_revision(),
        }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.feedbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.feedbacks.is_empty()
    }

    pub(crate) fn touch(&mut self) {
        self.revision = next_revision();
    }
}

// Equality is by content; the revision is an identity, not data.
impl PartialEq for StatusBucket {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label && self.feedbacks == other.feedbacks
    }
}
