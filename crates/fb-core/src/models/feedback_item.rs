use crate::{CreatorRef, FeedbackStatus, Tag};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type FeedbackId = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackItem {
    pub id: FeedbackId,
    pub title: String,
    #[serde(default)]
    pub description: String,

    // Workflow
    pub status: FeedbackStatus,

    #[serde(default)]
    pub tags: Vec<Tag>,

    // Votes
    #[serde(default)]
    pub upvotes_count: u32,
    #[serde(default)]
    pub is_upvoted: bool,

    // Audit
    pub created_by: CreatorRef,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    /// Owning board id
    pub board: i64,
}

impl FeedbackItem {
    /// First `limit` tag names, followed by `+N` when more tags exist.
    ///
    /// Returns an empty string for an untagged item.
    pub fn tag_summary(&self, limit: usize) -> String {
        let mut parts: Vec<String> = self
            .tags
            .iter()
            .take(limit)
            .map(|tag| tag.name.clone())
            .collect();

        if self.tags.len() > limit {
            parts.push(format!("+{}", self.tags.len() - limit));
        }

        parts.join(", ")
    }

    /// Record the viewer's upvote state. Returns false when nothing changed.
    pub(crate) fn set_upvoted(&mut self, upvoted: bool) -> bool {
        if self.is_upvoted == upvoted {
            return false;
        }

        self.is_upvoted = upvoted;
        self.upvotes_count = if upvoted {
            self.upvotes_count.saturating_add(1)
        } else {
            self.upvotes_count.saturating_sub(1)
        };
        true
    }
}
