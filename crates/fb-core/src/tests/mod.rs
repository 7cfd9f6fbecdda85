
use crate::{BoardSnapshot, CreatorRef, FeedbackItem, FeedbackStatus, StatusBucket, Tag};

use std::collections::BTreeMap;

use chrono::{TimeZone, Utc};

/// Creates a test FeedbackItem with sensible defaults
pub(crate) fn create_test_item(id: i64, status: FeedbackStatus) -> FeedbackItem {
    let created = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
    FeedbackItem {
        id,
        title: format!("Feedback {}", id),
        description: "Test description".to_string(),
        status,
        tags: vec![Tag {
            id: 1,
            name: "ux".to_string(),
        }],
        upvotes_count: 0,
        is_upvoted: false,
        created_by: CreatorRef::Username("alice".to_string()),
        created_at: created,
        updated_at: created,
        board: 1,
    }
}

/// Creates a snapshot with one bucket per status, holding the given items
pub(crate) fn create_test_snapshot(
    statuses: &[FeedbackStatus],
    items: Vec<FeedbackItem>,
) -> BoardSnapshot {
    let mut buckets: BTreeMap<FeedbackStatus, StatusBucket> = statuses
        .iter()
        .map(|status| (*status, StatusBucket::new(status.label(), Vec::new())))
        .collect();

    for item in items {
        buckets
            .get_mut(&item.status)
            .expect("status bucket exists")
            .feedbacks
            .push(item);
    }

    BoardSnapshot::from_buckets(buckets).unwrap()
}
