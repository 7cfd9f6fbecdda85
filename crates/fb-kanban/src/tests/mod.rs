
use fb_core::{BoardSnapshot, CreatorRef, FeedbackItem, FeedbackStatus, StatusBucket, Tag};

use std::collections::BTreeMap;

use chrono::{TimeZone, Utc};

pub(crate) const KANBAN: [FeedbackStatus; 3] = [
    FeedbackStatus::Open,
    FeedbackStatus::InProgress,
    FeedbackStatus::Completed,
];

pub(crate) fn create_test_item(id: i64, status: FeedbackStatus) -> FeedbackItem {
    let created = Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap();
    FeedbackItem {
        id,
        title: format!("Feedback {}", id),
        description: String::from("Something to improve"),
        status,
        tags: Vec::new(),
        upvotes_count: 0,
        is_upvoted: false,
        created_by: CreatorRef::Username(String::from("alice")),
        created_at: created,
        updated_at: created,
        board: 1,
    }
}

pub(crate) fn create_test_snapshot(items: Vec<FeedbackItem>) -> BoardSnapshot {
    let mut buckets: BTreeMap<FeedbackStatus, StatusBucket> = KANBAN
        .iter()
        .map(|status| (*status, StatusBucket::new(status.label(), Vec::new())))
        .collect();

    for item in items {
        buckets.get_mut(&item.status).unwrap().feedbacks.push(item);
    }

    BoardSnapshot::from_buckets(buckets).unwrap()
}

pub(crate) fn tags(names: &[&str]) -> Vec<Tag> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| Tag {
            id: i as i64 + 1,
            name: name.to_string(),
        })
        .collect()
}
