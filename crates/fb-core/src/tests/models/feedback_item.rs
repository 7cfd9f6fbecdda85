use crate::tests::create_test_item;
use crate::{CreatorRef, FeedbackItem, FeedbackStatus, Tag};

use googletest::prelude::*;
use serde_json::json;

#[test]
fn given_backend_json_when_deserialized_then_fields_are_mapped() {
    // Given
    let payload = json!({
        "id": 7,
        "title": "Dark mode",
        "description": "Please add a dark theme",
        "status": "in_progress",
        "tags": [{"id": 1, "name": "ui"}],
        "upvotes_count": 3,
        "is_upvoted": true,
        "created_by": "bob",
        "created_at": "2024-03-01T10:00:00Z",
        "updated_at": "2024-03-02T10:00:00Z",
        "board": 2
    });

    // When
    let item: FeedbackItem = serde_json::from_value(payload).unwrap();

    // Then
    assert_that!(item.id, eq(7));
    assert_that!(item.status, eq(FeedbackStatus::InProgress));
    assert_that!(item.upvotes_count, eq(3));
    assert_that!(item.is_upvoted, eq(true));
    assert_that!(item.created_by, eq(&CreatorRef::Username("bob".to_string())));
    assert_that!(item.board, eq(2));
}

#[test]
fn given_numeric_creator_and_missing_votes_when_deserialized_then_defaults_apply() {
    // Given
    let payload = json!({
        "id": 8,
        "title": "Export",
        "status": "open",
        "created_by": 12,
        "created_at": "2024-03-01T10:00:00Z",
        "updated_at": "2024-03-01T10:00:00Z",
        "board": 1
    });

    // When
    let item: FeedbackItem = serde_json::from_value(payload).unwrap();

    // Then
    assert_that!(item.created_by, eq(&CreatorRef::Id(12)));
    assert_that!(item.upvotes_count, eq(0));
    assert_that!(item.is_upvoted, eq(false));
    assert_that!(item.tags, is_empty());
    assert_that!(item.description, eq(""));
}

#[test]
fn given_many_tags_when_summarized_then_overflow_is_counted() {
    // Given
    let mut item = create_test_item(1, FeedbackStatus::Open);
    item.tags = ["ui", "api", "docs", "perf"]
        .iter()
        .enumerate()
        .map(|(i, name)| Tag {
            id: i as i64,
            name: name.to_string(),
        })
        .collect();

    // When
    let summary = item.tag_summary(2);

    // Then
    assert_that!(summary, eq("ui, api, +2"));
}

#[test]
fn given_no_tags_when_summarized_then_empty() {
    let mut item = create_test_item(1, FeedbackStatus::Open);
    item.tags.clear();

    assert_that!(item.tag_summary(2), eq(""));
}

#[test]
fn given_creator_when_displayed_then_readable() {
    assert_eq!(CreatorRef::Id(4).to_string(), "user #4");
    assert_eq!(CreatorRef::Username("carol".into()).to_string(), "carol");
}
