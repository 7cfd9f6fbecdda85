use crate::FeedbackStatus;

use std::str::FromStr;

#[test]
fn test_feedback_status_as_str() {
    assert_eq!(FeedbackStatus::Open.as_str(), "open");
    assert_eq!(FeedbackStatus::InProgress.as_str(), "in_progress");
    assert_eq!(FeedbackStatus::Resolved.as_str(), "resolved");
    assert_eq!(FeedbackStatus::Completed.as_str(), "completed");
}

#[test]
fn test_feedback_status_from_str() {
    for status in FeedbackStatus::ALL {
        assert_eq!(FeedbackStatus::from_str(status.as_str()).unwrap(), status);
    }
    assert!(FeedbackStatus::from_str("archived").is_err());
    assert!(FeedbackStatus::from_str("42").is_err());
    assert!(FeedbackStatus::from_str("Open").is_err());
}

#[test]
fn test_feedback_status_labels() {
    assert_eq!(FeedbackStatus::InProgress.label(), "In Progress");
    assert_eq!(FeedbackStatus::Completed.label(), "Completed");
}

#[test]
fn test_feedback_status_default() {
    assert_eq!(FeedbackStatus::default(), FeedbackStatus::Open);
}

#[test]
fn test_feedback_status_orders_by_column() {
    let mut statuses = vec![
        FeedbackStatus::Completed,
        FeedbackStatus::Open,
        FeedbackStatus::Resolved,
        FeedbackStatus::InProgress,
    ];
    statuses.sort();
    assert_eq!(statuses, FeedbackStatus::ALL.to_vec());
}

#[test]
fn test_feedback_status_serde_uses_snake_case() {
    let json = serde_json::to_string(&FeedbackStatus::InProgress).unwrap();
    assert_eq!(json, "\"in_progress\"");

    let parsed: FeedbackStatus = serde_json::from_str("\"resolved\"").unwrap();
    assert_eq!(parsed, FeedbackStatus::Resolved);
}
