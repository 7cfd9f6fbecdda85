#![allow(dead_code)]

use fb_core::{CreatorRef, FeedbackId, FeedbackItem, FeedbackStatus, StatusBucket};
use fb_kanban::{KanbanApi, KanbanError, KanbanErrorResult, KanbanPayload, UpvoteState};

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

/// In-memory backend holding the server's view of the board
#[derive(Default)]
pub struct FakeBackend {
    board: Mutex<KanbanPayload>,
    pub fail_fetch: AtomicBool,
    pub fail_updates: AtomicBool,
    pub fetch_calls: AtomicUsize,
    pub updates: Mutex<Vec<(FeedbackId, FeedbackStatus)>>,
}

impl FakeBackend {
    /// Board with open / in_progress / completed columns
    pub fn with_items(items: Vec<FeedbackItem>) -> Self {
        let backend = Self::default();
        {
            let mut board = backend.board.lock().unwrap();
            for status in [
                FeedbackStatus::Open,
                FeedbackStatus::InProgress,
                FeedbackStatus::Completed,
            ] {
                board.insert(
                    status.as_str().to_string(),
                    StatusBucket::new(status.label(), Vec::new()),
                );
            }
            for item in items {
                board
                    .get_mut(item.status.as_str())
                    .unwrap()
                    .feedbacks
                    .push(item);
            }
        }
        backend
    }

    /// Server-side status change, as another client would make it
    pub fn move_on_server(&self, id: FeedbackId, status: FeedbackStatus) {
        let mut board = self.board.lock().unwrap();
        let mut moved = None;
        for bucket in board.values_mut() {
            if let Some(index) = bucket.feedbacks.iter().position(|item| item.id == id) {
                moved = Some(bucket.feedbacks.remove(index));
            }
        }
        let mut item = moved.expect("item exists on server");
        item.status = status;
        board
            .get_mut(status.as_str())
            .unwrap()
            .feedbacks
            .push(item);
    }

    pub fn insert_column(&self, key: &str, bucket: StatusBucket) {
        self.board.lock().unwrap().insert(key.to_string(), bucket);
    }

    pub fn server_status_of(&self, id: FeedbackId) -> Option<FeedbackStatus> {
        self.board
            .lock()
            .unwrap()
            .values()
            .flat_map(|bucket| bucket.feedbacks.iter())
            .find(|item| item.id == id)
            .map(|item| item.status)
    }

    pub fn update_count(&self) -> usize {
        self.updates.lock().unwrap().len()
    }
}

#[async_trait]
impl KanbanApi for FakeBackend {
    async fn fetch_kanban(&self) -> KanbanErrorResult<KanbanPayload> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(KanbanError::api("503 Service Unavailable"));
        }
        Ok(self.board.lock().unwrap().clone())
    }

    async fn update_status(
        &self,
        id: FeedbackId,
        status: FeedbackStatus,
    ) -> KanbanErrorResult<FeedbackItem> {
        self.updates.lock().unwrap().push((id, status));
        if self.fail_updates.load(Ordering::SeqCst) {
            return Err(KanbanError::api("403 Forbidden: not allowed"));
        }
        self.move_on_server(id, status);
        let board = self.board.lock().unwrap();
        board
            .values()
            .flat_map(|bucket| bucket.feedbacks.iter())
            .find(|item| item.id == id)
            .cloned()
            .ok_or_else(|| KanbanError::api("404 Not Found"))
    }

    async fn toggle_upvote(&self, id: FeedbackId) -> KanbanErrorResult<UpvoteState> {
        let mut board = self.board.lock().unwrap();
        let item = board
            .values_mut()
            .flat_map(|bucket| bucket.feedbacks.iter_mut())
            .find(|item| item.id == id)
            .ok_or_else(|| KanbanError::api("404 Not Found"))?;

        item.is_upvoted = !item.is_upvoted;
        if item.is_upvoted {
            item.upvotes_count += 1;
            Ok(UpvoteState::Upvoted)
        } else {
            item.upvotes_count -= 1;
            Ok(UpvoteState::Removed)
        }
    }
}

pub fn create_test_item(id: FeedbackId, status: FeedbackStatus) -> FeedbackItem {
    let created = Utc.with_ymd_and_hms(2024, 2, 1, 8, 0, 0).unwrap();
    FeedbackItem {
        id,
        title: format!("Item {}", id),
        description: String::from("Details"),
        status,
        tags: Vec::new(),
        upvotes_count: 0,
        is_upvoted: false,
        created_by: CreatorRef::Id(1),
        created_at: created,
        updated_at: created,
        board: 1,
    }
}

pub fn bucket_ids(
    snapshot: &fb_core::BoardSnapshot,
    status: FeedbackStatus,
) -> Vec<FeedbackId> {
    snapshot
        .bucket(status)
        .map(|bucket| bucket.feedbacks.iter().map(|item| item.id).collect())
        .unwrap_or_default()
}
