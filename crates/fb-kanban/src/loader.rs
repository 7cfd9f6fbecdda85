use crate::{KanbanApi, KanbanErrorResult, KanbanPayload};

use fb_core::{BoardSnapshot, FeedbackStatus};

use std::collections::BTreeMap;
use std::str::FromStr;

use log::{debug, error, info, warn};

/// What the board view should show
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoadState<'a> {
    /// Nothing has been loaded yet
    Empty,
    Loaded(&'a BoardSnapshot),
    /// The last load failed; `stale` is the previous snapshot, if any
    Failed {
        message: &'a str,
        stale: Option<&'a BoardSnapshot>,
    },
}

/// Owns the canonical snapshot. Every load is a full replace.
#[derive(Debug, Default)]
pub struct BoardLoader {
    snapshot: Option<BoardSnapshot>,
    last_error: Option<String>,
}

impl BoardLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the board and replace the snapshot.
    ///
    /// On failure the previous snapshot is kept and the error is recorded
    /// for [`BoardLoader::state`] before being returned.
    pub async fn load<A: KanbanApi + ?Sized>(
        &mut self,
        api: &A,
    ) -> KanbanErrorResult<&BoardSnapshot> {
        debug!("Loading kanban board");

        let result = api
            .fetch_kanban()
            .await
            .and_then(Self::build_snapshot);

        match result {
            Ok(snapshot) => {
                info!(
                    "Loaded kanban board: {} columns, {} items",
                    snapshot.statuses().count(),
                    snapshot.len()
                );
                self.last_error = None;
                Ok(&*self.snapshot.insert(snapshot))
            }
            Err(e) => {
                error!("Failed to load kanban board: {}", e);
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    pub fn snapshot(&self) -> Option<&BoardSnapshot> {
        self.snapshot.as_ref()
    }

    pub(crate) fn snapshot_mut(&mut self) -> Option<&mut BoardSnapshot> {
        self.snapshot.as_mut()
    }

    pub fn state(&self) -> LoadState<'_> {
        match (&self.last_error, &self.snapshot) {
            (Some(message), stale) => LoadState::Failed {
                message,
                stale: stale.as_ref(),
            },
            (None, Some(snapshot)) => LoadState::Loaded(snapshot),
            (None, None) => LoadState::Empty,
        }
    }

    fn build_snapshot(payload: KanbanPayload) -> KanbanErrorResult<BoardSnapshot> {
        let mut buckets = BTreeMap::new();

        for (key, bucket) in payload {
            match FeedbackStatus::from_str(&key) {
                Ok(status) => {
                    buckets.insert(status, bucket);
                }
                Err(_) => warn!(
                    "Skipping unknown status column '{}' ({} items)",
                    key,
                    bucket.len()
                ),
            }
        }

        Ok(BoardSnapshot::from_buckets(buckets)?)
    }
}
