use crate::{
    BoardLoader, DragCoordinator, DragState, KanbanApi, KanbanError, KanbanErrorResult,
    LoadState, StatusTransfer, TransferOutcome, UpvoteState,
};

use fb_core::{BoardSnapshot, FeedbackId, FeedbackItem};

use log::{debug, info, warn};

/// One Kanban view: the backend handle, the snapshot and the drag state.
///
/// A drop is a two-phase commit. [`KanbanSession::drag_end`] applies the
/// change locally; [`KanbanSession::persist`] sends it; [`KanbanSession::reconcile`]
/// keeps the local state on success and reloads the whole board on failure.
pub struct KanbanSession<A> {
    api: A,
    loader: BoardLoader,
    coordinator: DragCoordinator,
}

impl<A: KanbanApi> KanbanSession<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            loader: BoardLoader::new(),
            coordinator: DragCoordinator::new(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn snapshot(&self) -> Option<&BoardSnapshot> {
        self.loader.snapshot()
    }

    pub fn load_state(&self) -> LoadState<'_> {
        self.loader.state()
    }

    pub fn drag_state(&self) -> DragState {
        self.coordinator.state()
    }

    /// Fetch the board from the backend, replacing the snapshot
    pub async fn load(&mut self) -> KanbanErrorResult<&BoardSnapshot> {
        self.loader.load(&self.api).await
    }

    pub fn drag_start(&mut self, id: FeedbackId) {
        self.coordinator.drag_start(id);
    }

    pub fn drag_over(&mut self, key: &str) {
        self.coordinator.drag_over(key);
    }

    pub fn drag_cancel(&mut self) {
        self.coordinator.drag_cancel();
    }

    /// Phase one: validate the drop and apply it to the snapshot.
    ///
    /// Returns `None` for an ignored drop. The drag is over either way.
    pub fn drag_end(&mut self, id: FeedbackId, key: &str) -> Option<StatusTransfer> {
        match self.loader.snapshot_mut() {
            Some(snapshot) => self.coordinator.drag_end(id, key, snapshot),
            None => {
                debug!("Ignoring drop of feedback {}: board not loaded", id);
                self.coordinator.drag_cancel();
                None
            }
        }
    }

    /// Phase two: send the status change to the backend.
    ///
    /// Takes `&self`, so transfers of different items may be in flight together.
    pub async fn persist(&self, transfer: &StatusTransfer) -> KanbanErrorResult<FeedbackItem> {
        debug!(
            "Persisting feedback {} status {} -> {}",
            transfer.id, transfer.from, transfer.to
        );
        self.api.update_status(transfer.id, transfer.to).await
    }

    /// Settle a persisted transfer.
    ///
    /// Success leaves the optimistic state alone. Failure discards it by
    /// reloading the whole board; there is no per-item rollback.
    pub async fn reconcile(
        &mut self,
        transfer: StatusTransfer,
        result: KanbanErrorResult<FeedbackItem>,
    ) -> TransferOutcome {
        match result {
            Ok(item) => {
                info!("Feedback {} moved to {}", transfer.id, transfer.to);
                TransferOutcome::Confirmed(item)
            }
            Err(e) => {
                warn!(
                    "Failed to move feedback {} to {}, reloading board: {}",
                    transfer.id, transfer.to, e
                );
                let error = e.to_string();
                match self.load().await {
                    Ok(_) => TransferOutcome::Resynced { error },
                    Err(reload) => TransferOutcome::ResyncFailed {
                        error,
                        reload_error: reload.to_string(),
                    },
                }
            }
        }
    }

    /// End the drag of `id` over `key` and carry the transfer through to completion.
    pub async fn drop_item(&mut self, id: FeedbackId, key: &str) -> TransferOutcome {
        let Some(transfer) = self.drag_end(id, key) else {
            return TransferOutcome::Ignored;
        };

        let result = self.persist(&transfer).await;
        self.reconcile(transfer, result).await
    }

    /// Toggle the viewer's upvote and mirror the backend's answer locally.
    pub async fn toggle_upvote(&mut self, id: FeedbackId) -> KanbanErrorResult<UpvoteState> {
        if self.loader.snapshot().is_none() {
            return Err(KanbanError::not_loaded());
        }

        let state = self.api.toggle_upvote(id).await?;

        if let Some(snapshot) = self.loader.snapshot_mut()
            && snapshot.apply_upvote(id, state.is_upvoted()).is_none()
        {
            debug!("Upvoted feedback {} is not on the board", id);
        }

        Ok(state)
    }
}
