use crate::StatusTransfer;

use fb_core::{BoardSnapshot, FeedbackId, FeedbackStatus};

use std::str::FromStr;

use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        item: FeedbackId,
        /// Column currently under the pointer, if it is a status column
        over: Option<FeedbackStatus>,
    },
}

/// Tracks the single in-flight drag and turns drops into optimistic transfers.
#[derive(Debug, Default)]
pub struct DragCoordinator {
    state: DragState,
}

impl DragCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn dragging(&self) -> Option<FeedbackId> {
        match self.state {
            DragState::Dragging { item, .. } => Some(item),
            DragState::Idle => None,
        }
    }

    pub fn hovered(&self) -> Option<FeedbackStatus> {
        match self.state {
            DragState::Dragging { over, .. } => over,
            DragState::Idle => None,
        }
    }

    /// Begin dragging `id`. A drag already in progress is replaced.
    pub fn drag_start(&mut self, id: FeedbackId) {
        if let DragState::Dragging { item, .. } = self.state {
            debug!("Drag of feedback {} replaced by feedback {}", item, id);
        }
        self.state = DragState::Dragging { item: id, over: None };
    }

    /// Record the drop target under the pointer. Non-column keys clear it.
    pub fn drag_over(&mut self, key: &str) {
        if let DragState::Dragging { over, .. } = &mut self.state {
            *over = FeedbackStatus::from_str(key).ok();
        }
    }

    pub fn drag_cancel(&mut self) {
        self.state = DragState::Idle;
    }

    /// Finish the drag of `id` over `key`, returning to idle in every case.
    ///
    /// When the drop is a valid transfer the snapshot is mutated before this
    /// returns and the pending transfer is handed back for persistence.
    pub fn drag_end(
        &mut self,
        id: FeedbackId,
        key: &str,
        snapshot: &mut BoardSnapshot,
    ) -> Option<StatusTransfer> {
        let state = std::mem::take(&mut self.state);

        match state {
            DragState::Dragging { item, .. } if item == id => {}
            _ => {
                debug!("Ignoring drop of feedback {}: not being dragged", id);
                return None;
            }
        }

        let Some(from) = snapshot.status_of(id) else {
            debug!("Ignoring drop of feedback {}: not on the board", id);
            return None;
        };

        match snapshot.transfer_to_key(id, key) {
            Ok(item) => {
                debug!("Moved feedback {} from {} to {}", id, from, item.status);
                Some(StatusTransfer {
                    id,
                    from,
                    to: item.status,
                })
            }
            Err(rejection) => {
                debug!("Ignoring drop: {}", rejection);
                None
            }
        }
    }
}
