use fb_core::{FeedbackId, FeedbackItem, FeedbackStatus};

/// A status change already applied to the local snapshot and awaiting persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusTransfer {
    pub id: FeedbackId,
    pub from: FeedbackStatus,
    pub to: FeedbackStatus,
}

/// How a drop ended
#[derive(Debug, Clone, PartialEq)]
pub enum TransferOutcome {
    /// The drop was not a valid transfer; nothing changed and nothing was sent
    Ignored,
    /// The backend accepted the change; the optimistic state stands
    Confirmed(FeedbackItem),
    /// The backend rejected the change and the board was reloaded
    Resynced { error: String },
    /// The backend rejected the change and the reload failed too
    ResyncFailed { error: String, reload_error: String },
}

impl TransferOutcome {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed(_))
    }
}
