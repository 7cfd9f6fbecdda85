use crate::{FeedbackId, FeedbackStatus};

use thiserror::Error;

/// Why a drop was not applied to the snapshot.
///
/// Rejections are ignored gestures, not failures; callers log them and move on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransferRejection {
    #[error("feedback {id} is not on the board")]
    UnknownItem { id: FeedbackId },

    #[error("'{key}' is not a status column on the board")]
    UnknownTarget { key: String },

    #[error("feedback {id} is already {status}")]
    SameStatus {
        id: FeedbackId,
        status: FeedbackStatus,
    },
}
