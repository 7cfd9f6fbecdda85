pub mod board_snapshot;
pub mod creator_ref;
pub mod feedback_item;
pub mod feedback_status;
pub mod status_bucket;
pub mod tag;
pub mod transfer_rejection;
