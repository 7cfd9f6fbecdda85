pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, CoreResult};
pub use models::board_snapshot::BoardSnapshot;
pub use models::creator_ref::CreatorRef;
pub use models::feedback_item::{FeedbackId, FeedbackItem};
pub use models::feedback_status::FeedbackStatus;
pub use models::status_bucket::StatusBucket;
pub use models::tag::Tag;
pub use models::transfer_rejection::TransferRejection;
