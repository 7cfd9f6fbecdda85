use clap::Subcommand;

#[derive(Subcommand)]
pub enum FeedbackCommands {
    /// Get a feedback item by ID
    Get {
        /// Feedback ID
        id: i64,
    },
    /// Toggle your upvote on a feedback item
    Upvote {
        /// Feedback ID
        id: i64,
    },
}
