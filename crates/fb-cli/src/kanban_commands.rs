use clap::Subcommand;

#[derive(Subcommand)]
pub enum KanbanCommands {
    /// Load and render the board
    Show,
    /// Drag a card onto another column
    Move {
        /// Feedback ID
        id: i64,
        /// Target column key (open, in_progress, resolved, completed)
        status: String,
    },
}
