use crate::{feedback_commands::FeedbackCommands, kanban_commands::KanbanCommands};

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Kanban board operations
    Kanban {
        #[command(subcommand)]
        action: KanbanCommands,
    },

    /// Single feedback item operations
    Feedback {
        #[command(subcommand)]
        action: FeedbackCommands,
    },
}
