//! Kanban status board: loading, drag-and-drop status transfer, and rendering.
//!
//! The backend is reached only through [`KanbanApi`]; the snapshot is owned by
//! a [`KanbanSession`] and changes only through its drag operations or a reload.

mod api;
mod drag_coordinator;
mod error;
mod loader;
mod render;
mod session;
mod status_transfer;

#[cfg(test)]
mod tests;

pub use api::{KanbanApi, KanbanPayload, UpvoteState};
pub use drag_coordinator::{DragCoordinator, DragState};
pub use error::{KanbanError, KanbanErrorResult};
pub use loader::{BoardLoader, LoadState};
pub use render::board_renderer::BoardRenderer;
pub use render::status_column::StatusColumn;
pub use session::KanbanSession;
pub use status_transfer::{StatusTransfer, TransferOutcome};
