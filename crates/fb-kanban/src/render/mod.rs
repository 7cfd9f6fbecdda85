pub mod board_renderer;
pub mod status_column;
