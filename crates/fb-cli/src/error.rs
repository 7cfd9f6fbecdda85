use crate::ClientError;

use fb_config::ConfigError;
use fb_kanban::KanbanError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Client(#[from] ClientError),

    #[error("{0}")]
    Kanban(#[from] KanbanError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Error serializing response: {0}")]
    Output(#[from] serde_json::Error),
}

pub type CliResult<T> = std::result::Result<T, CliError>;
