use fb_core::CoreError;

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KanbanError {
    #[error("Backend request failed: {message} {location}")]
    Api {
        message: String,
        location: ErrorLocation,
    },

    #[error("Snapshot error: {source}")]
    Snapshot {
        #[from]
        source: CoreError,
    },

    #[error("Board has not been loaded {location}")]
    NotLoaded { location: ErrorLocation },
}

impl KanbanError {
    /// Create a backend failure error
    #[track_caller]
    pub fn api<S: Into<String>>(message: S) -> Self {
        KanbanError::Api {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_loaded() -> Self {
        KanbanError::NotLoaded {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type KanbanErrorResult<T> = StdResult<T, KanbanError>;
