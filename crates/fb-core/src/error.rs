use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid feedback status: {value} {location}")]
    InvalidStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Inconsistent board snapshot: {message} {location}")]
    InconsistentSnapshot {
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create an inconsistent snapshot error
    #[track_caller]
    pub fn inconsistent<S: Into<String>>(message: S) -> Self {
        CoreError::InconsistentSnapshot {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type CoreResult<T> = StdResult<T, CoreError>;
