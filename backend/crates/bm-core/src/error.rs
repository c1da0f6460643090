use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error on '{field}': {message} {location}")]
    Validation {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Field the error refers to, surfaced to API clients
    pub fn field(&self) -> &'static str {
        match self {
            Self::Validation { field, .. } => *field,
        }
    }

    /// Message without the location suffix
    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message, .. } => message,
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
