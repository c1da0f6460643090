use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("{entity} {id} not found {location}")]
    NotFound {
        entity: &'static str,
        id: String,
        location: ErrorLocation,
    },

    #[error("Constraint violation: {message} {location}")]
    ConstraintViolation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Corrupt row in column '{column}': {message} {location}")]
    Decode {
        column: &'static str,
        message: String,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        let location = ErrorLocation::from(Location::caller());

        if let sqlx::Error::Database(db_err) = &source {
            if db_err.is_unique_violation() || db_err.is_foreign_key_violation() {
                return Self::ConstraintViolation {
                    message: db_err.message().to_string(),
                    location,
                };
            }
        }

        Self::Sqlx { source, location }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
