//! Column decoding shared by the repositories.
//!
//! Ids are stored as TEXT and timestamps as unix seconds.

use crate::{DbError, Result as DbErrorResult};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use uuid::Uuid;

#[track_caller]
pub(crate) fn parse_uuid(value: &str, column: &'static str) -> DbErrorResult<Uuid> {
    Uuid::parse_str(value).map_err(|e| DbError::Decode {
        column,
        message: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub(crate) fn parse_timestamp(secs: i64, column: &'static str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0).ok_or_else(|| DbError::Decode {
        column,
        message: format!("timestamp {} out of range", secs),
        location: ErrorLocation::from(Location::caller()),
    })
}
