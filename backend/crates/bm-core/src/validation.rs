//! Input validation for request payloads.
//!
//! Handlers call these at the top of the handler body and propagate the
//! error with `?`; nothing here panics or throws.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

pub const MAX_EMAIL_LENGTH: usize = 254;
pub const MAX_TEXT_LENGTH: usize = 2048;

/// Validate an email address: one `@`, non-empty local part, dotted domain
#[track_caller]
pub fn validate_email(value: &str, field: &'static str) -> CoreErrorResult<()> {
    let invalid = |message: &str| CoreError::Validation {
        field,
        message: message.to_string(),
        location: ErrorLocation::from(Location::caller()),
    };

    if value.trim().is_empty() {
        return Err(invalid("email should not be empty"));
    }
    if value.len() > MAX_EMAIL_LENGTH {
        return Err(invalid("email exceeds maximum length"));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(invalid("email must be an email"));
    }

    let Some((local, domain)) = value.split_once('@') else {
        return Err(invalid("email must be an email"));
    };

    let domain_ok = !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty());

    if local.is_empty() || !domain_ok {
        return Err(invalid("email must be an email"));
    }

    Ok(())
}

/// Validate a required, non-blank string field
#[track_caller]
pub fn validate_required_text(value: &str, field: &'static str) -> CoreErrorResult<()> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation {
            field,
            message: format!("{} should not be empty", field),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    if value.len() > MAX_TEXT_LENGTH {
        return Err(CoreError::Validation {
            field,
            message: format!("{} must not exceed {} characters", field, MAX_TEXT_LENGTH),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(())
}

/// Validate an optional string field; when present it follows the required rules
#[track_caller]
pub fn validate_optional_text(value: Option<&str>, field: &'static str) -> CoreErrorResult<()> {
    match value {
        Some(v) => validate_required_text(v, field),
        None => Ok(()),
    }
}
