//! REST API error types
//!
//! These errors are designed to produce consistent JSON responses
//! with appropriate HTTP status codes.

use bm_auth::AuthError;
use bm_core::CoreError;
use bm_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Missing or rejected credentials on a guarded route (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Authenticated but not allowed, or credentials refused (403)
    #[error("Forbidden ({code}): {message} {location}")]
    Forbidden {
        code: &'static str,
        message: String,
        location: ErrorLocation,
    },

    /// Write collides with existing data, e.g. a taken email (409)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// Credential endpoint throttled (429)
    #[error("Too many requests: {message} {location}")]
    TooManyRequests {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Validation { .. } | ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden { .. } => StatusCode::FORBIDDEN,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::TooManyRequests { .. } => StatusCode::TOO_MANY_REQUESTS,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let body = match self {
            ApiError::NotFound { message, .. } => ApiErrorBody {
                code: "NOT_FOUND".into(),
                message,
                field: None,
            },
            ApiError::Validation { message, field, .. } => ApiErrorBody {
                code: "VALIDATION_ERROR".into(),
                message,
                field,
            },
            ApiError::BadRequest { message, .. } => ApiErrorBody {
                code: "BAD_REQUEST".into(),
                message,
                field: None,
            },
            ApiError::Unauthorized { message, .. } => ApiErrorBody {
                code: "UNAUTHORIZED".into(),
                message,
                field: None,
            },
            ApiError::Forbidden { code, message, .. } => ApiErrorBody {
                code: code.into(),
                message,
                field: None,
            },
            ApiError::Conflict { message, .. } => ApiErrorBody {
                code: "CONFLICT".into(),
                message,
                field: None,
            },
            ApiError::TooManyRequests { message, .. } => ApiErrorBody {
                code: "RATE_LIMITED".into(),
                message,
                field: None,
            },
            ApiError::Internal { message, .. } => ApiErrorBody {
                code: "INTERNAL_ERROR".into(),
                message,
                field: None,
            },
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert UUID parse errors to API errors
impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        ApiError::Validation {
            message: format!("Invalid UUID format: {}", e),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert input validation failures to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        ApiError::Validation {
            message: e.message().to_string(),
            field: Some(e.field().to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { entity, id, .. } => ApiError::NotFound {
                message: format!("{} {} not found", entity, id),
                location: ErrorLocation::from(Location::caller()),
            },
            DbError::ConstraintViolation { .. } => ApiError::Conflict {
                message: "Conflicts with existing data".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            other => {
                // Don't expose internal database details to clients
                log::error!("Database error: {}", other);
                ApiError::Internal {
                    message: "Database operation failed".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

/// Convert auth errors to API errors
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        if e.is_unauthenticated() {
            let message = match &e {
                AuthError::MissingHeader { .. } => "Missing bearer token",
                AuthError::TokenExpired { .. } => "Token expired",
                _ => "Invalid token",
            };
            return ApiError::Unauthorized {
                message: message.to_string(),
                location,
            };
        }

        match e {
            AuthError::DuplicateEmail { .. } => ApiError::Forbidden {
                code: "CREDENTIALS_TAKEN",
                message: "Credentials taken".to_string(),
                location,
            },
            AuthError::InvalidCredentials { .. } => ApiError::Forbidden {
                code: "CREDENTIALS_INCORRECT",
                message: "Credentials incorrect".to_string(),
                location,
            },
            AuthError::Forbidden { message, .. } => ApiError::Forbidden {
                code: "FORBIDDEN",
                message,
                location,
            },
            AuthError::RateLimitExceeded {
                limit, window_secs, ..
            } => ApiError::TooManyRequests {
                message: format!(
                    "Too many attempts: limit is {} per {}s",
                    limit, window_secs
                ),
                location,
            },
            AuthError::Store { source, .. } => ApiError::from(source),
            other => {
                log::error!("Auth error: {}", other);
                ApiError::Internal {
                    message: "Authentication failed".to_string(),
                    location,
                }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
