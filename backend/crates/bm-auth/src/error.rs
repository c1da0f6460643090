use bm_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Credentials taken {location}")]
    DuplicateEmail { location: ErrorLocation },

    /// Same error for unknown email and wrong password
    #[error("Credentials incorrect {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Invalid token: {message} {location}")]
    InvalidToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("Missing authorization header {location}")]
    MissingHeader { location: ErrorLocation },

    #[error("Invalid authorization scheme: expected 'Bearer' {location}")]
    InvalidScheme { location: ErrorLocation },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    #[error("Rate limit exceeded: {limit} requests per {window_secs}s {location}")]
    RateLimitExceeded {
        limit: u32,
        window_secs: u64,
        location: ErrorLocation,
    },

    #[error("Password hashing failed: {message} {location}")]
    Hashing {
        message: String,
        location: ErrorLocation,
    },

    #[error("JWT signing failed: {source} {location}")]
    Signing {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Credential store error: {source} {location}")]
    Store {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Machine-readable code for client responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateEmail { .. } => "CREDENTIALS_TAKEN",
            Self::InvalidCredentials { .. } => "CREDENTIALS_INCORRECT",
            Self::InvalidToken { .. } => "INVALID_TOKEN",
            Self::TokenExpired { .. } => "TOKEN_EXPIRED",
            Self::MissingHeader { .. } => "MISSING_AUTH_HEADER",
            Self::InvalidScheme { .. } => "INVALID_AUTH_SCHEME",
            Self::InvalidClaim { .. } => "INVALID_CLAIM",
            Self::Forbidden { .. } => "FORBIDDEN",
            Self::RateLimitExceeded { .. } => "RATE_LIMITED",
            Self::Hashing { .. } | Self::Signing { .. } | Self::Store { .. } => "INTERNAL_ERROR",
        }
    }

    /// True for every failure of the access guard (401 territory)
    pub fn is_unauthenticated(&self) -> bool {
        matches!(
            self,
            Self::InvalidToken { .. }
                | Self::TokenExpired { .. }
                | Self::MissingHeader { .. }
                | Self::InvalidScheme { .. }
                | Self::InvalidClaim { .. }
        )
    }
}

impl From<DbError> for AuthError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
