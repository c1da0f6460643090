//! User entity - a registered identity with credentials and profile fields.

use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A registered user.
///
/// `hash` holds the PHC-formatted Argon2 hash of the password and must never
/// leave the backend; it is redacted from `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    /// Unique across all users (enforced by the store)
    pub email: String,
    pub hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user from an email and an already-derived password hash
    pub fn new(email: String, hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            hash,
            first_name: None,
            last_name: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial profile edit. `None` leaves the field untouched.
    pub fn apply_profile_edit(
        &mut self,
        email: Option<String>,
        first_name: Option<String>,
        last_name: Option<String>,
    ) {
        if let Some(email) = email {
            self.email = email;
        }
        if first_name.is_some() {
            self.first_name = first_name;
        }
        if last_name.is_some() {
            self.last_name = last_name;
        }
        self.updated_at = Utc::now();
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("hash", &"<redacted>")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}
