use bm_core::User;

use serde::Serialize;

/// Public view of a user; the password hash never leaves the backend
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id.to_string(),
            email: u.email,
            first_name: u.first_name,
            last_name: u.last_name,
            created_at: u.created_at.timestamp(),
            updated_at: u.updated_at.timestamp(),
        }
    }
}
