use serde::Deserialize;

/// Body of signup and signin. Missing fields deserialize empty and fail validation.
#[derive(Deserialize)]
pub struct AuthRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}
