use bm_core::{Bookmark, User};

use uuid::Uuid;

/// Creates a User with a placeholder hash; repositories never inspect it
pub fn create_user_fixture(email: &str) -> User {
    User::new(
        email.to_string(),
        "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaGhhc2hoYXNo".to_string(),
    )
}

/// Creates a Bookmark with sensible defaults
pub fn create_bookmark_fixture(owner_id: Uuid, title: &str) -> Bookmark {
    Bookmark::new(
        owner_id,
        title.to_string(),
        "https://example.com".to_string(),
        Some("Test bookmark".to_string()),
    )
}
