mod ownership;

use bm_core::User;

pub(crate) const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

pub(crate) fn test_user() -> User {
    User::new("alice@example.com".to_string(), "not-a-real-hash".to_string())
}
