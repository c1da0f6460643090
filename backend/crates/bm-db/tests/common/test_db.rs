use bm_core::User;
use bm_db::UserRepository;

use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    bm_db::open_in_memory_pool()
        .await
        .expect("Failed to create test pool")
}

/// Inserts a user so bookmarks have an owner to reference
pub async fn create_test_user(pool: &SqlitePool, email: &str) -> User {
    let user = crate::common::create_user_fixture(email);
    UserRepository::new(pool.clone())
        .create(&user)
        .await
        .expect("Failed to create test user");
    user
}
