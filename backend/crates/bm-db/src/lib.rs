pub mod connection;
pub mod error;
pub mod repositories;

mod row;

pub use connection::database::{open_in_memory_pool, open_pool, run_migrations};
pub use error::{DbError, Result};
pub use repositories::bookmark_repository::BookmarkRepository;
pub use repositories::user_repository::UserRepository;
