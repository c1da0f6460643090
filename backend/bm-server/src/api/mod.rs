pub mod auth;
pub mod bookmarks;
pub mod error;
pub mod extractors;
pub mod users;
