pub mod bookmark;
pub mod owned;
pub mod user;
