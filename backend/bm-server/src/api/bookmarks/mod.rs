pub mod bookmark_dto;
pub mod bookmarks;
pub mod create_bookmark_request;
pub mod edit_bookmark_request;
