pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{signin, signup},
        auth_request::AuthRequest,
        token_response::TokenResponse,
    },
    bookmarks::{
        bookmark_dto::BookmarkDto,
        bookmarks::{create_bookmark, delete_bookmark, edit_bookmark, get_bookmark, list_bookmarks},
        create_bookmark_request::CreateBookmarkRequest,
        edit_bookmark_request::EditBookmarkRequest,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::{current_user::CurrentUser, json_body::JsonBody},
    users::{
        edit_user_request::EditUserRequest,
        user_dto::UserDto,
        users::{edit_user, get_me},
    },
};
pub use app_state::{AppState, AuthSettings};

pub use crate::routes::build_router;
