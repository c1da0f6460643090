//! Bookmark REST API handlers
//!
//! Reads are scoped to the caller in the query itself, so another user's
//! bookmark is indistinguishable from a missing one. Mutations load the row
//! first (404 when absent), check ownership (403), then write with the owner
//! repeated in the `WHERE` clause.

use crate::{
    ApiError, ApiResult, AppState, BookmarkDto, CreateBookmarkRequest, CurrentUser,
    EditBookmarkRequest, JsonBody,
};

use bm_auth::authorize_mutation;
use bm_core::{Bookmark, validate_optional_text, validate_required_text};

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use error_location::ErrorLocation;
use uuid::Uuid;

/// GET /bookmarks
pub async fn list_bookmarks(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<Vec<BookmarkDto>>> {
    let bookmarks = state.bookmarks.list_by_owner(user.id).await?;

    Ok(Json(bookmarks.into_iter().map(BookmarkDto::from).collect()))
}

/// POST /bookmarks
pub async fn create_bookmark(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    JsonBody(req): JsonBody<CreateBookmarkRequest>,
) -> ApiResult<(StatusCode, Json<BookmarkDto>)> {
    validate_required_text(&req.title, "title")?;
    validate_required_text(&req.link, "link")?;
    validate_optional_text(req.description.as_deref(), "description")?;

    let bookmark = Bookmark::new(user.id, req.title, req.link, req.description);
    state.bookmarks.create(&bookmark).await?;

    log::info!("User {} created bookmark {}", user.id, bookmark.id);

    Ok((StatusCode::CREATED, Json(bookmark.into())))
}

/// GET /bookmarks/{id}
pub async fn get_bookmark(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(bookmark_id): Path<String>,
) -> ApiResult<Json<BookmarkDto>> {
    let bookmark_uuid = Uuid::parse_str(&bookmark_id)?;

    let bookmark = state
        .bookmarks
        .find_by_id_for_owner(bookmark_uuid, user.id)
        .await?
        .ok_or_else(|| not_found(&bookmark_id))?;

    Ok(Json(bookmark.into()))
}

/// PATCH /bookmarks/{id}
pub async fn edit_bookmark(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(bookmark_id): Path<String>,
    JsonBody(req): JsonBody<EditBookmarkRequest>,
) -> ApiResult<Json<BookmarkDto>> {
    let bookmark_uuid = Uuid::parse_str(&bookmark_id)?;

    validate_optional_text(req.title.as_deref(), "title")?;
    validate_optional_text(req.link.as_deref(), "link")?;
    validate_optional_text(req.description.as_deref(), "description")?;

    let mut bookmark = state
        .bookmarks
        .find_by_id(bookmark_uuid)
        .await?
        .ok_or_else(|| not_found(&bookmark_id))?;

    authorize_mutation(user.id, &bookmark)?;

    bookmark.apply_edit(req.title, req.link, req.description);
    state.bookmarks.update(&bookmark).await?;

    log::info!("User {} updated bookmark {}", user.id, bookmark.id);

    Ok(Json(bookmark.into()))
}

/// DELETE /bookmarks/{id}
pub async fn delete_bookmark(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(bookmark_id): Path<String>,
) -> ApiResult<StatusCode> {
    let bookmark_uuid = Uuid::parse_str(&bookmark_id)?;

    let bookmark = state
        .bookmarks
        .find_by_id(bookmark_uuid)
        .await?
        .ok_or_else(|| not_found(&bookmark_id))?;

    authorize_mutation(user.id, &bookmark)?;

    state.bookmarks.delete(bookmark.id, user.id).await?;

    log::info!("User {} deleted bookmark {}", user.id, bookmark.id);

    Ok(StatusCode::NO_CONTENT)
}

#[track_caller]
fn not_found(bookmark_id: &str) -> ApiError {
    ApiError::NotFound {
        message: format!("Bookmark {} not found", bookmark_id),
        location: ErrorLocation::from(Location::caller()),
    }
}
