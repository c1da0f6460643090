use crate::{AppState, health};
use crate::{
    create_bookmark, delete_bookmark, edit_bookmark, edit_user, get_bookmark, get_me,
    list_bookmarks, signin, signup,
};

use axum::{
    Router,
    routing::{get, patch, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Auth
        .route("/auth/signup", post(signup))
        .route("/auth/signin", post(signin))
        // Users
        .route("/users/me", get(get_me))
        .route("/users", patch(edit_user))
        // Bookmarks
        .route("/bookmarks", get(list_bookmarks).post(create_bookmark))
        .route(
            "/bookmarks/{id}",
            get(get_bookmark)
                .patch(edit_bookmark)
                .delete(delete_bookmark),
        )
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
