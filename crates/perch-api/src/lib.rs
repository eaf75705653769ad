pub mod error;
pub mod posts;
pub mod users;

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, post},
};

use perch_store::Store;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub store: Store,
}

/// Assemble the service router. Middleware layers (CORS, request
/// tracing) are the binary's concern.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/post", post(posts::create_post))
        .route("/post/{id}", get(posts::get_post))
        .route("/post/{id}/delete/{key}", delete(posts::delete_post))
        .route("/posts/range", get(posts::posts_by_range))
        .route("/posts/user/{user_id}", get(posts::posts_by_user))
        .route("/user", post(users::create_user))
        .route(
            "/user/{identifier}",
            get(users::get_user).put(users::update_user),
        )
        .with_state(state)
}
