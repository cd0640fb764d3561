//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};

use super::handlers;
use crate::presentation::middleware::auth_middleware;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(public_routes())
        .merge(protected_routes(state.clone()))
        .with_state(state)
}

/// Registration, token lifecycle and thread reads
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(handlers::users::register))
        .route(
            "/authentications",
            post(handlers::authentications::login)
                .put(handlers::authentications::refresh)
                .delete(handlers::authentications::logout),
        )
        .route("/threads/{thread_id}", get(handlers::threads::get_thread))
}

/// Writes on behalf of the bearer of an access token
fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/threads", post(handlers::threads::add_thread))
        .route(
            "/threads/{thread_id}/comments",
            post(handlers::comments::add_comment),
        )
        .route(
            "/threads/{thread_id}/comments/{comment_id}",
            delete(handlers::comments::delete_comment),
        )
        .route(
            "/threads/{thread_id}/comments/{comment_id}/replies",
            post(handlers::replies::add_reply),
        )
        .route(
            "/threads/{thread_id}/comments/{comment_id}/replies/{reply_id}",
            delete(handlers::replies::delete_reply),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
