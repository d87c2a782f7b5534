use axum::routing::{get, post};
use axum::Router;

use crate::handler;
use crate::server::AppState;

/// Build the axum router with all Bookchain endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handler::list_blocks).post(handler::submit_checkout))
        .route("/new", post(handler::new_book))
        .route("/validate", get(handler::validate_chain))
        .route("/health", get(handler::health))
        .with_state(state)
}
