//! Common routes: index, health, readiness.

use crate::handlers::meta::{health, index, ready};
use crate::state::AppState;
use axum::{routing::get, Router};

/// GET /, GET /health, GET /ready.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/ready", get(ready))
        .with_state(state)
}
