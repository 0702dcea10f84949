//! Router assembly: explicit state in, complete service out.

mod account;
mod common;
mod security;

pub use account::account_routes;
pub use common::common_routes;
pub use security::{cors_layer, with_security_headers, SECURITY_HEADERS};

use crate::handlers::meta::not_found;
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, Router};

/// Full service: common and account routes behind CORS and security headers.
/// The body limit is enforced by the body extractor, so an oversized request
/// gets the same JSON error shape as any other failure.
pub fn app(state: AppState, max_body_bytes: usize) -> Router {
    let router = Router::new()
        .merge(common_routes(state.clone()))
        .merge(account_routes(state))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(cors_layer());
    with_security_headers(router)
}
