//! Health, readiness and service metadata.

use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

pub const SERVICE_NAME: &str = "Account REST API Service";

#[derive(Serialize)]
pub struct HealthBody {
    status: &'static str,
}

#[derive(Serialize)]
pub struct ReadyBody {
    status: &'static str,
    database: &'static str,
}

#[derive(Serialize)]
pub struct IndexBody {
    name: &'static str,
    version: &'static str,
    paths: &'static str,
}

/// GET /health
pub async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "OK" })
}

/// GET /ready: 503 when the store does not answer.
pub async fn ready(
    State(state): State<AppState>,
) -> Result<Json<ReadyBody>, (StatusCode, Json<ReadyBody>)> {
    if let Err(e) = state.store.ping().await {
        tracing::warn!(error = %e, "readiness check failed");
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadyBody {
                status: "degraded",
                database: "unavailable",
            }),
        ));
    }
    Ok(Json(ReadyBody {
        status: "OK",
        database: "OK",
    }))
}

/// GET /
pub async fn index() -> Json<IndexBody> {
    Json(IndexBody {
        name: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        paths: "/accounts",
    })
}

/// Fallback for paths no route matches.
pub async fn not_found() -> AppError {
    AppError::NotFound("no such route".into())
}
