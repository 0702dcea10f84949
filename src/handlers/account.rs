//! Account CRUD handlers: create, list, read, update, delete.

use crate::error::AppError;
use crate::extractors::RequireJson;
use crate::response::{created_at, ok};
use crate::service::deserialize;
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::Value;

/// Path ids that are not integers cannot name an account.
fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::account_not_found(id_str))
}

fn parse_body(body: &Bytes) -> Result<Value, AppError> {
    serde_json::from_slice(body)
        .map_err(|e| AppError::Validation(format!("body is not valid JSON: {}", e)))
}

/// Location of a single account, relative to the service root.
pub fn account_location(id: i64) -> String {
    format!("/accounts/{}", id)
}

/// POST /accounts. Body read failures (such as exceeding the size limit) are
/// reported through [`AppError`] so every error shares one JSON shape.
pub async fn create(
    _: RequireJson,
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("Request to create an Account");
    let draft = deserialize(&parse_body(&body?)?)?;
    let account = state.store.create(draft).await?;
    tracing::info!(id = account.id, "Account created");
    Ok(created_at(account_location(account.id), account))
}

/// GET /accounts
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    tracing::info!("Request to list Accounts");
    let accounts = state.store.list_all().await?;
    tracing::info!(count = accounts.len(), "returning Accounts");
    Ok(ok(accounts))
}

/// GET /accounts/:id
pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(id = %id_str, "Request to read an Account");
    let account = state.store.find_by_id(parse_id(&id_str)?).await?;
    Ok(ok(account))
}

/// PUT /accounts/:id. An unknown id is reported before the body is looked at.
pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(id = %id_str, "Request to update an Account");
    let id = parse_id(&id_str)?;
    state.store.find_by_id(id).await?;
    let draft = deserialize(&parse_body(&body?)?)?;
    let account = state.store.update(id, draft).await?;
    Ok(ok(account))
}

/// DELETE /accounts/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(id = %id_str, "Request to delete an Account");
    state.store.delete(parse_id(&id_str)?).await?;
    Ok(StatusCode::NO_CONTENT)
}
