//! Response shaping helpers. Bodies are bare JSON, without an envelope.

use axum::{
    http::{header::LOCATION, HeaderName, StatusCode},
    Json,
};
use serde::Serialize;

/// 201 with a `Location` header pointing at the new resource.
pub fn created_at<T: Serialize>(
    location: String,
    data: T,
) -> (StatusCode, [(HeaderName, String); 1], Json<T>) {
    (StatusCode::CREATED, [(LOCATION, location)], Json(data))
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}
