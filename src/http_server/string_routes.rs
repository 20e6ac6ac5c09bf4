//! String HTTP Routes
//!
//! Endpoints for storing, fetching, listing, and deleting analyzed
//! strings.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;

use crate::store::{StringRecord, StringStore};

use super::errors::{ApiError, ApiResult};
use super::filter::ListFilters;

// ==================
// Shared State
// ==================

/// String state shared across handlers
pub struct StringsState {
    pub store: StringStore,
}

impl StringsState {
    pub fn new() -> Self {
        Self {
            store: StringStore::new(),
        }
    }
}

impl Default for StringsState {
    fn default() -> Self {
        Self::new()
    }
}

// ==================
// Response Types
// ==================

/// Response body for the list endpoint
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub data: Vec<StringRecord>,
    pub count: usize,
    /// The raw query options as received, recognized or not.
    pub filters_applied: HashMap<String, String>,
}

// ==================
// String Routes
// ==================

/// Create string routes
pub fn string_routes(state: Arc<StringsState>) -> Router {
    Router::new()
        .route("/strings", get(list_strings_handler))
        .route("/strings", post(create_string_handler))
        .route("/strings/:value", get(get_string_handler))
        .route("/strings/:value", delete(delete_string_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

/// `POST /strings` - analyze and store a string.
///
/// The body is taken as raw JSON so a missing or non-string `value`
/// maps to 422 with the service's own error body rather than an
/// extractor rejection.
async fn create_string_handler(
    State(state): State<Arc<StringsState>>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<StringRecord>)> {
    let value = body
        .get("value")
        .and_then(Value::as_str)
        .ok_or(ApiError::InvalidValue)?;

    let record = state.store.insert(value)?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// `GET /strings/:value` - fetch a stored string by exact value.
async fn get_string_handler(
    State(state): State<Arc<StringsState>>,
    Path(value): Path<String>,
) -> ApiResult<Json<StringRecord>> {
    let record = state.store.get(&value)?;
    Ok(Json(record))
}

/// `GET /strings` - list stored strings, optionally filtered.
async fn list_strings_handler(
    State(state): State<Arc<StringsState>>,
    Query(query): Query<HashMap<String, String>>,
) -> ApiResult<Json<ListResponse>> {
    let filters = ListFilters::from_query(&query);

    let data: Vec<StringRecord> = state
        .store
        .list()?
        .into_iter()
        .filter(|record| filters.matches(record))
        .collect();

    Ok(Json(ListResponse {
        count: data.len(),
        data,
        filters_applied: query,
    }))
}

/// `DELETE /strings/:value` - delete a stored string by exact value.
async fn delete_string_handler(
    State(state): State<Arc<StringsState>>,
    Path(value): Path<String>,
) -> ApiResult<StatusCode> {
    state.store.remove(&value)?;
    Ok(StatusCode::NO_CONTENT)
}
