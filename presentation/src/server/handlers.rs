//! HTTP request handlers

use super::AppState;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use research_domain::{Query, ResearchResult};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

/// Error body in the `{"detail": "..."}` shape clients expect
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Request-level failure mapped to an HTTP status
pub enum ApiError {
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(detail) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse { detail })).into_response()
            }
        }
    }
}

pub async fn root() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "Backend is running",
        message: Some("Use /search endpoint"),
    })
}

/// Liveness probe
pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok",
        message: None,
    })
}

/// Run one research request
pub async fn search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<ResearchResult>, ApiError> {
    let query = Query::try_new(request.query).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    info!(query = %query, "Incoming research request");

    let result = state.use_case.execute(&query).await;
    Ok(Json(result))
}
