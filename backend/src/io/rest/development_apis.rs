//! # REST API for Development Reference Data

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::info;

use super::error_response;
use crate::AppState;
use shared::DevelopmentTableResponse;

/// GET /api/development
pub async fn list_development(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/development");

    match state.development_service.list_records().await {
        Ok(records) => (StatusCode::OK, Json(DevelopmentTableResponse { records })).into_response(),
        Err(e) => error_response("Error listing development records", e),
    }
}

/// GET /api/development/:week
pub async fn get_development_week(
    State(state): State<AppState>,
    Path(week): Path<u32>,
) -> impl IntoResponse {
    info!("GET /api/development/{}", week);

    match state.development_service.record_for_week(week).await {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(e) => error_response("Error resolving development record", e),
    }
}
