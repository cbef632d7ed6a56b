//! # REST API for Pregnancy Profiles
//!
//! Endpoints for creating, retrieving, updating and deactivating pregnancies.
//! Profiles are never deleted.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::info;

use super::error_response;
use super::mappers::PregnancyMapper;
use crate::AppState;
use shared::{CreatePregnancyRequest, UpdatePregnancyRequest};

/// POST /api/users/:user_id/pregnancies
pub async fn create_pregnancy(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(request): Json<CreatePregnancyRequest>,
) -> impl IntoResponse {
    info!("POST /api/users/{}/pregnancies - request: {:?}", user_id, request);

    match state.pregnancy_service.create_pregnancy(&user_id, request).await {
        Ok(pregnancy) => (
            StatusCode::CREATED,
            Json(PregnancyMapper::to_response_dto(pregnancy, "Pregnancy created successfully")),
        )
            .into_response(),
        Err(e) => error_response("Failed to create pregnancy", e),
    }
}

/// GET /api/users/:user_id/pregnancies
pub async fn list_pregnancies(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/users/{}/pregnancies", user_id);

    match state.pregnancy_service.list_pregnancies(&user_id).await {
        Ok(pregnancies) => (StatusCode::OK, Json(PregnancyMapper::to_list_dto(pregnancies))).into_response(),
        Err(e) => error_response("Error listing pregnancies", e),
    }
}

/// GET /api/users/:user_id/pregnancies/active
pub async fn get_active_pregnancy(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/users/{}/pregnancies/active", user_id);

    match state.pregnancy_service.get_active_pregnancy(&user_id).await {
        Ok(pregnancy) => (StatusCode::OK, Json(PregnancyMapper::to_active_dto(pregnancy))).into_response(),
        Err(e) => error_response("Error retrieving active pregnancy", e),
    }
}

/// GET /api/pregnancies/:pregnancy_id
pub async fn get_pregnancy(
    State(state): State<AppState>,
    Path(pregnancy_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/pregnancies/{}", pregnancy_id);

    match state.pregnancy_service.get_pregnancy(&pregnancy_id).await {
        Ok(Some(pregnancy)) => (StatusCode::OK, Json(PregnancyMapper::to_dto(pregnancy))).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, "Pregnancy not found").into_response(),
        Err(e) => error_response("Error retrieving pregnancy", e),
    }
}

/// PUT /api/pregnancies/:pregnancy_id
pub async fn update_pregnancy(
    State(state): State<AppState>,
    Path(pregnancy_id): Path<String>,
    Json(request): Json<UpdatePregnancyRequest>,
) -> impl IntoResponse {
    info!("PUT /api/pregnancies/{} - request: {:?}", pregnancy_id, request);

    match state.pregnancy_service.update_pregnancy(&pregnancy_id, request).await {
        Ok(pregnancy) => (
            StatusCode::OK,
            Json(PregnancyMapper::to_response_dto(pregnancy, "Pregnancy updated successfully")),
        )
            .into_response(),
        Err(e) => error_response("Failed to update pregnancy", e),
    }
}

/// POST /api/pregnancies/:pregnancy_id/deactivate
pub async fn deactivate_pregnancy(
    State(state): State<AppState>,
    Path(pregnancy_id): Path<String>,
) -> impl IntoResponse {
    info!("POST /api/pregnancies/{}/deactivate", pregnancy_id);

    match state.pregnancy_service.deactivate_pregnancy(&pregnancy_id).await {
        Ok(pregnancy) => (
            StatusCode::OK,
            Json(PregnancyMapper::to_response_dto(pregnancy, "Pregnancy deactivated")),
        )
            .into_response(),
        Err(e) => error_response("Failed to deactivate pregnancy", e),
    }
}
