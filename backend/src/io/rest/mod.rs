//! # REST API Interface Layer
//!
//! HTTP endpoints of the pregnancy tracker. Handlers log the request, call a
//! domain service, map the result to a shared DTO and pick the status code:
//!
//! - validation failures → 400 Bad Request
//! - unknown pregnancy → 404 Not Found
//! - second active pregnancy → 409 Conflict
//! - anything else → 500 Internal Server Error

pub mod development_apis;
pub mod mappers;
pub mod pregnancy_apis;
pub mod timeline_apis;

pub use development_apis::*;
pub use pregnancy_apis::*;
pub use timeline_apis::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use crate::domain::models::pregnancy::PregnancyError;

/// Status code for an error returned by a domain service
pub fn status_for_error(err: &anyhow::Error) -> StatusCode {
    match err.downcast_ref::<PregnancyError>() {
        Some(PregnancyError::NotFound(_)) => StatusCode::NOT_FOUND,
        Some(PregnancyError::ActivePregnancyAlreadyExists) => StatusCode::CONFLICT,
        Some(_) => StatusCode::BAD_REQUEST,
        None => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Log `err` and turn it into a plain-text error response
pub fn error_response(context: &str, err: anyhow::Error) -> Response {
    let status = status_for_error(&err);
    if status.is_server_error() {
        error!("{}: {:?}", context, err);
        (status, context.to_string()).into_response()
    } else {
        warn!("{}: {}", context, err);
        (status, err.to_string()).into_response()
    }
}

/// Liveness probe
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}
