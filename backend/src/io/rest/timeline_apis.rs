//! # REST API for the Gestational Timeline
//!
//! Week, trimester, progress and size comparison, either for a user's active
//! pregnancy or for a date supplied in the query string.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;

use super::error_response;
use super::mappers::TimelineMapper;
use crate::domain::models::pregnancy::PregnancyError;
use crate::domain::pregnancy_service::parse_date;
use crate::domain::timeline::GestationAnchor;
use crate::AppState;

/// Query parameters for the timeline endpoints
#[derive(Deserialize, Debug, Default)]
pub struct TimelineQuery {
    pub lmp_date: Option<String>,
    pub due_date: Option<String>,
    /// Compute for this date instead of the server's today
    pub today: Option<String>,
}

fn parse_today(query: &TimelineQuery) -> Result<Option<NaiveDate>, PregnancyError> {
    query.today.as_deref().map(parse_date).transpose()
}

fn parse_query_anchor(query: &TimelineQuery) -> Result<GestationAnchor, PregnancyError> {
    match (query.lmp_date.as_deref(), query.due_date.as_deref()) {
        (Some(lmp), None) => Ok(GestationAnchor::Lmp(parse_date(lmp)?)),
        (None, Some(due)) => Ok(GestationAnchor::DueDate(parse_date(due)?)),
        (Some(_), Some(_)) => Err(PregnancyError::ConflictingAnchors),
        (None, None) => Err(PregnancyError::MissingAnchor),
    }
}

/// GET /api/users/:user_id/timeline
pub async fn get_user_timeline(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<TimelineQuery>,
) -> impl IntoResponse {
    info!("GET /api/users/{}/timeline - query: {:?}", user_id, query);

    let today = match parse_today(&query) {
        Ok(today) => today,
        Err(e) => return error_response("Invalid timeline query", e.into()),
    };

    match state.timeline_service.timeline_for_user(&user_id, today).await {
        Ok(Some(report)) => (StatusCode::OK, Json(TimelineMapper::to_dto(report))).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, "No active pregnancy").into_response(),
        Err(e) => error_response("Error computing timeline", e),
    }
}

/// GET /api/timeline?lmp_date=YYYY-MM-DD or ?due_date=YYYY-MM-DD
///
/// Stateless: nothing is read from or written to storage apart from the reference table.
pub async fn calculate_timeline(
    State(state): State<AppState>,
    Query(query): Query<TimelineQuery>,
) -> impl IntoResponse {
    info!("GET /api/timeline - query: {:?}", query);

    let parsed = parse_query_anchor(&query).and_then(|anchor| Ok((anchor, parse_today(&query)?)));
    let (anchor, today) = match parsed {
        Ok(parsed) => parsed,
        Err(e) => return error_response("Invalid timeline query", e.into()),
    };

    match state.timeline_service.timeline_for_anchor(anchor, today).await {
        Ok(report) => (StatusCode::OK, Json(TimelineMapper::to_dto(report))).into_response(),
        Err(e) => error_response("Error computing timeline", e),
    }
}
