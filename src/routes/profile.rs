use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Json, Response},
    Extension,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::config::get_config;
use crate::dto::analytics_dto::StudentProfileResponse;
use crate::middleware::auth::Actor;
use crate::AppState;

/// Cross-subject statistics for one student. Students may only read their
/// own profile; teachers may read anyone's.
#[axum::debug_handler]
pub async fn student_profile(
    State(state): State<AppState>,
    Path(student_id): Path<Uuid>,
    Extension(actor): Extension<Actor>,
) -> crate::error::Result<Response> {
    if actor.id != student_id && !actor.is_teacher() {
        return Err(crate::error::Error::Forbidden("Access denied".to_string()));
    }

    let (statistics, progress_records) = state
        .analytics_service
        .profile_for_student(student_id)
        .await?;

    Ok(Json(StudentProfileResponse {
        student_id,
        statistics,
        progress_records,
    })
    .into_response())
}

#[derive(Debug, Deserialize)]
pub struct AnalyticsParams {
    pub window_days: Option<i64>,
}

/// Study analytics for the calling student over a lookback window.
#[axum::debug_handler]
pub async fn analytics(
    State(state): State<AppState>,
    Query(params): Query<AnalyticsParams>,
    Extension(actor): Extension<Actor>,
) -> crate::error::Result<Response> {
    let window_days = params
        .window_days
        .unwrap_or(get_config().analytics_window_days);
    if window_days <= 0 {
        return Err(crate::error::Error::BadRequest(
            "window_days must be positive".to_string(),
        ));
    }

    let report = state
        .analytics_service
        .report_for_student(actor.id, window_days)
        .await?;

    Ok(Json(report).into_response())
}
