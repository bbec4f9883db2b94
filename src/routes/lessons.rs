use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json, Response},
    Extension,
};
use uuid::Uuid;
use validator::Validate;

use crate::dto::lesson_dto::{
    CompleteLessonRequest, CompleteLessonResponse, CreateLessonPayload, DashboardResponse,
    LessonWithCompletion,
};
use crate::middleware::auth::Actor;
use crate::AppState;

#[axum::debug_handler]
pub async fn list_lessons(
    State(state): State<AppState>,
    Path((subject, grade)): Path<(String, i32)>,
) -> crate::error::Result<Response> {
    let lessons = state.lesson_service.list_lessons(&subject, grade).await?;
    Ok(Json(lessons).into_response())
}

#[axum::debug_handler]
pub async fn get_lesson(
    State(state): State<AppState>,
    Path(lesson_id): Path<Uuid>,
) -> crate::error::Result<Response> {
    let lesson = state.lesson_service.get_lesson_by_id(lesson_id).await?;
    Ok(Json(lesson).into_response())
}

/// Marks a lesson finished for the calling student. A repeat completion of
/// the same lesson overwrites the stored entry rather than appending.
#[axum::debug_handler]
pub async fn complete_lesson(
    State(state): State<AppState>,
    Path(lesson_id): Path<Uuid>,
    Extension(actor): Extension<Actor>,
    Json(req): Json<CompleteLessonRequest>,
) -> crate::error::Result<Response> {
    req.validate()?;

    let lesson = state.lesson_service.get_lesson_by_id(lesson_id).await?;

    let progress = state
        .progress_service
        .apply_lesson_completion(
            actor.id,
            &lesson.subject,
            lesson_id,
            req.time_spent_minutes,
            req.score,
        )
        .await?;

    Ok(Json(CompleteLessonResponse {
        message: "Lesson marked as completed".to_string(),
        progress,
    })
    .into_response())
}

#[axum::debug_handler]
pub async fn create_lesson(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Json(payload): Json<CreateLessonPayload>,
) -> crate::error::Result<Response> {
    payload.validate()?;
    let lesson = state.lesson_service.create_lesson(payload, actor.id).await?;
    Ok((axum::http::StatusCode::CREATED, Json(lesson)).into_response())
}

/// Subject dashboard for the calling student: every lesson for the
/// subject/grade annotated with the student's completion state.
#[axum::debug_handler]
pub async fn dashboard(
    State(state): State<AppState>,
    Path((subject, grade)): Path<(String, i32)>,
    Extension(actor): Extension<Actor>,
) -> crate::error::Result<Response> {
    let lessons = state.lesson_service.list_lessons(&subject, grade).await?;
    let progress = state.progress_service.find(actor.id, &subject).await?;

    let lessons = lessons
        .into_iter()
        .map(|lesson| {
            let completion = progress.as_ref().and_then(|p| {
                p.lessons_completed
                    .iter()
                    .find(|lc| lc.lesson_id == lesson.id)
                    .cloned()
            });
            LessonWithCompletion {
                is_completed: completion.is_some(),
                completion,
                lesson,
            }
        })
        .collect();

    Ok(Json(DashboardResponse { lessons, progress }).into_response())
}
