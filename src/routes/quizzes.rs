use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    Extension,
};
use uuid::Uuid;
use validator::Validate;

use crate::dto::quiz_dto::{
    CreateQuizPayload, PublicQuestion, PublicQuizDetail, QuizResultsResponse, SubmitQuizRequest,
    SubmitQuizResponse,
};
use crate::middleware::auth::Actor;
use crate::models::quiz::{AttemptAnswer, QuizAttempt};
use crate::services::quiz_service::QuizService;
use crate::services::scoring_service::ScoringService;
use crate::utils::time;
use crate::AppState;

#[axum::debug_handler]
pub async fn list_quizzes(
    State(state): State<AppState>,
    Path((subject, grade)): Path<(String, i32)>,
) -> crate::error::Result<Response> {
    let quizzes = state.quiz_service.list_quizzes(&subject, grade).await?;
    Ok(Json(quizzes).into_response())
}

/// Quiz detail. Students get the question list with correct answers
/// stripped; teachers see the full record.
#[axum::debug_handler]
pub async fn get_quiz(
    State(state): State<AppState>,
    Path(quiz_id): Path<Uuid>,
    Extension(actor): Extension<Actor>,
) -> crate::error::Result<Response> {
    let quiz = state.quiz_service.get_quiz_by_id(quiz_id).await?;

    if actor.is_student() {
        let questions = QuizService::questions(&quiz)?;
        let detail = PublicQuizDetail {
            id: quiz.id,
            title: quiz.title,
            subject: quiz.subject,
            grade: quiz.grade,
            lesson_id: quiz.lesson_id,
            questions: questions.iter().map(PublicQuestion::from).collect(),
            time_limit_minutes: quiz.time_limit_minutes,
            passing_score: quiz.passing_score,
        };
        return Ok(Json(detail).into_response());
    }

    Ok(Json(quiz).into_response())
}

/// Scores a submission and merges it into the student's progress record:
/// score calculation, attempt-history append on the quiz, quiz completion
/// append, and per-question mastery updates.
#[axum::debug_handler]
pub async fn submit_quiz(
    State(state): State<AppState>,
    Path(quiz_id): Path<Uuid>,
    Extension(actor): Extension<Actor>,
    Json(req): Json<SubmitQuizRequest>,
) -> crate::error::Result<Response> {
    req.validate()?;

    let quiz = state.quiz_service.get_quiz_by_id(quiz_id).await?;
    let questions = QuizService::questions(&quiz)?;

    let result = ScoringService::score(&questions, &req.answers)?;
    let passed = result.score >= quiz.passing_score;

    let completed_at = time::now();
    let time_spent_minutes = match req.started_at {
        Some(started_at) => time::minutes_between(started_at, completed_at),
        None => req.answers.iter().map(|a| a.time_spent_minutes).sum(),
    };

    let attempt = QuizAttempt {
        student_id: actor.id,
        answers: questions
            .iter()
            .zip(&req.answers)
            .enumerate()
            .map(|(index, (question, answer))| AttemptAnswer {
                question_index: index,
                answer: answer.answer.clone(),
                is_correct: answer.answer == question.correct_answer,
                time_spent_minutes: answer.time_spent_minutes,
            })
            .collect(),
        score: result.score,
        started_at: req.started_at,
        completed_at,
        passed,
    };
    state.quiz_service.append_attempt(quiz.id, &attempt).await?;

    let progress = state
        .progress_service
        .apply_quiz_submission(
            actor.id,
            &quiz.subject,
            quiz.id,
            &questions,
            &req.answers,
            &result,
            time_spent_minutes,
        )
        .await?;

    tracing::info!(
        "Quiz {} submitted by {}: score={} passed={}",
        quiz.id,
        actor.id,
        result.score,
        passed
    );

    Ok(Json(SubmitQuizResponse {
        result,
        passed,
        time_spent_minutes,
        progress,
    })
    .into_response())
}

#[axum::debug_handler]
pub async fn create_quiz(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Json(payload): Json<CreateQuizPayload>,
) -> crate::error::Result<Response> {
    payload.validate()?;
    let quiz = state.quiz_service.create_quiz(payload, actor.id).await?;
    Ok((StatusCode::CREATED, Json(quiz)).into_response())
}

/// Quiz history for one student and subject. Students may only read their
/// own results; teachers may read anyone's.
#[axum::debug_handler]
pub async fn quiz_results(
    State(state): State<AppState>,
    Path((student_id, subject)): Path<(Uuid, String)>,
    Extension(actor): Extension<Actor>,
) -> crate::error::Result<Response> {
    if actor.id != student_id && !actor.is_teacher() {
        return Err(crate::error::Error::Forbidden(
            "Access denied".to_string(),
        ));
    }

    let results = match state.progress_service.find(student_id, &subject).await? {
        Some(progress) => QuizResultsResponse {
            quizzes_completed: progress.quizzes_completed,
            overall_progress: progress.overall_progress,
            strengths: progress.strengths,
            weaknesses: progress.weaknesses,
        },
        None => QuizResultsResponse {
            quizzes_completed: Vec::new(),
            overall_progress: 0,
            strengths: Vec::new(),
            weaknesses: Vec::new(),
        },
    };

    Ok(Json(results).into_response())
}
