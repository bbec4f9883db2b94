use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Quiz {
    pub id: Uuid,
    pub title: String,
    pub subject: String,
    pub grade: i32,
    pub lesson_id: Option<Uuid>,
    /// Ordered question list, deserialized to `Vec<Question>` by the services.
    pub questions: JsonValue,
    pub time_limit_minutes: i32,
    pub passing_score: i32,
    /// Attempt history appended by the submission route, never read by the
    /// scoring engine itself.
    pub attempts: JsonValue,
    pub created_by: Option<Uuid>,
    pub is_active: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// One historical attempt entry stored in the quiz's `attempts` column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizAttempt {
    pub student_id: Uuid,
    pub answers: Vec<AttemptAnswer>,
    pub score: i32,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: DateTime<Utc>,
    pub passed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttemptAnswer {
    pub question_index: usize,
    pub answer: String,
    pub is_correct: bool,
    pub time_spent_minutes: i32,
}
