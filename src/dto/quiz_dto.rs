use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::progress::ProgressRecord;
use crate::models::question::{Question, QuestionDifficulty, QuestionType};
use crate::models::score::ScoreResult;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateQuizPayload {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[validate(length(min = 1, max = 100))]
    pub subject: String,
    #[validate(range(min = 1, max = 12))]
    pub grade: i32,
    pub lesson_id: Option<Uuid>,
    #[validate(length(min = 1), nested)]
    pub questions: Vec<Question>,
    #[validate(range(min = 1))]
    pub time_limit_minutes: i32,
    #[validate(range(min = 0, max = 100))]
    pub passing_score: i32,
}

/// One answer per question index, in question order.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmittedAnswer {
    pub answer: String,
    #[validate(range(min = 0))]
    #[serde(default)]
    pub time_spent_minutes: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitQuizRequest {
    #[validate(nested)]
    pub answers: Vec<SubmittedAnswer>,
    pub started_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitQuizResponse {
    pub result: ScoreResult,
    pub passed: bool,
    pub time_spent_minutes: i32,
    pub progress: ProgressRecord,
}

/// Question view with the correct answer stripped, served to students.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicQuestion {
    pub prompt: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub options: Option<Vec<String>>,
    pub points: i32,
    pub difficulty: QuestionDifficulty,
}

impl From<&Question> for PublicQuestion {
    fn from(q: &Question) -> Self {
        Self {
            prompt: q.prompt.clone(),
            question_type: q.question_type,
            options: q.options.clone(),
            points: q.points,
            difficulty: q.difficulty,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicQuizDetail {
    pub id: Uuid,
    pub title: String,
    pub subject: String,
    pub grade: i32,
    pub lesson_id: Option<Uuid>,
    pub questions: Vec<PublicQuestion>,
    pub time_limit_minutes: i32,
    pub passing_score: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizResultsResponse {
    pub quizzes_completed: Vec<crate::models::progress::QuizCompletion>,
    pub overall_progress: i32,
    pub strengths: Vec<crate::models::progress::TopicConfidence>,
    pub weaknesses: Vec<crate::models::progress::TopicDifficulty>,
}
