use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::lesson::{KeyTerm, Lesson, LessonResource, WorkedExample};
use crate::models::progress::{LessonCompletion, ProgressRecord};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateLessonPayload {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[validate(length(min = 1, max = 100))]
    pub subject: String,
    #[validate(range(min = 1, max = 12))]
    pub grade: i32,
    #[validate(length(min = 1, max = 255))]
    pub chapter: String,
    #[validate(length(min = 1))]
    pub content: String,
    pub objectives: Option<Vec<String>>,
    pub key_terms: Option<Vec<KeyTerm>>,
    pub examples: Option<Vec<WorkedExample>>,
    pub difficulty: Option<String>,
    #[validate(range(min = 1))]
    pub estimated_time_minutes: Option<i32>,
    pub resources: Option<Vec<LessonResource>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CompleteLessonRequest {
    #[validate(range(min = 0))]
    pub time_spent_minutes: Option<i32>,
    #[validate(range(min = 0, max = 100))]
    pub score: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompleteLessonResponse {
    pub message: String,
    pub progress: ProgressRecord,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonWithCompletion {
    #[serde(flatten)]
    pub lesson: Lesson,
    pub is_completed: bool,
    pub completion: Option<LessonCompletion>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub lessons: Vec<LessonWithCompletion>,
    pub progress: Option<ProgressRecord>,
}
