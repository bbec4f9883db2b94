use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Lesson {
    pub id: Uuid,
    pub title: String,
    pub subject: String,
    pub grade: i32,
    pub chapter: String,
    pub content: String,
    pub objectives: JsonValue,
    pub key_terms: JsonValue,
    pub examples: JsonValue,
    pub difficulty: String,
    pub estimated_time_minutes: i32,
    pub resources: JsonValue,
    pub created_by: Option<Uuid>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyTerm {
    pub term: String,
    pub definition: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkedExample {
    pub title: String,
    pub description: String,
    pub solution: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonResource {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub url: String,
    pub description: Option<String>,
}
