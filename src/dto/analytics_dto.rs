use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::models::progress::{ProgressRecord, TopicConfidence, TopicDifficulty};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsResponse {
    pub study_time_by_subject: HashMap<String, i64>,
    pub quiz_performance_over_time: Vec<QuizPerformancePoint>,
    pub strengths_and_weaknesses: StrengthsAndWeaknesses,
    pub daily_activity: HashMap<String, DailyActivity>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizPerformancePoint {
    pub date: DateTime<Utc>,
    pub subject: String,
    pub score: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StrengthsAndWeaknesses {
    pub strengths: Vec<TopicConfidence>,
    pub weaknesses: Vec<TopicDifficulty>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DailyActivity {
    pub lessons: u32,
    pub quizzes: u32,
    pub study_time: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentProfileResponse {
    pub student_id: Uuid,
    pub statistics: ProfileStatistics,
    pub progress_records: Vec<ProgressRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileStatistics {
    pub total_lessons: usize,
    pub total_quizzes: usize,
    pub total_study_time_minutes: i64,
    pub overall_score: i32,
    pub subject_progress: HashMap<String, SubjectProgress>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectProgress {
    pub lessons_completed: usize,
    pub quizzes_completed: usize,
    pub average_score: i32,
    pub overall_progress: i32,
    pub study_time_minutes: i64,
    pub badges: usize,
}
