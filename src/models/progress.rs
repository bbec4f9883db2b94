use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::Result;
use crate::models::score::ScoreResult;

/// Per-(student, subject) aggregate of completions and mastery signals.
/// All mutation goes through the append/update methods below; every save
/// path must call `finalize` first so the aggregate fields are never stale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressRecord {
    pub id: Uuid,
    pub student_id: Uuid,
    pub subject: String,
    pub lessons_completed: Vec<LessonCompletion>,
    pub quizzes_completed: Vec<QuizCompletion>,
    pub strengths: Vec<TopicConfidence>,
    pub weaknesses: Vec<TopicDifficulty>,
    pub overall_progress: i32,
    pub total_study_time_minutes: i64,
    pub last_activity: DateTime<Utc>,
    pub badges: Vec<Badge>,
    pub created_at: DateTime<Utc>,
    /// Optimistic-concurrency counter; 0 means not yet persisted.
    pub version: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonCompletion {
    pub lesson_id: Uuid,
    pub completed_at: DateTime<Utc>,
    pub time_spent_minutes: Option<i32>,
    pub score: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizCompletion {
    pub quiz_id: Uuid,
    pub score: i32,
    pub total_questions: i32,
    pub correct_answers: i32,
    pub completed_at: DateTime<Utc>,
    pub time_spent_minutes: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicConfidence {
    pub topic: String,
    pub confidence: i32,
    pub last_assessed: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicDifficulty {
    pub topic: String,
    pub difficulty: i32,
    pub last_assessed: DateTime<Utc>,
    pub improvement_suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Badge {
    pub name: String,
    pub description: String,
    pub earned_at: DateTime<Utc>,
}

impl ProgressRecord {
    /// Zero-valued record created lazily on the first completion event for a
    /// (student, subject) pair.
    pub fn new(student_id: Uuid, subject: &str, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            student_id,
            subject: subject.to_string(),
            lessons_completed: Vec::new(),
            quizzes_completed: Vec::new(),
            strengths: Vec::new(),
            weaknesses: Vec::new(),
            overall_progress: 0,
            total_study_time_minutes: 0,
            last_activity: now,
            badges: Vec::new(),
            created_at: now,
            version: 0,
        }
    }

    /// Records a finished lesson. Re-completing the same lesson overwrites
    /// the existing entry instead of appending a duplicate.
    pub fn record_lesson_completion(
        &mut self,
        lesson_id: Uuid,
        time_spent_minutes: Option<i32>,
        score: Option<i32>,
        now: DateTime<Utc>,
    ) {
        match self
            .lessons_completed
            .iter_mut()
            .find(|lc| lc.lesson_id == lesson_id)
        {
            Some(existing) => {
                existing.time_spent_minutes = time_spent_minutes;
                existing.score = score;
                existing.completed_at = now;
            }
            None => self.lessons_completed.push(LessonCompletion {
                lesson_id,
                completed_at: now,
                time_spent_minutes,
                score,
            }),
        }
        self.total_study_time_minutes += i64::from(time_spent_minutes.unwrap_or(0));
    }

    /// Records a graded quiz submission. Repeated attempts are all kept as
    /// history; quizzes are never deduplicated by id.
    pub fn record_quiz_completion(
        &mut self,
        quiz_id: Uuid,
        result: &ScoreResult,
        time_spent_minutes: i32,
        now: DateTime<Utc>,
    ) {
        self.quizzes_completed.push(QuizCompletion {
            quiz_id,
            score: result.score,
            total_questions: result.total_questions,
            correct_answers: result.correct_answers,
            completed_at: now,
            time_spent_minutes,
        });
        self.total_study_time_minutes += i64::from(time_spent_minutes);
    }

    /// Unweighted mean over every lesson completion that carries a score
    /// plus every quiz completion, rounded to the nearest integer.
    pub fn calculate_overall_progress(&self) -> i32 {
        let mut total_score: i64 = 0;
        let mut total_items: i64 = 0;

        for lesson in &self.lessons_completed {
            if let Some(score) = lesson.score {
                total_score += i64::from(score);
                total_items += 1;
            }
        }
        for quiz in &self.quizzes_completed {
            total_score += i64::from(quiz.score);
            total_items += 1;
        }

        if total_items == 0 {
            0
        } else {
            (total_score as f64 / total_items as f64).round() as i32
        }
    }

    /// Pre-save step: recompute the aggregate and stamp the activity time.
    /// Invoked by the progress store on every save, not left to callers.
    pub fn finalize(&mut self, now: DateTime<Utc>) {
        self.overall_progress = self.calculate_overall_progress();
        self.last_activity = now;
    }
}

/// Raw database row; the nested lists live in JSONB columns the same way
/// the quiz model stores its question list.
#[derive(Debug, Clone, FromRow)]
pub struct ProgressRow {
    pub id: Uuid,
    pub student_id: Uuid,
    pub subject: String,
    pub lessons_completed: JsonValue,
    pub quizzes_completed: JsonValue,
    pub strengths: JsonValue,
    pub weaknesses: JsonValue,
    pub overall_progress: i32,
    pub total_study_time_minutes: i64,
    pub last_activity: DateTime<Utc>,
    pub badges: JsonValue,
    pub created_at: DateTime<Utc>,
    pub version: i64,
}

impl ProgressRow {
    pub fn into_record(self) -> Result<ProgressRecord> {
        Ok(ProgressRecord {
            id: self.id,
            student_id: self.student_id,
            subject: self.subject,
            lessons_completed: serde_json::from_value(self.lessons_completed)?,
            quizzes_completed: serde_json::from_value(self.quizzes_completed)?,
            strengths: serde_json::from_value(self.strengths)?,
            weaknesses: serde_json::from_value(self.weaknesses)?,
            overall_progress: self.overall_progress,
            total_study_time_minutes: self.total_study_time_minutes,
            last_activity: self.last_activity,
            badges: serde_json::from_value(self.badges)?,
            created_at: self.created_at,
            version: self.version,
        })
    }
}
