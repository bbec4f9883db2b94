use sqlx::PgPool;
use uuid::Uuid;

use crate::config::get_config;
use crate::dto::quiz_dto::SubmittedAnswer;
use crate::error::{Error, Result};
use crate::models::progress::{ProgressRecord, ProgressRow};
use crate::models::question::Question;
use crate::models::score::ScoreResult;
use crate::services::mastery_service::MasteryService;
use crate::utils::time;

/// Keyed single-writer access to progress records. Concurrent mutation of
/// the same (student, subject) record is resolved by a version-checked
/// write: a stale version saves zero rows, surfaces as a conflict, and the
/// whole load-mutate-save sequence is replayed against a fresh record.
#[derive(Clone)]
pub struct ProgressService {
    pool: PgPool,
}

impl ProgressService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find(&self, student_id: Uuid, subject: &str) -> Result<Option<ProgressRecord>> {
        let row = sqlx::query_as::<_, ProgressRow>(
            r#"SELECT * FROM progress_records WHERE student_id = $1 AND subject = $2"#,
        )
        .bind(student_id)
        .bind(subject)
        .fetch_optional(&self.pool)
        .await?;

        row.map(ProgressRow::into_record).transpose()
    }

    pub async fn get(&self, student_id: Uuid, subject: &str) -> Result<ProgressRecord> {
        self.find(student_id, subject).await?.ok_or_else(|| {
            Error::NotFound(format!("No progress record for subject '{}'", subject))
        })
    }

    pub async fn list_for_student(&self, student_id: Uuid) -> Result<Vec<ProgressRecord>> {
        let rows = sqlx::query_as::<_, ProgressRow>(
            r#"SELECT * FROM progress_records WHERE student_id = $1 ORDER BY subject"#,
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(ProgressRow::into_record).collect()
    }

    /// Persists the record after running the pre-save `finalize` step. The
    /// version check makes the write a compare-and-swap: a fresh record
    /// (version 0) inserts, an existing one updates only if nobody else
    /// wrote since it was loaded.
    pub async fn save(&self, mut record: ProgressRecord) -> Result<ProgressRecord> {
        record.finalize(time::now());

        let expected_version = record.version;
        let row = sqlx::query_as::<_, ProgressRow>(
            r#"
            INSERT INTO progress_records (
                id, student_id, subject, lessons_completed, quizzes_completed,
                strengths, weaknesses, overall_progress, total_study_time_minutes,
                last_activity, badges, created_at, version
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13 + 1)
            ON CONFLICT (student_id, subject) DO UPDATE SET
                lessons_completed = EXCLUDED.lessons_completed,
                quizzes_completed = EXCLUDED.quizzes_completed,
                strengths = EXCLUDED.strengths,
                weaknesses = EXCLUDED.weaknesses,
                overall_progress = EXCLUDED.overall_progress,
                total_study_time_minutes = EXCLUDED.total_study_time_minutes,
                last_activity = EXCLUDED.last_activity,
                badges = EXCLUDED.badges,
                version = progress_records.version + 1
            WHERE progress_records.version = $13
            RETURNING *
            "#,
        )
        .bind(record.id)
        .bind(record.student_id)
        .bind(&record.subject)
        .bind(serde_json::to_value(&record.lessons_completed)?)
        .bind(serde_json::to_value(&record.quizzes_completed)?)
        .bind(serde_json::to_value(&record.strengths)?)
        .bind(serde_json::to_value(&record.weaknesses)?)
        .bind(record.overall_progress)
        .bind(record.total_study_time_minutes)
        .bind(record.last_activity)
        .bind(serde_json::to_value(&record.badges)?)
        .bind(record.created_at)
        .bind(expected_version)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => row.into_record(),
            None => Err(Error::Conflict(format!(
                "Progress record for student {} subject '{}' was modified concurrently",
                record.student_id, record.subject
            ))),
        }
    }

    /// Merges one graded quiz submission into the student's progress:
    /// appends the completion, updates per-topic mastery for every question,
    /// and saves. Replayed in full against a reloaded record on a version
    /// conflict; the mutation functions are safe to re-apply to a fresh
    /// record but never to a stale one.
    pub async fn apply_quiz_submission(
        &self,
        student_id: Uuid,
        subject: &str,
        quiz_id: Uuid,
        questions: &[Question],
        answers: &[SubmittedAnswer],
        result: &ScoreResult,
        time_spent_minutes: i32,
    ) -> Result<ProgressRecord> {
        let max_retries = get_config().progress_save_retries;
        let mut attempt = 0;
        loop {
            let now = time::now();
            let mut record = match self.find(student_id, subject).await? {
                Some(record) => record,
                None => ProgressRecord::new(student_id, subject, now),
            };

            record.record_quiz_completion(quiz_id, result, time_spent_minutes, now);
            for (question, answer) in questions.iter().zip(answers) {
                let is_correct = answer.answer == question.correct_answer;
                MasteryService::record_outcome(&mut record, &question.prompt, is_correct, now);
            }

            match self.save(record).await {
                Ok(saved) => return Ok(saved),
                Err(Error::Conflict(msg)) if attempt < max_retries => {
                    attempt += 1;
                    tracing::warn!(
                        "Progress save conflict (attempt {}/{}): {}",
                        attempt,
                        max_retries,
                        msg
                    );
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Records a lesson completion (overwrite on re-completion) with the
    /// same conflict-retry policy as quiz submissions.
    pub async fn apply_lesson_completion(
        &self,
        student_id: Uuid,
        subject: &str,
        lesson_id: Uuid,
        time_spent_minutes: Option<i32>,
        score: Option<i32>,
    ) -> Result<ProgressRecord> {
        let max_retries = get_config().progress_save_retries;
        let mut attempt = 0;
        loop {
            let now = time::now();
            let mut record = match self.find(student_id, subject).await? {
                Some(record) => record,
                None => ProgressRecord::new(student_id, subject, now),
            };

            record.record_lesson_completion(lesson_id, time_spent_minutes, score, now);

            match self.save(record).await {
                Ok(saved) => return Ok(saved),
                Err(Error::Conflict(msg)) if attempt < max_retries => {
                    attempt += 1;
                    tracing::warn!(
                        "Progress save conflict (attempt {}/{}): {}",
                        attempt,
                        max_retries,
                        msg
                    );
                }
                Err(e) => return Err(e),
            }
        }
    }
}
