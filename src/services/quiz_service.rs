use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::quiz_dto::CreateQuizPayload;
use crate::error::{Error, Result};
use crate::models::question::Question;
use crate::models::quiz::{Quiz, QuizAttempt};

#[derive(Clone)]
pub struct QuizService {
    pool: PgPool,
}

impl QuizService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_quiz(&self, payload: CreateQuizPayload, created_by: Uuid) -> Result<Quiz> {
        let questions_json = serde_json::to_value(&payload.questions)?;

        let quiz = sqlx::query_as::<_, Quiz>(
            r#"
            INSERT INTO quizzes (
                id, title, subject, grade, lesson_id, questions,
                time_limit_minutes, passing_score, attempts, created_by
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, '[]'::jsonb, $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(payload.title)
        .bind(payload.subject)
        .bind(payload.grade)
        .bind(payload.lesson_id)
        .bind(questions_json)
        .bind(payload.time_limit_minutes)
        .bind(payload.passing_score)
        .bind(created_by)
        .fetch_one(&self.pool)
        .await?;

        Ok(quiz)
    }

    pub async fn list_quizzes(&self, subject: &str, grade: i32) -> Result<Vec<Quiz>> {
        let quizzes = sqlx::query_as::<_, Quiz>(
            r#"
            SELECT * FROM quizzes
            WHERE subject = $1 AND grade = $2 AND is_active = TRUE
            ORDER BY created_at DESC
            "#,
        )
        .bind(subject)
        .bind(grade)
        .fetch_all(&self.pool)
        .await?;

        Ok(quizzes)
    }

    pub async fn get_quiz_by_id(&self, quiz_id: Uuid) -> Result<Quiz> {
        let quiz = sqlx::query_as::<_, Quiz>(r#"SELECT * FROM quizzes WHERE id = $1"#)
            .bind(quiz_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(quiz)
    }

    /// Typed view of the quiz's JSONB question column.
    pub fn questions(quiz: &Quiz) -> Result<Vec<Question>> {
        serde_json::from_value(quiz.questions.clone())
            .map_err(|e| Error::Internal(format!("Corrupt question list on quiz {}: {}", quiz.id, e)))
    }

    /// Appends one attempt to the quiz's history column. This is submission
    /// bookkeeping owned by the HTTP layer; the scoring engine never reads
    /// it back.
    pub async fn append_attempt(&self, quiz_id: Uuid, attempt: &QuizAttempt) -> Result<()> {
        let attempt_json = serde_json::to_value(attempt)?;
        sqlx::query(
            r#"
            UPDATE quizzes
            SET attempts = attempts || jsonb_build_array($1::jsonb), updated_at = NOW()
            WHERE id = $2
            "#,
        )
        .bind(attempt_json)
        .bind(quiz_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
