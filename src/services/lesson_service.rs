use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::lesson_dto::CreateLessonPayload;
use crate::error::Result;
use crate::models::lesson::Lesson;

#[derive(Clone)]
pub struct LessonService {
    pool: PgPool,
}

impl LessonService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_lesson(
        &self,
        payload: CreateLessonPayload,
        created_by: Uuid,
    ) -> Result<Lesson> {
        let objectives = serde_json::to_value(payload.objectives.unwrap_or_default())?;
        let key_terms = serde_json::to_value(payload.key_terms.unwrap_or_default())?;
        let examples = serde_json::to_value(payload.examples.unwrap_or_default())?;
        let resources = serde_json::to_value(payload.resources.unwrap_or_default())?;
        let difficulty = payload
            .difficulty
            .unwrap_or_else(|| "Intermediate".to_string());

        let lesson = sqlx::query_as::<_, Lesson>(
            r#"
            INSERT INTO lessons (
                id, title, subject, grade, chapter, content, objectives,
                key_terms, examples, difficulty, estimated_time_minutes,
                resources, created_by
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(payload.title)
        .bind(payload.subject)
        .bind(payload.grade)
        .bind(payload.chapter)
        .bind(payload.content)
        .bind(objectives)
        .bind(key_terms)
        .bind(examples)
        .bind(difficulty)
        .bind(payload.estimated_time_minutes.unwrap_or(30))
        .bind(resources)
        .bind(created_by)
        .fetch_one(&self.pool)
        .await?;

        Ok(lesson)
    }

    pub async fn list_lessons(&self, subject: &str, grade: i32) -> Result<Vec<Lesson>> {
        let lessons = sqlx::query_as::<_, Lesson>(
            r#"
            SELECT * FROM lessons
            WHERE subject = $1 AND grade = $2
            ORDER BY created_at DESC
            "#,
        )
        .bind(subject)
        .bind(grade)
        .fetch_all(&self.pool)
        .await?;

        Ok(lessons)
    }

    pub async fn get_lesson_by_id(&self, lesson_id: Uuid) -> Result<Lesson> {
        let lesson = sqlx::query_as::<_, Lesson>(r#"SELECT * FROM lessons WHERE id = $1"#)
            .bind(lesson_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(lesson)
    }
}
