use chrono::{DateTime, Duration, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::analytics_dto::{
    AnalyticsResponse, DailyActivity, ProfileStatistics, QuizPerformancePoint, StrengthsAndWeaknesses,
    SubjectProgress,
};
use crate::error::Result;
use crate::models::progress::ProgressRecord;
use crate::services::progress_service::ProgressService;
use crate::utils::time;

#[derive(Clone)]
pub struct AnalyticsService {
    pool: PgPool,
}

impl AnalyticsService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn report_for_student(
        &self,
        student_id: Uuid,
        window_days: i64,
    ) -> Result<AnalyticsResponse> {
        let records = ProgressService::new(self.pool.clone())
            .list_for_student(student_id)
            .await?;
        Ok(Self::build_report(&records, window_days, time::now()))
    }

    pub async fn profile_for_student(&self, student_id: Uuid) -> Result<(ProfileStatistics, Vec<ProgressRecord>)> {
        let records = ProgressService::new(self.pool.clone())
            .list_for_student(student_id)
            .await?;
        let stats = Self::build_profile_statistics(&records);
        Ok((stats, records))
    }

    /// Derives the dashboard view from one student's progress records.
    /// Subjects are unique per record, so the study-time map has one entry
    /// per record; quiz performance points keep discovery order; strengths
    /// and weaknesses are concatenated across subjects without merging.
    pub fn build_report(
        records: &[ProgressRecord],
        window_days: i64,
        now: DateTime<Utc>,
    ) -> AnalyticsResponse {
        let window_start = now - Duration::days(window_days);

        let mut report = AnalyticsResponse {
            study_time_by_subject: Default::default(),
            quiz_performance_over_time: Vec::new(),
            strengths_and_weaknesses: StrengthsAndWeaknesses::default(),
            daily_activity: Default::default(),
        };

        for record in records {
            report
                .study_time_by_subject
                .insert(record.subject.clone(), record.total_study_time_minutes);

            for quiz in &record.quizzes_completed {
                if quiz.completed_at >= window_start {
                    report.quiz_performance_over_time.push(QuizPerformancePoint {
                        date: quiz.completed_at,
                        subject: record.subject.clone(),
                        score: quiz.score,
                    });
                }
            }

            report
                .strengths_and_weaknesses
                .strengths
                .extend(record.strengths.iter().cloned());
            report
                .strengths_and_weaknesses
                .weaknesses
                .extend(record.weaknesses.iter().cloned());

            for lesson in &record.lessons_completed {
                let entry: &mut DailyActivity = report
                    .daily_activity
                    .entry(time::date_key(lesson.completed_at))
                    .or_default();
                entry.lessons += 1;
                entry.study_time += i64::from(lesson.time_spent_minutes.unwrap_or(0));
            }
            for quiz in &record.quizzes_completed {
                let entry: &mut DailyActivity = report
                    .daily_activity
                    .entry(time::date_key(quiz.completed_at))
                    .or_default();
                entry.quizzes += 1;
                entry.study_time += i64::from(quiz.time_spent_minutes);
            }
        }

        report
    }

    /// Cross-subject profile statistics: per-subject counts plus the mean of
    /// every quiz score the student has ever recorded.
    pub fn build_profile_statistics(records: &[ProgressRecord]) -> ProfileStatistics {
        let mut stats = ProfileStatistics {
            total_lessons: 0,
            total_quizzes: 0,
            total_study_time_minutes: 0,
            overall_score: 0,
            subject_progress: Default::default(),
        };

        let mut all_scores: i64 = 0;
        let mut all_count: i64 = 0;

        for record in records {
            stats.total_lessons += record.lessons_completed.len();
            stats.total_quizzes += record.quizzes_completed.len();
            stats.total_study_time_minutes += record.total_study_time_minutes;

            let subject_scores: i64 = record
                .quizzes_completed
                .iter()
                .map(|q| i64::from(q.score))
                .sum();
            let subject_count = record.quizzes_completed.len() as i64;
            all_scores += subject_scores;
            all_count += subject_count;

            let average_score = if subject_count > 0 {
                (subject_scores as f64 / subject_count as f64).round() as i32
            } else {
                0
            };

            stats.subject_progress.insert(
                record.subject.clone(),
                SubjectProgress {
                    lessons_completed: record.lessons_completed.len(),
                    quizzes_completed: record.quizzes_completed.len(),
                    average_score,
                    overall_progress: record.overall_progress,
                    study_time_minutes: record.total_study_time_minutes,
                    badges: record.badges.len(),
                },
            );
        }

        stats.overall_score = if all_count > 0 {
            (all_scores as f64 / all_count as f64).round() as i32
        } else {
            0
        };

        stats
    }
}
