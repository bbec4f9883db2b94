pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::services::{
    analytics_service::AnalyticsService, lesson_service::LessonService,
    progress_service::ProgressService, quiz_service::QuizService,
};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub lesson_service: LessonService,
    pub quiz_service: QuizService,
    pub progress_service: ProgressService,
    pub analytics_service: AnalyticsService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let lesson_service = LessonService::new(pool.clone());
        let quiz_service = QuizService::new(pool.clone());
        let progress_service = ProgressService::new(pool.clone());
        let analytics_service = AnalyticsService::new(pool.clone());

        Self {
            pool,
            lesson_service,
            quiz_service,
            progress_service,
            analytics_service,
        }
    }
}
