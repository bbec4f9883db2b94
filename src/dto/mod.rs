pub mod analytics_dto;
pub mod lesson_dto;
pub mod quiz_dto;
