pub mod analytics_service;
pub mod lesson_service;
pub mod mastery_service;
pub mod progress_service;
pub mod quiz_service;
pub mod scoring_service;
pub mod topic_classifier;
