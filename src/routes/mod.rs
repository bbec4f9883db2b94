pub mod health;
pub mod lessons;
pub mod profile;
pub mod quizzes;
