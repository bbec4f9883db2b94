pub mod lesson;
pub mod progress;
pub mod question;
pub mod quiz;
pub mod score;
