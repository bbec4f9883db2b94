use serde::{Deserialize, Serialize};
use validator::Validate;

/// One quiz question as authored by a teacher and stored inside the
/// quiz's JSONB question list.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Question {
    #[validate(length(min = 1))]
    pub prompt: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    #[serde(default)]
    pub options: Option<Vec<String>>,
    pub correct_answer: String,
    #[serde(default = "default_points")]
    #[validate(range(min = 1))]
    pub points: i32,
    #[serde(default)]
    pub difficulty: QuestionDifficulty,
}

fn default_points() -> i32 {
    1
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    MultipleChoice,
    TrueFalse,
    ShortAnswer,
    Essay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QuestionDifficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}
