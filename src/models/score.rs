use serde::{Deserialize, Serialize};

/// Breakdown of one graded quiz submission. `score` is the rounded
/// percentage of earned over total points. Pass/fail is not part of the
/// result; callers derive it against the quiz's passing score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub earned_points: i32,
    pub total_points: i32,
    pub correct_answers: i32,
    pub total_questions: i32,
    pub score: i32,
}
