use crate::dto::quiz_dto::SubmittedAnswer;
use crate::error::{Error, Result};
use crate::models::question::Question;
use crate::models::score::ScoreResult;

pub struct ScoringService;

impl ScoringService {
    /// Grades a submission against the quiz's question list.
    ///
    /// Every question type is compared by exact string equality against the
    /// stored correct answer; there is no partial credit and no
    /// type-specific comparison, essays included. A quiz whose point
    /// weights sum to zero is a configuration error, and a submission whose
    /// answer count does not match the question count is rejected outright
    /// rather than partially scored.
    pub fn score(questions: &[Question], answers: &[SubmittedAnswer]) -> Result<ScoreResult> {
        if answers.len() != questions.len() {
            return Err(Error::BadRequest(format!(
                "Submission has {} answers for {} questions",
                answers.len(),
                questions.len()
            )));
        }

        let total_points: i32 = questions.iter().map(|q| q.points).sum();
        if total_points == 0 {
            return Err(Error::Config(
                "Quiz has zero total points and cannot be scored".to_string(),
            ));
        }

        let mut earned_points: i32 = 0;
        let mut correct_answers: i32 = 0;

        for (question, answer) in questions.iter().zip(answers) {
            if answer.answer == question.correct_answer {
                earned_points += question.points;
                correct_answers += 1;
            }
        }

        let score = (f64::from(earned_points) / f64::from(total_points) * 100.0).round() as i32;

        Ok(ScoreResult {
            earned_points,
            total_points,
            correct_answers,
            total_questions: questions.len() as i32,
            score,
        })
    }
}
