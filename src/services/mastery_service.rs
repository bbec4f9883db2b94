use chrono::{DateTime, Utc};

use crate::models::progress::{ProgressRecord, TopicConfidence, TopicDifficulty};
use crate::services::topic_classifier::TopicClassifier;

const INITIAL_CONFIDENCE: i32 = 70;
const CONFIDENCE_STEP: i32 = 10;
const INITIAL_DIFFICULTY: i32 = 80;
const DIFFICULTY_STEP: i32 = 15;

pub struct MasteryService;

impl MasteryService {
    /// Applies one graded question outcome to the record's strength and
    /// weakness lists: exactly one tracker entry is inserted or bumped per
    /// call. Values only move toward 100 and never decay. The two lists
    /// are independent, so mixed historical performance leaves a topic in
    /// both.
    pub fn record_outcome(
        progress: &mut ProgressRecord,
        question_text: &str,
        is_correct: bool,
        now: DateTime<Utc>,
    ) {
        let topic = TopicClassifier::classify(question_text);

        if is_correct {
            match progress.strengths.iter_mut().find(|s| s.topic == topic) {
                Some(strength) => {
                    strength.confidence = (strength.confidence + CONFIDENCE_STEP).min(100);
                    strength.last_assessed = now;
                }
                None => progress.strengths.push(TopicConfidence {
                    topic,
                    confidence: INITIAL_CONFIDENCE,
                    last_assessed: now,
                }),
            }
        } else {
            match progress.weaknesses.iter_mut().find(|w| w.topic == topic) {
                Some(weakness) => {
                    weakness.difficulty = (weakness.difficulty + DIFFICULTY_STEP).min(100);
                    weakness.last_assessed = now;
                }
                None => progress.weaknesses.push(TopicDifficulty {
                    topic,
                    difficulty: INITIAL_DIFFICULTY,
                    last_assessed: now,
                    improvement_suggestions: default_suggestions(),
                }),
            }
        }
    }
}

fn default_suggestions() -> Vec<String> {
    vec![
        "Review the lesson material for this topic".to_string(),
        "Practice more questions on this concept".to_string(),
        "Ask your teacher for clarification".to_string(),
    ]
}
