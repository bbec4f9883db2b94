use learnhub_backend::dto::quiz_dto::{CreateQuizPayload, SubmittedAnswer};
use learnhub_backend::error::Error;
use learnhub_backend::models::question::{Question, QuestionDifficulty, QuestionType};
use learnhub_backend::services::scoring_service::ScoringService;
use learnhub_backend::services::topic_classifier::TopicClassifier;
use validator::Validate;

fn question(prompt: &str, correct: &str, points: i32) -> Question {
    Question {
        prompt: prompt.to_string(),
        question_type: QuestionType::MultipleChoice,
        options: Some(vec!["A".into(), "B".into(), "C".into(), "D".into()]),
        correct_answer: correct.to_string(),
        points,
        difficulty: QuestionDifficulty::Medium,
    }
}

fn answer(text: &str) -> SubmittedAnswer {
    SubmittedAnswer {
        answer: text.to_string(),
        time_spent_minutes: 1,
    }
}

#[test]
fn half_correct_submission_scores_fifty() {
    let questions = vec![question("What is addition of", "A", 1), question("What is subtraction of", "B", 1)];
    let answers = vec![answer("A"), answer("C")];

    let result = ScoringService::score(&questions, &answers).expect("scoring");
    assert_eq!(result.earned_points, 1);
    assert_eq!(result.total_points, 2);
    assert_eq!(result.correct_answers, 1);
    assert_eq!(result.total_questions, 2);
    assert_eq!(result.score, 50);
}

#[test]
fn score_stays_within_bounds() {
    let questions = vec![
        question("q one", "A", 3),
        question("q two", "B", 5),
        question("q three", "C", 2),
    ];

    let none_right = vec![answer("X"), answer("X"), answer("X")];
    let result = ScoringService::score(&questions, &none_right).expect("scoring");
    assert_eq!(result.score, 0);

    let all_right = vec![answer("A"), answer("B"), answer("C")];
    let result = ScoringService::score(&questions, &all_right).expect("scoring");
    assert_eq!(result.score, 100);
}

#[test]
fn weighted_scores_round_to_nearest_percent() {
    // 2 of 3 points earned: 66.66 -> 67
    let questions = vec![question("q one", "A", 2), question("q two", "B", 1)];
    let answers = vec![answer("A"), answer("X")];

    let result = ScoringService::score(&questions, &answers).expect("scoring");
    assert_eq!(result.earned_points, 2);
    assert_eq!(result.score, 67);
}

#[test]
fn scoring_is_deterministic() {
    let questions = vec![question("q one", "A", 1), question("q two", "B", 2)];
    let answers = vec![answer("A"), answer("B")];

    let first = ScoringService::score(&questions, &answers).expect("scoring");
    let second = ScoringService::score(&questions, &answers).expect("scoring");
    assert_eq!(first, second);
}

#[test]
fn comparison_is_case_and_whitespace_sensitive() {
    let questions = vec![question("q one", "Paris", 1)];

    let result = ScoringService::score(&questions, &[answer("paris")]).expect("scoring");
    assert_eq!(result.correct_answers, 0);

    let result = ScoringService::score(&questions, &[answer("Paris ")]).expect("scoring");
    assert_eq!(result.correct_answers, 0);

    let result = ScoringService::score(&questions, &[answer("Paris")]).expect("scoring");
    assert_eq!(result.correct_answers, 1);
}

#[test]
fn zero_total_points_is_a_configuration_error() {
    let questions = vec![question("q one", "A", 0), question("q two", "B", 0)];
    let answers = vec![answer("A"), answer("B")];

    let err = ScoringService::score(&questions, &answers).unwrap_err();
    assert!(matches!(err, Error::Config(_)), "got {:?}", err);
}

#[test]
fn answer_count_mismatch_is_rejected_without_partial_scoring() {
    let questions = vec![question("q one", "A", 1), question("q two", "B", 1)];

    let err = ScoringService::score(&questions, &[answer("A")]).unwrap_err();
    assert!(matches!(err, Error::BadRequest(_)), "got {:?}", err);

    let too_many = vec![answer("A"), answer("B"), answer("C")];
    let err = ScoringService::score(&questions, &too_many).unwrap_err();
    assert!(matches!(err, Error::BadRequest(_)), "got {:?}", err);
}

fn quiz_payload(questions: Vec<Question>) -> CreateQuizPayload {
    CreateQuizPayload {
        title: "Fractions check".to_string(),
        subject: "Math".to_string(),
        grade: 5,
        lesson_id: None,
        questions,
        time_limit_minutes: 15,
        passing_score: 60,
    }
}

#[test]
fn quiz_creation_rejects_non_positive_point_weights() {
    // a negative weight would let earned points go below zero and push the
    // percentage outside 0..=100, so it must never get past creation
    let negative = quiz_payload(vec![question("q one", "A", -1), question("q two", "B", 3)]);
    assert!(negative.validate().is_err());

    let zero = quiz_payload(vec![question("q one", "A", 0)]);
    assert!(zero.validate().is_err());

    let positive = quiz_payload(vec![question("q one", "A", 1), question("q two", "B", 3)]);
    assert!(positive.validate().is_ok());
}

#[test]
fn empty_quiz_cannot_be_scored() {
    let err = ScoringService::score(&[], &[]).unwrap_err();
    assert!(matches!(err, Error::Config(_)), "got {:?}", err);
}

#[test]
fn classifier_takes_first_three_words() {
    assert_eq!(
        TopicClassifier::classify("What is the capital of France?"),
        "What is the"
    );
}

#[test]
fn classifier_collapses_extra_whitespace() {
    assert_eq!(
        TopicClassifier::classify("  Solve   the \t equation below"),
        "Solve the equation"
    );
}

#[test]
fn classifier_handles_short_prompts() {
    assert_eq!(TopicClassifier::classify("Why?"), "Why?");
    assert_eq!(TopicClassifier::classify(""), "");
}

#[test]
fn identical_leading_words_share_a_bucket() {
    let a = TopicClassifier::classify("What is the sum of 2 and 2?");
    let b = TopicClassifier::classify("What is the boiling point of water?");
    assert_eq!(a, b);
}
