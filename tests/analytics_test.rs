use chrono::{Duration, TimeZone, Utc};
use learnhub_backend::models::progress::ProgressRecord;
use learnhub_backend::models::score::ScoreResult;
use learnhub_backend::services::analytics_service::AnalyticsService;
use learnhub_backend::services::mastery_service::MasteryService;
use uuid::Uuid;

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap()
}

fn quiz_result(score: i32) -> ScoreResult {
    ScoreResult {
        earned_points: score,
        total_points: 100,
        correct_answers: score,
        total_questions: 100,
        score,
    }
}

fn math_record(student: Uuid) -> ProgressRecord {
    let mut progress = ProgressRecord::new(student, "Mathematics", now() - Duration::days(60));
    progress.record_lesson_completion(
        Uuid::new_v4(),
        Some(30),
        Some(85),
        now() - Duration::days(2),
    );
    progress.record_quiz_completion(Uuid::new_v4(), &quiz_result(90), 10, now() - Duration::days(2));
    progress.record_quiz_completion(
        Uuid::new_v4(),
        &quiz_result(40),
        15,
        now() - Duration::days(45),
    );
    MasteryService::record_outcome(&mut progress, "Solve for x", true, now() - Duration::days(2));
    progress.finalize(now() - Duration::days(2));
    progress
}

fn science_record(student: Uuid) -> ProgressRecord {
    let mut progress = ProgressRecord::new(student, "Science", now() - Duration::days(30));
    progress.record_quiz_completion(Uuid::new_v4(), &quiz_result(70), 20, now() - Duration::days(5));
    MasteryService::record_outcome(
        &mut progress,
        "Name the smallest unit",
        false,
        now() - Duration::days(5),
    );
    progress.finalize(now() - Duration::days(5));
    progress
}

#[test]
fn study_time_is_mapped_per_subject() {
    let student = Uuid::new_v4();
    let records = vec![math_record(student), science_record(student)];

    let report = AnalyticsService::build_report(&records, 30, now());
    assert_eq!(report.study_time_by_subject.len(), 2);
    assert_eq!(report.study_time_by_subject["Mathematics"], 55);
    assert_eq!(report.study_time_by_subject["Science"], 20);
}

#[test]
fn quiz_performance_respects_the_lookback_window() {
    let student = Uuid::new_v4();
    let records = vec![math_record(student), science_record(student)];

    // 30-day window: the 45-day-old math quiz is excluded.
    let report = AnalyticsService::build_report(&records, 30, now());
    assert_eq!(report.quiz_performance_over_time.len(), 2);
    let scores: Vec<i32> = report
        .quiz_performance_over_time
        .iter()
        .map(|p| p.score)
        .collect();
    assert_eq!(scores, vec![90, 70]);

    // 60-day window picks it up.
    let report = AnalyticsService::build_report(&records, 60, now());
    assert_eq!(report.quiz_performance_over_time.len(), 3);
}

#[test]
fn strengths_and_weaknesses_are_concatenated_across_subjects() {
    let student = Uuid::new_v4();
    let records = vec![math_record(student), science_record(student)];

    let report = AnalyticsService::build_report(&records, 30, now());
    assert_eq!(report.strengths_and_weaknesses.strengths.len(), 1);
    assert_eq!(report.strengths_and_weaknesses.weaknesses.len(), 1);
    assert_eq!(
        report.strengths_and_weaknesses.strengths[0].topic,
        "Solve for x"
    );
}

#[test]
fn daily_activity_buckets_lessons_and_quizzes_by_date() {
    let student = Uuid::new_v4();
    let records = vec![math_record(student), science_record(student)];

    let report = AnalyticsService::build_report(&records, 60, now());

    let two_days_ago = (now() - Duration::days(2)).format("%Y-%m-%d").to_string();
    let bucket = &report.daily_activity[&two_days_ago];
    assert_eq!(bucket.lessons, 1);
    assert_eq!(bucket.quizzes, 1);
    assert_eq!(bucket.study_time, 40);

    let five_days_ago = (now() - Duration::days(5)).format("%Y-%m-%d").to_string();
    let bucket = &report.daily_activity[&five_days_ago];
    assert_eq!(bucket.lessons, 0);
    assert_eq!(bucket.quizzes, 1);
    assert_eq!(bucket.study_time, 20);
}

#[test]
fn empty_records_produce_an_empty_report() {
    let report = AnalyticsService::build_report(&[], 30, now());
    assert!(report.study_time_by_subject.is_empty());
    assert!(report.quiz_performance_over_time.is_empty());
    assert!(report.strengths_and_weaknesses.strengths.is_empty());
    assert!(report.daily_activity.is_empty());
}

#[test]
fn profile_statistics_aggregate_across_subjects() {
    let student = Uuid::new_v4();
    let records = vec![math_record(student), science_record(student)];

    let stats = AnalyticsService::build_profile_statistics(&records);
    assert_eq!(stats.total_lessons, 1);
    assert_eq!(stats.total_quizzes, 3);
    assert_eq!(stats.total_study_time_minutes, 75);
    // Mean of quiz scores 90, 40, 70 = 66.67 -> 67
    assert_eq!(stats.overall_score, 67);

    let math = &stats.subject_progress["Mathematics"];
    assert_eq!(math.lessons_completed, 1);
    assert_eq!(math.quizzes_completed, 2);
    assert_eq!(math.average_score, 65);

    let science = &stats.subject_progress["Science"];
    assert_eq!(science.average_score, 70);
}

#[test]
fn profile_statistics_handle_students_with_no_history() {
    let stats = AnalyticsService::build_profile_statistics(&[]);
    assert_eq!(stats.total_lessons, 0);
    assert_eq!(stats.overall_score, 0);
    assert!(stats.subject_progress.is_empty());
}
