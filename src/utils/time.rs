use chrono::{DateTime, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Calendar-date bucket key used by the daily activity report.
pub fn date_key(dt: DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d").to_string()
}

/// Whole minutes between two instants, clamped at zero.
pub fn minutes_between(start: DateTime<Utc>, end: DateTime<Utc>) -> i32 {
    ((end - start).num_seconds().max(0) as f64 / 60.0).round() as i32
}
