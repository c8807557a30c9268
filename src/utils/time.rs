use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn at(date: NaiveDate, time: NaiveTime) -> NaiveDateTime {
    date.and_time(time)
}

/// Elapsed hours between two punches, rounded to two decimals.
pub fn hours_between(start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    let seconds = (end - start).num_seconds() as f64;
    round2(seconds / 3600.0)
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Fractional hours as a duration, to the nearest second.
pub fn hours_to_duration(hours: f64) -> Duration {
    Duration::seconds((hours * 3600.0).round() as i64)
}

pub fn format_hhmm(ts: NaiveDateTime) -> String {
    ts.format("%H:%M").to_string()
}
