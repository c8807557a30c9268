use attendance_backend::models::attendance::AttendanceRecord;
use attendance_backend::models::employee::Employee;
use attendance_backend::services::suggestion_service::ScheduleSuggestion;
use chrono::{NaiveDate, NaiveDateTime};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()
}

fn ts(hh: u32, mm: u32) -> NaiveDateTime {
    date().and_hms_opt(hh, mm, 0).unwrap()
}

fn record(checkin: Option<NaiveDateTime>, checkout: Option<NaiveDateTime>) -> AttendanceRecord {
    let employee = Employee::new(101, "Juan Pérez", 8.0);
    AttendanceRecord::worked(&employee, date(), checkin, checkout, false, false)
}

#[test]
fn over_target_moves_checkout_earlier() {
    let r = record(Some(ts(8, 0)), Some(ts(17, 30)));
    assert_eq!(r.hours_worked, 9.5);

    let suggestion = ScheduleSuggestion::for_record(&r);
    assert_eq!(
        suggestion,
        ScheduleSuggestion::LeaveEarlier {
            hours: 1.5,
            current_checkout: ts(17, 30),
            suggested_checkout: ts(16, 0),
        }
    );
    assert_eq!(
        suggestion.to_string(),
        "over by 1.50 h: move checkout from 17:30 to 16:00"
    );
}

#[test]
fn short_day_moves_checkout_later() {
    let r = record(Some(ts(8, 0)), Some(ts(15, 0)));
    let suggestion = ScheduleSuggestion::for_record(&r);
    assert_eq!(
        suggestion.to_string(),
        "short by 1.00 h: move checkout from 15:00 to 16:00"
    );
}

#[test]
fn small_difference_is_on_target() {
    let r = record(Some(ts(8, 0)), Some(ts(16, 5)));
    assert_eq!(ScheduleSuggestion::for_record(&r), ScheduleSuggestion::OnTarget);
    assert_eq!(ScheduleSuggestion::for_record(&r).to_string(), "schedule OK");
}

#[test]
fn missing_punch_wins_regardless_of_other_fields() {
    let mut no_checkin = record(None, Some(ts(20, 0)));
    // Even a record that claims hours cannot be corrected without both punches.
    no_checkin.hours_worked = 12.0;
    let no_checkout = record(Some(ts(8, 0)), None);
    let neither = record(None, None);

    for r in [&no_checkin, &no_checkout, &neither] {
        assert_eq!(ScheduleSuggestion::for_record(r), ScheduleSuggestion::MissingPunch);
        assert_eq!(
            ScheduleSuggestion::for_record(r).to_string(),
            "cannot suggest (missing checkin/checkout)"
        );
    }
}

#[test]
fn suggestion_does_not_touch_the_record() {
    let r = record(Some(ts(8, 0)), Some(ts(17, 30)));
    let before = r.clone();
    let _ = ScheduleSuggestion::for_record(&r);
    assert_eq!(r, before);
}
