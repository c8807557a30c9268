use attendance_backend::models::attendance::AttendanceRecord;
use attendance_backend::models::employee::Employee;
use attendance_backend::models::report::DailyStatus;
use attendance_backend::services::record_provider::{RecordProvider, SimulatedRecordProvider};
use attendance_backend::services::report_service::{HoursFilter, ReportService};
use chrono::{NaiveDate, NaiveDateTime};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
}

fn ts(date: NaiveDate, hh: u32, mm: u32, ss: u32) -> NaiveDateTime {
    date.and_hms_opt(hh, mm, ss).unwrap()
}

fn juan() -> Employee {
    Employee::new(101, "Juan Pérez", 8.0)
}

fn maria() -> Employee {
    Employee::new(102, "María López", 6.0)
}

fn shift(employee: &Employee, date: NaiveDate, end: (u32, u32, u32)) -> AttendanceRecord {
    AttendanceRecord::worked(
        employee,
        date,
        Some(ts(date, 8, 0, 0)),
        Some(ts(date, end.0, end.1, end.2)),
        false,
        false,
    )
}

#[test]
fn status_boundary_is_strict() {
    let at_limit = shift(&juan(), day(4), (17, 0, 0));
    let just_over = shift(&juan(), day(5), (17, 0, 36));
    assert_eq!(at_limit.hours_worked, 9.0);
    assert_eq!(just_over.hours_worked, 9.01);

    assert_eq!(ReportService::classify(&at_limit, 1.0), DailyStatus::Ok);
    assert_eq!(ReportService::classify(&just_over, 1.0), DailyStatus::OverTarget);
    // The threshold is a parameter, not a constant.
    assert_eq!(ReportService::classify(&at_limit, 0.5), DailyStatus::OverTarget);
}

#[test]
fn status_priority_malformed_then_open_then_over_target() {
    let date = day(4);
    let both = AttendanceRecord::worked(&juan(), date, None, None, true, true);
    assert_eq!(ReportService::classify(&both, 1.0), DailyStatus::Malformed);

    let open = AttendanceRecord::worked(&juan(), date, Some(ts(date, 8, 0, 0)), None, true, false);
    assert_eq!(ReportService::classify(&open, 1.0), DailyStatus::Open);

    let mut long_but_open = shift(&juan(), date, (22, 0, 0));
    long_but_open.is_open = true;
    assert_eq!(ReportService::classify(&long_but_open, 1.0), DailyStatus::Open);

    assert_eq!(
        ReportService::classify(&shift(&juan(), date, (22, 0, 0)), 1.0),
        DailyStatus::OverTarget
    );
}

#[test]
fn daily_status_only_returns_requested_date() {
    let records = vec![
        shift(&juan(), day(4), (16, 0, 0)),
        shift(&maria(), day(4), (14, 0, 0)),
        shift(&juan(), day(5), (16, 0, 0)),
    ];

    let rows = ReportService::daily_status(&records, day(4), 1.0);
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.record.date == day(4)));
    assert!(rows.iter().all(|r| r.status == DailyStatus::Ok));
}

#[test]
fn missing_punches_give_zero_hours() {
    let date = day(4);
    let no_out = AttendanceRecord::worked(&juan(), date, Some(ts(date, 8, 0, 0)), None, true, false);
    let no_in = AttendanceRecord::worked(&juan(), date, None, Some(ts(date, 16, 0, 0)), false, true);
    assert_eq!(no_out.hours_worked, 0.0);
    assert_eq!(no_in.hours_worked, 0.0);

    let off = AttendanceRecord::day_off(&juan(), date);
    assert!(!off.should_have_worked);
    assert!(off.first_checkin.is_none() && off.last_checkout.is_none());
    assert_eq!(off.hours_worked, 0.0);
}

#[test]
fn weekly_summary_aggregates_per_employee_in_first_seen_order() {
    let d = day(4);
    let records = vec![
        shift(&maria(), d, (15, 0, 0)),
        shift(&juan(), d, (17, 30, 0)),
        AttendanceRecord::worked(&juan(), day(5), Some(ts(day(5), 8, 0, 0)), None, true, true),
        AttendanceRecord::day_off(&juan(), day(6)),
        AttendanceRecord::worked(&maria(), day(5), None, None, false, true),
    ];

    let rows = ReportService::weekly_summary(&records);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].employee_id, 102);
    assert_eq!(rows[1].employee_id, 101);

    let juan_row = &rows[1];
    assert_eq!(juan_row.total_worked, 9.5);
    assert_eq!(juan_row.total_target, 24.0);
    assert_eq!(juan_row.days_scheduled, 2);
    assert_eq!(juan_row.malformed_count, 1);
    assert_eq!(juan_row.open_count, 1);
    assert_eq!(juan_row.overtime, 9.5 - 24.0);

    let maria_row = &rows[0];
    assert_eq!(maria_row.total_worked, 7.0);
    assert_eq!(maria_row.days_scheduled, 2);
    assert_eq!(maria_row.malformed_count, 1);
    assert_eq!(maria_row.open_count, 0);
}

#[test]
fn weekly_totals_match_sum_of_daily_hours() {
    let roster = vec![juan(), maria(), Employee::new(103, "Pedro García", 4.0)];
    let records = SimulatedRecordProvider::new(7)
        .fetch(&roster, 14, day(20))
        .unwrap();

    let weekly = ReportService::weekly_summary(&records);
    for row in weekly {
        let daily_sum: f64 = ReportService::available_dates(&records)
            .into_iter()
            .flat_map(|date| ReportService::daily_status(&records, date, 1.0))
            .filter(|r| r.record.employee_id == row.employee_id)
            .map(|r| r.record.hours_worked)
            .sum();
        assert!((row.total_worked - daily_sum).abs() < 1e-9);
    }
}

#[test]
fn anomaly_ranking_sorted_with_stable_ties() {
    let d = day(4);
    let pedro = Employee::new(103, "Pedro García", 4.0);
    let records = vec![
        shift(&juan(), d, (16, 0, 0)),
        AttendanceRecord::worked(&maria(), d, None, None, true, true),
        AttendanceRecord::worked(&pedro, d, Some(ts(d, 8, 0, 0)), None, true, false),
        AttendanceRecord::worked(&juan(), day(5), Some(ts(day(5), 8, 0, 0)), None, true, false),
    ];

    let rows = ReportService::anomaly_ranking(&records);
    let order: Vec<(i64, u32)> = rows.iter().map(|r| (r.employee_id, r.anomaly_score)).collect();
    assert_eq!(order, vec![(102, 2), (101, 1), (103, 1)]);
    assert!(rows.windows(2).all(|w| w[0].anomaly_score >= w[1].anomaly_score));
    assert!(rows
        .iter()
        .all(|r| r.anomaly_score == r.malformed_count + r.open_count));
}

#[test]
fn absence_list_only_includes_scheduled_days_without_hours() {
    let d = day(4);
    let records = vec![
        AttendanceRecord::day_off(&juan(), d),
        AttendanceRecord::worked(&maria(), d, None, Some(ts(d, 14, 0, 0)), false, true),
        shift(&juan(), day(5), (16, 0, 0)),
    ];

    let rows = ReportService::absence_list(&records);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].employee_id, 102);
    assert_eq!(rows[0].date, d);
    assert_eq!(rows[0].employee_name, "María López");
}

#[test]
fn absence_list_never_contains_days_off() {
    let roster = vec![juan(), maria()];
    let records = SimulatedRecordProvider::new(3)
        .fetch(&roster, 30, day(30))
        .unwrap();

    for absence in ReportService::absence_list(&records) {
        let source = records
            .iter()
            .find(|r| r.employee_id == absence.employee_id && r.date == absence.date)
            .unwrap();
        assert!(source.should_have_worked);
    }
}

#[test]
fn hours_per_day_filters_by_range_and_employee() {
    let records = vec![
        shift(&juan(), day(3), (16, 0, 0)),
        shift(&maria(), day(3), (14, 0, 0)),
        shift(&juan(), day(4), (17, 0, 0)),
        shift(&maria(), day(5), (14, 0, 0)),
    ];

    let all = ReportService::hours_per_day(&records, &HoursFilter::default());
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].date, day(3));
    assert_eq!(all[0].hours_worked, 14.0);

    let filter = HoursFilter {
        from: Some(day(4)),
        to: None,
        employees: vec!["María López".to_string()],
    };
    let points = ReportService::hours_per_day(&records, &filter);
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].date, day(5));
    assert_eq!(points[0].hours_worked, 6.0);

    let nothing = HoursFilter {
        from: Some(day(6)),
        ..HoursFilter::default()
    };
    assert!(ReportService::hours_per_day(&records, &nothing).is_empty());
}

#[test]
fn empty_table_yields_empty_reports() {
    let records: Vec<AttendanceRecord> = Vec::new();
    assert!(ReportService::daily_status(&records, day(1), 1.0).is_empty());
    assert!(ReportService::weekly_summary(&records).is_empty());
    assert!(ReportService::anomaly_ranking(&records).is_empty());
    assert!(ReportService::absence_list(&records).is_empty());
    assert!(ReportService::hours_per_day(&records, &HoursFilter::default()).is_empty());
    assert_eq!(ReportService::latest_date(&records), None);
}
