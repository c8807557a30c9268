use crate::models::attendance::AttendanceRecord;
use crate::models::report::{
    AbsenceRow, AnomalyRow, DailyHoursPoint, DailyStatus, DailyStatusRow, WeeklySummaryRow,
};
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};

/// Date range and employee subset for the dashboard chart. Unset bounds and an
/// empty employee list do not filter.
#[derive(Debug, Clone, Default)]
pub struct HoursFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub employees: Vec<String>,
}

impl HoursFilter {
    fn matches(&self, record: &AttendanceRecord) -> bool {
        if self.from.is_some_and(|from| record.date < from) {
            return false;
        }
        if self.to.is_some_and(|to| record.date > to) {
            return false;
        }
        self.employees.is_empty() || self.employees.iter().any(|name| *name == record.employee_name)
    }
}

/// Read-only projections over the attendance table. Every function accepts
/// an empty slice and returns an empty result for it.
pub struct ReportService;

impl ReportService {
    pub fn classify(record: &AttendanceRecord, extra_hours_threshold: f64) -> DailyStatus {
        if record.is_malformed {
            DailyStatus::Malformed
        } else if record.is_open {
            DailyStatus::Open
        } else if record.hours_worked > record.target_hours + extra_hours_threshold {
            DailyStatus::OverTarget
        } else {
            DailyStatus::Ok
        }
    }

    pub fn daily_status(
        records: &[AttendanceRecord],
        date: NaiveDate,
        extra_hours_threshold: f64,
    ) -> Vec<DailyStatusRow> {
        records
            .iter()
            .filter(|r| r.date == date)
            .map(|r| DailyStatusRow {
                record: r.clone(),
                status: Self::classify(r, extra_hours_threshold),
            })
            .collect()
    }

    /// Totals per employee, in the order employees first appear.
    pub fn weekly_summary(records: &[AttendanceRecord]) -> Vec<WeeklySummaryRow> {
        let mut rows: Vec<WeeklySummaryRow> = Vec::new();
        let mut index: HashMap<i64, usize> = HashMap::new();

        for record in records {
            let idx = *index.entry(record.employee_id).or_insert_with(|| {
                rows.push(WeeklySummaryRow {
                    employee_id: record.employee_id,
                    employee_name: record.employee_name.clone(),
                    total_worked: 0.0,
                    total_target: 0.0,
                    days_scheduled: 0,
                    malformed_count: 0,
                    open_count: 0,
                    overtime: 0.0,
                });
                rows.len() - 1
            });

            let row = &mut rows[idx];
            row.total_worked += record.hours_worked;
            row.total_target += record.target_hours;
            row.days_scheduled += u32::from(record.should_have_worked);
            row.malformed_count += u32::from(record.is_malformed);
            row.open_count += u32::from(record.is_open);
        }

        for row in &mut rows {
            row.overtime = row.total_worked - row.total_target;
        }
        rows
    }

    pub fn anomaly_ranking(records: &[AttendanceRecord]) -> Vec<AnomalyRow> {
        let mut rows: Vec<AnomalyRow> = Self::weekly_summary(records)
            .into_iter()
            .map(|s| AnomalyRow {
                employee_id: s.employee_id,
                employee_name: s.employee_name,
                malformed_count: s.malformed_count,
                open_count: s.open_count,
                anomaly_score: s.malformed_count + s.open_count,
            })
            .collect();

        // sort_by is stable: equal scores keep roster order
        rows.sort_by(|a, b| b.anomaly_score.cmp(&a.anomaly_score));
        rows
    }

    pub fn absence_list(records: &[AttendanceRecord]) -> Vec<AbsenceRow> {
        records
            .iter()
            .filter(|r| r.should_have_worked && r.hours_worked == 0.0)
            .map(|r| AbsenceRow {
                date: r.date,
                employee_id: r.employee_id,
                employee_name: r.employee_name.clone(),
            })
            .collect()
    }

    /// Total hours worked per day, oldest first.
    pub fn hours_per_day(records: &[AttendanceRecord], filter: &HoursFilter) -> Vec<DailyHoursPoint> {
        let mut totals: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        for record in records.iter().filter(|r| filter.matches(r)) {
            *totals.entry(record.date).or_insert(0.0) += record.hours_worked;
        }

        totals
            .into_iter()
            .map(|(date, hours_worked)| DailyHoursPoint { date, hours_worked })
            .collect()
    }

    pub fn latest_date(records: &[AttendanceRecord]) -> Option<NaiveDate> {
        records.iter().map(|r| r.date).max()
    }

    pub fn available_dates(records: &[AttendanceRecord]) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = records.iter().map(|r| r.date).collect();
        dates.sort();
        dates.dedup();
        dates
    }

    pub fn employee_names(records: &[AttendanceRecord]) -> Vec<String> {
        let mut names: Vec<String> = records.iter().map(|r| r.employee_name.clone()).collect();
        names.sort();
        names.dedup();
        names
    }
}
