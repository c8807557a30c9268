use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::attendance::AttendanceRecord;

/// Daily classification, listed from highest to lowest priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DailyStatus {
    Malformed,
    Open,
    OverTarget,
    Ok,
}

impl DailyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DailyStatus::Malformed => "malformed",
            DailyStatus::Open => "open",
            DailyStatus::OverTarget => "over_target",
            DailyStatus::Ok => "ok",
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, DailyStatus::Ok)
    }
}

impl fmt::Display for DailyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyStatusRow {
    #[serde(flatten)]
    pub record: AttendanceRecord,
    pub status: DailyStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySummaryRow {
    pub employee_id: i64,
    pub employee_name: String,
    pub total_worked: f64,
    pub total_target: f64,
    pub days_scheduled: u32,
    pub malformed_count: u32,
    pub open_count: u32,
    pub overtime: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyRow {
    pub employee_id: i64,
    pub employee_name: String,
    pub malformed_count: u32,
    pub open_count: u32,
    pub anomaly_score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbsenceRow {
    pub date: NaiveDate,
    pub employee_id: i64,
    pub employee_name: String,
}

/// One point of the dashboard's hours-per-day series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyHoursPoint {
    pub date: NaiveDate,
    pub hours_worked: f64,
}
