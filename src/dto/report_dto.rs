use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::report::{DailyHoursPoint, DailyStatusRow};
use crate::services::report_service::HoursFilter;
use crate::services::suggestion_service::ScheduleSuggestion;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DailyReportQuery {
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyReportItem {
    #[serde(flatten)]
    pub row: DailyStatusRow,
    pub suggestion: String,
}

impl From<DailyStatusRow> for DailyReportItem {
    fn from(row: DailyStatusRow) -> Self {
        let suggestion = ScheduleSuggestion::for_record(&row.record).to_string();
        Self { row, suggestion }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyReportResponse {
    pub date: Option<NaiveDate>,
    pub items: Vec<DailyReportItem>,
    pub message: Option<String>,
}

/// A report table. An empty table carries a message for the user
/// instead of an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportResponse<T> {
    pub items: Vec<T>,
    pub message: Option<String>,
}

impl<T> ReportResponse<T> {
    pub fn from_rows(items: Vec<T>, empty_message: &str) -> Self {
        let message = items.is_empty().then(|| empty_message.to_string());
        Self { items, message }
    }

    pub fn disabled(message: &str) -> Self {
        Self {
            items: Vec::new(),
            message: Some(message.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    /// Comma-separated employee names.
    pub employees: Option<String>,
}

impl From<DashboardQuery> for HoursFilter {
    fn from(value: DashboardQuery) -> Self {
        let employees = value
            .employees
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            from: value.from,
            to: value.to,
            employees,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub points: Vec<DailyHoursPoint>,
    pub available_dates: Vec<NaiveDate>,
    pub employees: Vec<String>,
    pub message: Option<String>,
}
