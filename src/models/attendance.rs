use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::employee::Employee;
use crate::utils::time::hours_between;

/// One employee's clock-in/clock-out summary for a single calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub date: NaiveDate,
    pub employee_id: i64,
    pub employee_name: String,
    pub first_checkin: Option<NaiveDateTime>,
    pub last_checkout: Option<NaiveDateTime>,
    pub hours_worked: f64,
    pub target_hours: f64,
    pub is_open: bool,
    pub is_malformed: bool,
    pub should_have_worked: bool,
}

impl AttendanceRecord {
    /// A day off: no punches and nothing expected.
    pub fn day_off(employee: &Employee, date: NaiveDate) -> Self {
        Self {
            date,
            employee_id: employee.id,
            employee_name: employee.name.clone(),
            first_checkin: None,
            last_checkout: None,
            hours_worked: 0.0,
            target_hours: employee.target_hours,
            is_open: false,
            is_malformed: false,
            should_have_worked: false,
        }
    }

    /// A scheduled day. Hours are derived from the punches and are zero
    /// unless both are present.
    pub fn worked(
        employee: &Employee,
        date: NaiveDate,
        first_checkin: Option<NaiveDateTime>,
        last_checkout: Option<NaiveDateTime>,
        is_open: bool,
        is_malformed: bool,
    ) -> Self {
        let hours_worked = match (first_checkin, last_checkout) {
            (Some(start), Some(end)) => hours_between(start, end).max(0.0),
            _ => 0.0,
        };

        Self {
            date,
            employee_id: employee.id,
            employee_name: employee.name.clone(),
            first_checkin,
            last_checkout,
            hours_worked,
            target_hours: employee.target_hours,
            is_open,
            is_malformed,
            should_have_worked: true,
        }
    }

    pub fn has_both_punches(&self) -> bool {
        self.first_checkin.is_some() && self.last_checkout.is_some()
    }
}
