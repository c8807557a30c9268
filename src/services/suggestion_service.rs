use crate::models::attendance::AttendanceRecord;
use crate::utils::time::{format_hhmm, hours_to_duration};
use chrono::NaiveDateTime;
use std::fmt;

/// Differences below this many hours count as on target.
pub const TOLERANCE_HOURS: f64 = 0.1;

/// Suggested checkout correction for one day. Display-only: the record
/// itself is never changed.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleSuggestion {
    MissingPunch,
    OnTarget,
    LeaveEarlier {
        hours: f64,
        current_checkout: NaiveDateTime,
        suggested_checkout: NaiveDateTime,
    },
    LeaveLater {
        hours: f64,
        current_checkout: NaiveDateTime,
        suggested_checkout: NaiveDateTime,
    },
}

impl ScheduleSuggestion {
    pub fn for_record(record: &AttendanceRecord) -> Self {
        let (Some(_), Some(checkout)) = (record.first_checkin, record.last_checkout) else {
            return ScheduleSuggestion::MissingPunch;
        };

        let diff = record.hours_worked - record.target_hours;
        if diff.abs() < TOLERANCE_HOURS {
            return ScheduleSuggestion::OnTarget;
        }

        if diff > 0.0 {
            ScheduleSuggestion::LeaveEarlier {
                hours: diff,
                current_checkout: checkout,
                suggested_checkout: checkout - hours_to_duration(diff),
            }
        } else {
            let short = -diff;
            ScheduleSuggestion::LeaveLater {
                hours: short,
                current_checkout: checkout,
                suggested_checkout: checkout + hours_to_duration(short),
            }
        }
    }
}

impl fmt::Display for ScheduleSuggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleSuggestion::MissingPunch => {
                f.write_str("cannot suggest (missing checkin/checkout)")
            }
            ScheduleSuggestion::OnTarget => f.write_str("schedule OK"),
            ScheduleSuggestion::LeaveEarlier {
                hours,
                current_checkout,
                suggested_checkout,
            } => write!(
                f,
                "over by {:.2} h: move checkout from {} to {}",
                hours,
                format_hhmm(*current_checkout),
                format_hhmm(*suggested_checkout)
            ),
            ScheduleSuggestion::LeaveLater {
                hours,
                current_checkout,
                suggested_checkout,
            } => write!(
                f,
                "short by {:.2} h: move checkout from {} to {}",
                hours,
                format_hhmm(*current_checkout),
                format_hhmm(*suggested_checkout)
            ),
        }
    }
}
