use crate::error::Result;
use crate::models::attendance::AttendanceRecord;
use crate::models::employee::Employee;
use crate::utils::time::{at, hours_to_duration};
use chrono::{Duration, NaiveDate, NaiveTime};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

/// Source of the attendance table. The reports only ever see the records a
/// provider returns, so a real clocking API can replace the simulation.
pub trait RecordProvider: Send + Sync {
    /// One record per employee per day for the `days` days ending on `end_date`.
    fn fetch(
        &self,
        roster: &[Employee],
        days: u32,
        end_date: NaiveDate,
    ) -> Result<Vec<AttendanceRecord>>;
}

const NOMINAL_CHECKIN_HOUR: u32 = 8;
const CHECKIN_JITTER_MINUTES: f64 = 20.0;
const DURATION_JITTER_HOURS: f64 = 1.0;
const SCHEDULED_PROBABILITY: f64 = 0.95;
const OPEN_PROBABILITY: f64 = 0.05;
const MALFORMED_PROBABILITY: f64 = 0.10;

/// Seeded random stand-in for a clocking system.
#[derive(Debug, Clone)]
pub struct SimulatedRecordProvider {
    seed: u64,
}

impl SimulatedRecordProvider {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    fn simulate_day(rng: &mut StdRng, employee: &Employee, date: NaiveDate) -> AttendanceRecord {
        if !rng.gen_bool(SCHEDULED_PROBABILITY) {
            return AttendanceRecord::day_off(employee, date);
        }

        let nominal = NaiveTime::from_hms_opt(NOMINAL_CHECKIN_HOUR, 0, 0).unwrap_or_default();
        let jitter: f64 = rng.sample(StandardNormal);
        let jitter_minutes = (jitter * CHECKIN_JITTER_MINUTES) as i64;
        let checkin = at(date, nominal) + Duration::minutes(jitter_minutes);

        let spread: f64 = rng.sample(StandardNormal);
        let duration_hours = (employee.target_hours + spread * DURATION_JITTER_HOURS).max(0.0);
        let checkout = checkin + hours_to_duration(duration_hours);

        // Drawn independently, so a record can be both open and malformed.
        let is_open = rng.gen_bool(OPEN_PROBABILITY);
        let is_malformed = rng.gen_bool(MALFORMED_PROBABILITY);

        let mut first_checkin = Some(checkin);
        let mut last_checkout = if is_open { None } else { Some(checkout) };

        if is_malformed {
            if rng.gen_bool(0.5) {
                first_checkin = None;
            } else {
                last_checkout = None;
            }
        }

        AttendanceRecord::worked(
            employee,
            date,
            first_checkin,
            last_checkout,
            is_open,
            is_malformed,
        )
    }
}

impl RecordProvider for SimulatedRecordProvider {
    fn fetch(
        &self,
        roster: &[Employee],
        days: u32,
        end_date: NaiveDate,
    ) -> Result<Vec<AttendanceRecord>> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut records = Vec::with_capacity(roster.len() * days as usize);

        for offset in 0..days {
            let date = end_date - Duration::days(offset as i64);
            for employee in roster {
                records.push(Self::simulate_day(&mut rng, employee, date));
            }
        }

        tracing::info!(
            seed = self.seed,
            days,
            employees = roster.len(),
            records = records.len(),
            "Generated simulated attendance records"
        );
        Ok(records)
    }
}
