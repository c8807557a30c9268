use crate::error::{Error, Result};
use crate::models::settings::{ReportSettings, DEFAULT_EXTRA_HOURS_THRESHOLD, DEFAULT_RECIPIENT};
use crate::utils::validation::validate;
use chrono::NaiveDate;
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub sim_days: u32,
    pub sim_seed: u64,
    pub sim_end_date: Option<NaiveDate>,
    pub alert_email: String,
    pub extra_hours_threshold: f64,
    pub absence_alerts_enabled: bool,
    pub anomaly_ranking_enabled: bool,
}

/// Longest simulated window, one year.
pub const MAX_SIM_DAYS: u32 = 366;

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Default for Config {
    fn default() -> Self {
        Self {
            server_address: "0.0.0.0:8080".to_string(),
            sim_days: 7,
            sim_seed: 42,
            sim_end_date: None,
            alert_email: DEFAULT_RECIPIENT.to_string(),
            extra_hours_threshold: DEFAULT_EXTRA_HOURS_THRESHOLD,
            absence_alerts_enabled: true,
            anomaly_ranking_enabled: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        let defaults = Self::default();

        let sim_end_date = match env::var("SIM_END_DATE") {
            Ok(raw) => Some(
                NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                    .map_err(|e| Error::Config(format!("Invalid value for SIM_END_DATE: {}", e)))?,
            ),
            Err(_) => None,
        };

        let config = Self {
            server_address: get_env_or("SERVER_ADDRESS", &defaults.server_address),
            sim_days: get_env_parse_or("SIM_DAYS", defaults.sim_days)?,
            sim_seed: get_env_parse_or("SIM_SEED", defaults.sim_seed)?,
            sim_end_date,
            alert_email: get_env_or("ALERT_EMAIL", &defaults.alert_email),
            extra_hours_threshold: get_env_parse_or(
                "EXTRA_HOURS_THRESHOLD",
                defaults.extra_hours_threshold,
            )?,
            absence_alerts_enabled: get_env_parse_or(
                "ABSENCE_ALERTS_ENABLED",
                defaults.absence_alerts_enabled,
            )?,
            anomaly_ranking_enabled: get_env_parse_or(
                "ANOMALY_RANKING_ENABLED",
                defaults.anomaly_ranking_enabled,
            )?,
        };
        config.check_bounds()?;
        Ok(config)
    }

    /// Applies the same limits as a settings update from the dashboard.
    pub fn check_bounds(&self) -> Result<()> {
        if self.sim_days > MAX_SIM_DAYS {
            return Err(Error::Config(format!(
                "SIM_DAYS must be at most {}, got {}",
                MAX_SIM_DAYS, self.sim_days
            )));
        }
        // NaN slips through a range check.
        if !self.extra_hours_threshold.is_finite() {
            return Err(Error::Config(
                "EXTRA_HOURS_THRESHOLD must be a finite number".to_string(),
            ));
        }
        validate(&self.initial_settings())
            .map_err(|e| Error::Config(format!("Invalid report settings: {}", e)))
    }

    /// Settings the dashboard starts from before any user change.
    pub fn initial_settings(&self) -> ReportSettings {
        ReportSettings {
            recipient_email: self.alert_email.clone(),
            extra_hours_threshold: self.extra_hours_threshold,
            absence_alerts_enabled: self.absence_alerts_enabled,
            anomaly_ranking_enabled: self.anomaly_ranking_enabled,
        }
    }
}

fn get_env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}
