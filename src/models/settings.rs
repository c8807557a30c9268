use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DEFAULT_RECIPIENT: &str = "gerencia@mi-bar.com";
pub const DEFAULT_EXTRA_HOURS_THRESHOLD: f64 = 1.0;

/// Reporting options chosen by the dashboard user. Every report call gets
/// these explicitly; nothing reads them from shared state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ReportSettings {
    #[validate(email)]
    pub recipient_email: String,
    #[validate(range(min = 0.0, max = 12.0))]
    pub extra_hours_threshold: f64,
    pub absence_alerts_enabled: bool,
    pub anomaly_ranking_enabled: bool,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            recipient_email: DEFAULT_RECIPIENT.to_string(),
            extra_hours_threshold: DEFAULT_EXTRA_HOURS_THRESHOLD,
            absence_alerts_enabled: true,
            anomaly_ranking_enabled: true,
        }
    }
}
