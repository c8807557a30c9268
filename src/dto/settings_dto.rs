use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::settings::ReportSettings;

/// Partial settings update; omitted fields keep their current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateSettingsPayload {
    #[validate(email)]
    pub recipient_email: Option<String>,
    #[validate(range(min = 0.0, max = 12.0))]
    pub extra_hours_threshold: Option<f64>,
    pub absence_alerts_enabled: Option<bool>,
    pub anomaly_ranking_enabled: Option<bool>,
}

impl UpdateSettingsPayload {
    pub fn apply_to(self, settings: &mut ReportSettings) {
        if let Some(email) = self.recipient_email {
            settings.recipient_email = email;
        }
        if let Some(threshold) = self.extra_hours_threshold {
            settings.extra_hours_threshold = threshold;
        }
        if let Some(enabled) = self.absence_alerts_enabled {
            settings.absence_alerts_enabled = enabled;
        }
        if let Some(enabled) = self.anomaly_ranking_enabled {
            settings.anomaly_ranking_enabled = enabled;
        }
    }
}
