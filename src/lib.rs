pub mod config;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::config::Config;
use crate::dto::settings_dto::UpdateSettingsPayload;
use crate::error::{Error, Result};
use crate::models::attendance::AttendanceRecord;
use crate::models::employee::default_roster;
use crate::models::settings::ReportSettings;
use crate::services::notification_service::NotificationService;
use crate::services::record_provider::RecordProvider;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::{Arc, RwLock};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    /// Loaded once at startup and never written afterwards.
    pub records: Arc<[AttendanceRecord]>,
    pub settings: Arc<RwLock<ReportSettings>>,
    pub notification_service: NotificationService,
}

impl AppState {
    pub fn new(records: Vec<AttendanceRecord>, settings: ReportSettings) -> Self {
        Self {
            records: records.into(),
            settings: Arc::new(RwLock::new(settings)),
            notification_service: NotificationService::new(),
        }
    }

    /// Pulls the session's table from `provider` for the configured window.
    pub fn load(provider: &dyn RecordProvider, config: &Config) -> Result<Self> {
        config.check_bounds()?;
        let end_date = config.sim_end_date.unwrap_or_else(utils::time::today);
        let records = provider.fetch(&default_roster(), config.sim_days, end_date)?;
        tracing::info!(%end_date, records = records.len(), "Attendance table loaded");
        Ok(Self::new(records, config.initial_settings()))
    }

    /// Snapshot of the current settings, handed to the report functions.
    pub fn settings(&self) -> Result<ReportSettings> {
        self.settings
            .read()
            .map(|guard| guard.clone())
            .map_err(|_| Error::Internal("Settings lock poisoned".to_string()))
    }

    pub fn update_settings(&self, payload: UpdateSettingsPayload) -> Result<ReportSettings> {
        let mut guard = self
            .settings
            .write()
            .map_err(|_| Error::Internal("Settings lock poisoned".to_string()))?;
        payload.apply_to(&mut guard);
        Ok(guard.clone())
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health::health))
        .route(
            "/api/settings",
            get(routes::settings::get_settings).put(routes::settings::update_settings),
        )
        .route("/api/reports/daily", get(routes::report::daily_report))
        .route("/api/reports/weekly", get(routes::report::weekly_report))
        .route("/api/reports/anomalies", get(routes::report::anomaly_report))
        .route("/api/reports/absences", get(routes::report::absence_report))
        .route("/api/dashboard/hours", get(routes::dashboard::hours_per_day))
        .route("/api/reports/export", get(routes::export::export_reports))
        .route("/api/reports/export/email", post(routes::export::email_reports))
        .with_state(state)
        .layer(middleware::cors::permissive_cors())
        .layer(TraceLayer::new_for_http())
}
