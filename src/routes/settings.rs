use axum::{extract::State, response::IntoResponse, Json};

use crate::{dto::settings_dto::UpdateSettingsPayload, error::Result, utils::validation::validate, AppState};

#[axum::debug_handler]
pub async fn get_settings(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(state.settings()?))
}

#[axum::debug_handler]
pub async fn update_settings(
    State(state): State<AppState>,
    Json(payload): Json<UpdateSettingsPayload>,
) -> Result<impl IntoResponse> {
    validate(&payload)?;
    let settings = state.update_settings(payload)?;
    tracing::info!(
        threshold = settings.extra_hours_threshold,
        absence_alerts = settings.absence_alerts_enabled,
        anomaly_ranking = settings.anomaly_ranking_enabled,
        "Report settings updated"
    );
    Ok(Json(settings))
}
