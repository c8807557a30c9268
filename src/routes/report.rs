use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};

use crate::{
    dto::report_dto::{DailyReportItem, DailyReportQuery, DailyReportResponse, ReportResponse},
    error::Result,
    models::report::{AbsenceRow, AnomalyRow},
    services::report_service::ReportService,
    AppState,
};

/// Status of every employee on one day, the latest day by default.
#[axum::debug_handler]
pub async fn daily_report(
    State(state): State<AppState>,
    Query(query): Query<DailyReportQuery>,
) -> Result<impl IntoResponse> {
    let settings = state.settings()?;
    let date = query.date.or_else(|| ReportService::latest_date(&state.records));

    let items: Vec<DailyReportItem> = match date {
        Some(date) => ReportService::daily_status(&state.records, date, settings.extra_hours_threshold)
            .into_iter()
            .map(DailyReportItem::from)
            .collect(),
        None => Vec::new(),
    };
    let message = items
        .is_empty()
        .then(|| "No attendance records for the selected day.".to_string());

    Ok(Json(DailyReportResponse { date, items, message }))
}

#[axum::debug_handler]
pub async fn weekly_report(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let rows = ReportService::weekly_summary(&state.records);
    Ok(Json(ReportResponse::from_rows(
        rows,
        "No attendance records in the period.",
    )))
}

#[axum::debug_handler]
pub async fn anomaly_report(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let settings = state.settings()?;
    if !settings.anomaly_ranking_enabled {
        return Ok(Json(ReportResponse::<AnomalyRow>::disabled(
            "Anomaly ranking is disabled in the settings.",
        )));
    }

    let rows = ReportService::anomaly_ranking(&state.records);
    Ok(Json(ReportResponse::from_rows(
        rows,
        "No attendance records in the period.",
    )))
}

#[axum::debug_handler]
pub async fn absence_report(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let settings = state.settings()?;
    if !settings.absence_alerts_enabled {
        return Ok(Json(ReportResponse::<AbsenceRow>::disabled(
            "Absence alerts are disabled in the settings.",
        )));
    }

    let rows = ReportService::absence_list(&state.records);
    Ok(Json(ReportResponse::from_rows(
        rows,
        "No absences recorded in the period.",
    )))
}
