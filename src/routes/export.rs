use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    error::Result,
    services::export_service::{ExportService, XLSX_CONTENT_TYPE},
    services::report_service::ReportService,
    AppState,
};

fn export_filename(state: &AppState) -> String {
    match ReportService::latest_date(&state.records) {
        Some(date) => format!("attendance_reports_{}.xlsx", date.format("%Y-%m-%d")),
        None => format!("attendance_reports_{}.xlsx", chrono::Utc::now().format("%Y%m%d")),
    }
}

/// Download every report as one XLSX workbook
#[axum::debug_handler]
pub async fn export_reports(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let settings = state.settings()?;
    let buffer = ExportService::generate_attendance_xlsx(&state.records, &settings)?;
    let disposition = format!("attachment; filename=\"{}\"", export_filename(&state));

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        buffer,
    ))
}

/// Build the workbook and hand it to the (simulated) mailer
#[axum::debug_handler]
pub async fn email_reports(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let settings = state.settings()?;
    let buffer = ExportService::generate_attendance_xlsx(&state.records, &settings)?;
    let receipt = state.notification_service.send_report(
        &settings.recipient_email,
        &export_filename(&state),
        &buffer,
    )?;

    Ok((StatusCode::ACCEPTED, Json(receipt)))
}
