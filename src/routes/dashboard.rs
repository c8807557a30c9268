use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};

use crate::{
    dto::report_dto::{DashboardQuery, DashboardResponse},
    error::{Error, Result},
    services::report_service::{HoursFilter, ReportService},
    AppState,
};

/// Hours worked per day for the chart, plus the values the filter widgets offer.
#[axum::debug_handler]
pub async fn hours_per_day(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<impl IntoResponse> {
    if let (Some(from), Some(to)) = (query.from, query.to) {
        if from > to {
            return Err(Error::BadRequest(format!(
                "Start date {} is after end date {}",
                from, to
            )));
        }
    }

    let filter = HoursFilter::from(query);
    let points = ReportService::hours_per_day(&state.records, &filter);
    let message = points
        .is_empty()
        .then(|| "No data for the selected filters.".to_string());

    Ok(Json(DashboardResponse {
        points,
        available_dates: ReportService::available_dates(&state.records),
        employees: ReportService::employee_names(&state.records),
        message,
    }))
}
