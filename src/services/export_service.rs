use crate::error::Result;
use crate::models::attendance::AttendanceRecord;
use crate::models::report::{AbsenceRow, AnomalyRow, DailyStatusRow, WeeklySummaryRow};
use crate::models::settings::ReportSettings;
use crate::services::report_service::ReportService;
use crate::services::suggestion_service::ScheduleSuggestion;
use rust_xlsxwriter::*;

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

// ── Color palette ──
const HEADER_BG: Color = Color::RGB(0x0F172A); // Slate 900
const BORDER_COLOR: Color = Color::RGB(0xE2E8F0); // Slate 200
const ALT_ROW: Color = Color::RGB(0xF8FAFC); // Slate 50
const ALERT_COLOR: Color = Color::RGB(0xEF4444); // Red

const DATE_FORMAT: &str = "yyyy-mm-dd";
const TIMESTAMP_FORMAT: &str = "yyyy-mm-dd hh:mm";

/// The reports that go into one workbook. `absences` is `None` when absence
/// alerting is switched off.
pub struct ReportBundle<'a> {
    pub daily: &'a [DailyStatusRow],
    pub weekly: &'a [WeeklySummaryRow],
    pub anomalies: &'a [AnomalyRow],
    pub absences: Option<&'a [AbsenceRow]>,
}

pub struct ExportService;

impl ExportService {
    /// Builds every report from the table, using the latest day for the
    /// daily sheet, and renders the workbook.
    pub fn generate_attendance_xlsx(
        records: &[AttendanceRecord],
        settings: &ReportSettings,
    ) -> Result<Vec<u8>> {
        let daily = match ReportService::latest_date(records) {
            Some(date) => ReportService::daily_status(records, date, settings.extra_hours_threshold),
            None => Vec::new(),
        };
        let weekly = ReportService::weekly_summary(records);
        let anomalies = ReportService::anomaly_ranking(records);
        let absences = settings
            .absence_alerts_enabled
            .then(|| ReportService::absence_list(records));

        Self::generate_reports_xlsx(&ReportBundle {
            daily: &daily,
            weekly: &weekly,
            anomalies: &anomalies,
            absences: absences.as_deref(),
        })
    }

    pub fn generate_reports_xlsx(bundle: &ReportBundle<'_>) -> Result<Vec<u8>> {
        let mut workbook = Workbook::new();

        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Daily")?;
        Self::write_daily_sheet(worksheet, bundle.daily)?;

        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Weekly")?;
        Self::write_weekly_sheet(worksheet, bundle.weekly)?;

        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Anomalies")?;
        Self::write_anomaly_sheet(worksheet, bundle.anomalies)?;

        // Only written when there is something to report.
        if let Some(absences) = bundle.absences.filter(|rows| !rows.is_empty()) {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name("Absences")?;
            Self::write_absence_sheet(worksheet, absences)?;
        }

        let buffer = workbook.save_to_buffer()?;
        tracing::debug!(bytes = buffer.len(), "Attendance workbook rendered");
        Ok(buffer)
    }

    fn header_format() -> Format {
        Format::new()
            .set_bold()
            .set_font_size(10)
            .set_font_color(Color::White)
            .set_background_color(HEADER_BG)
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter)
            .set_text_wrap()
            .set_border(FormatBorder::Thin)
            .set_border_color(BORDER_COLOR)
    }

    fn cell_format(idx: usize) -> Format {
        let bg = if idx % 2 == 0 { ALT_ROW } else { Color::White };
        Format::new()
            .set_font_size(10)
            .set_background_color(bg)
            .set_align(FormatAlign::VerticalCenter)
            .set_border(FormatBorder::Thin)
            .set_border_color(BORDER_COLOR)
    }

    fn write_header(worksheet: &mut Worksheet, columns: &[(&str, f64)], rows: usize) -> Result<()> {
        let header_format = Self::header_format();
        worksheet.set_row_height(0, 30)?;
        for (i, (name, width)) in columns.iter().enumerate() {
            worksheet.set_column_width(i as u16, *width)?;
            worksheet.write_string_with_format(0, i as u16, *name, &header_format)?;
        }

        // Header stays visible while scrolling.
        worksheet.set_freeze_panes(1, 0)?;
        if rows > 0 {
            worksheet.autofilter(0, 0, rows as u32, (columns.len() - 1) as u16)?;
        }
        Ok(())
    }

    fn write_daily_sheet(worksheet: &mut Worksheet, rows: &[DailyStatusRow]) -> Result<()> {
        let columns = [
            ("Date", 12.0),
            ("Employee ID", 12.0),
            ("Employee", 22.0),
            ("First check-in", 18.0),
            ("Last checkout", 18.0),
            ("Hours worked", 14.0),
            ("Target hours", 14.0),
            ("Open", 8.0),
            ("Malformed", 11.0),
            ("Scheduled", 11.0),
            ("Status", 14.0),
            ("Suggestion", 55.0),
        ];
        Self::write_header(worksheet, &columns, rows.len())?;

        for (idx, row) in rows.iter().enumerate() {
            let line = idx as u32 + 1;
            let mut fmt = Self::cell_format(idx);
            // Any status other than ok is flagged in red across the whole row.
            if !row.status.is_ok() {
                fmt = fmt.set_font_color(ALERT_COLOR).set_bold();
            }
            let date_fmt = fmt.clone().set_num_format(DATE_FORMAT);
            let timestamp_fmt = fmt.clone().set_num_format(TIMESTAMP_FORMAT);
            let record = &row.record;
            let suggestion = ScheduleSuggestion::for_record(record).to_string();

            worksheet.write_datetime_with_format(line, 0, &record.date, &date_fmt)?;
            worksheet.write_number_with_format(line, 1, record.employee_id as f64, &fmt)?;
            worksheet.write_string_with_format(line, 2, &record.employee_name, &fmt)?;
            // A missing punch stays an empty cell.
            for (col, punch) in [(3, record.first_checkin), (4, record.last_checkout)] {
                match punch {
                    Some(ts) => worksheet.write_datetime_with_format(line, col, &ts, &timestamp_fmt)?,
                    None => worksheet.write_blank(line, col, &fmt)?,
                };
            }
            worksheet.write_number_with_format(line, 5, record.hours_worked, &fmt)?;
            worksheet.write_number_with_format(line, 6, record.target_hours, &fmt)?;
            worksheet.write_boolean_with_format(line, 7, record.is_open, &fmt)?;
            worksheet.write_boolean_with_format(line, 8, record.is_malformed, &fmt)?;
            worksheet.write_boolean_with_format(line, 9, record.should_have_worked, &fmt)?;
            worksheet.write_string_with_format(line, 10, row.status.as_str(), &fmt)?;
            worksheet.write_string_with_format(line, 11, &suggestion, &fmt)?;
        }
        Ok(())
    }

    fn write_weekly_sheet(worksheet: &mut Worksheet, rows: &[WeeklySummaryRow]) -> Result<()> {
        let columns = [
            ("Employee ID", 12.0),
            ("Employee", 22.0),
            ("Total worked", 14.0),
            ("Total target", 14.0),
            ("Days scheduled", 15.0),
            ("Malformed", 11.0),
            ("Open", 8.0),
            ("Overtime", 12.0),
        ];
        Self::write_header(worksheet, &columns, rows.len())?;

        for (idx, row) in rows.iter().enumerate() {
            let line = idx as u32 + 1;
            let fmt = Self::cell_format(idx);
            let hours_fmt = fmt.clone().set_num_format("0.00");
            let overtime_fmt = if row.overtime < 0.0 {
                hours_fmt.clone().set_font_color(ALERT_COLOR)
            } else {
                hours_fmt.clone()
            };

            worksheet.write_number_with_format(line, 0, row.employee_id as f64, &fmt)?;
            worksheet.write_string_with_format(line, 1, &row.employee_name, &fmt)?;
            worksheet.write_number_with_format(line, 2, row.total_worked, &hours_fmt)?;
            worksheet.write_number_with_format(line, 3, row.total_target, &hours_fmt)?;
            worksheet.write_number_with_format(line, 4, row.days_scheduled as f64, &fmt)?;
            worksheet.write_number_with_format(line, 5, row.malformed_count as f64, &fmt)?;
            worksheet.write_number_with_format(line, 6, row.open_count as f64, &fmt)?;
            worksheet.write_number_with_format(line, 7, row.overtime, &overtime_fmt)?;
        }
        Ok(())
    }

    fn write_anomaly_sheet(worksheet: &mut Worksheet, rows: &[AnomalyRow]) -> Result<()> {
        let columns = [
            ("Employee ID", 12.0),
            ("Employee", 22.0),
            ("Malformed", 11.0),
            ("Open", 8.0),
            ("Anomaly score", 14.0),
        ];
        Self::write_header(worksheet, &columns, rows.len())?;

        for (idx, row) in rows.iter().enumerate() {
            let line = idx as u32 + 1;
            let fmt = Self::cell_format(idx);
            worksheet.write_number_with_format(line, 0, row.employee_id as f64, &fmt)?;
            worksheet.write_string_with_format(line, 1, &row.employee_name, &fmt)?;
            worksheet.write_number_with_format(line, 2, row.malformed_count as f64, &fmt)?;
            worksheet.write_number_with_format(line, 3, row.open_count as f64, &fmt)?;
            worksheet.write_number_with_format(line, 4, row.anomaly_score as f64, &fmt.clone().set_bold())?;
        }
        Ok(())
    }

    fn write_absence_sheet(worksheet: &mut Worksheet, rows: &[AbsenceRow]) -> Result<()> {
        let columns = [("Date", 12.0), ("Employee ID", 12.0), ("Employee", 22.0)];
        Self::write_header(worksheet, &columns, rows.len())?;

        for (idx, row) in rows.iter().enumerate() {
            let line = idx as u32 + 1;
            let fmt = Self::cell_format(idx);
            let date_fmt = fmt.clone().set_num_format(DATE_FORMAT);
            worksheet.write_datetime_with_format(line, 0, &row.date, &date_fmt)?;
            worksheet.write_number_with_format(line, 1, row.employee_id as f64, &fmt)?;
            worksheet.write_string_with_format(line, 2, &row.employee_name, &fmt)?;
        }
        Ok(())
    }
}
