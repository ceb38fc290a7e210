//! XLSX export.
//!
//! Renders a schedule into a single-sheet workbook with two sections: a
//! key-value header block (employee, month, total, approval state) and a
//! table of only the days that have both a start and an end time. The file
//! name follows the `work_schedule_<month>_<year>.xlsx` pattern of the
//! original editor.

use std::path::{Path, PathBuf};

use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Format, Workbook, XlsxError};

use crate::error::{ScheduleError, ScheduleResult};
use crate::models::{ScheduleState, format_time_of_day};

/// Column headers of the per-day table section.
const SHIFT_TABLE_HEADER: [&str; 6] = [
    "Day",
    "Date",
    "Day of Week",
    "Start Time",
    "End Time",
    "Hours",
];

/// Returns the export file name for a schedule, e.g.
/// `work_schedule_January_2025.xlsx`.
pub fn export_file_name(state: &ScheduleState) -> String {
    format!("work_schedule_{}_{}.xlsx", state.month, state.year)
}

/// Writes the schedule workbook into `dir` and returns the written path.
///
/// # Errors
///
/// Returns [`ScheduleError::Export`] when the workbook cannot be rendered
/// or saved.
pub fn write_schedule<P: AsRef<Path>>(state: &ScheduleState, dir: P) -> ScheduleResult<PathBuf> {
    let path = dir.as_ref().join(export_file_name(state));
    let mut workbook = build_workbook(state).map_err(export_error)?;
    workbook.save(&path).map_err(export_error)?;
    Ok(path)
}

/// Renders the schedule workbook into an in-memory XLSX byte buffer.
pub fn render_schedule(state: &ScheduleState) -> ScheduleResult<Vec<u8>> {
    let mut workbook = build_workbook(state).map_err(export_error)?;
    workbook.save_to_buffer().map_err(export_error)
}

fn export_error(err: XlsxError) -> ScheduleError {
    ScheduleError::Export {
        message: err.to_string(),
    }
}

/// A header-block cell value: free text or a numeric total.
#[derive(Debug, Clone, PartialEq)]
enum HeaderCell {
    Text(String),
    Number(f64),
}

/// Builds the key-value header rows in their output order.
fn header_rows(state: &ScheduleState) -> Vec<(&'static str, HeaderCell)> {
    let approved_date = match state.approval_date {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => "Not Approved".to_string(),
    };
    vec![
        (
            "Employee Name",
            HeaderCell::Text(state.employee_name.clone()),
        ),
        ("Position", HeaderCell::Text(state.position.clone())),
        (
            "Month",
            HeaderCell::Text(format!("{} {}", state.month, state.year)),
        ),
        (
            "Total Hours",
            HeaderCell::Number(state.total_hours.to_f64().unwrap_or_default()),
        ),
        (
            "Approval Status",
            HeaderCell::Text(state.approval_status.to_string()),
        ),
        ("Approved Date", HeaderCell::Text(approved_date)),
        ("Notes", HeaderCell::Text(state.notes.clone())),
    ]
}

fn build_workbook(state: &ScheduleState) -> Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.set_name("Work Schedule")?;

    let mut row: u32 = 0;
    for (label, value) in header_rows(state) {
        sheet.write_string_with_format(row, 0, label, &bold)?;
        match value {
            HeaderCell::Text(text) => sheet.write_string(row, 1, text)?,
            HeaderCell::Number(number) => sheet.write_number(row, 1, number)?,
        };
        row += 1;
    }

    // Blank separator row.
    row += 1;

    // Table section: only days with both times recorded.
    for (col, header) in SHIFT_TABLE_HEADER.iter().enumerate() {
        sheet.write_string_with_format(row, col as u16, *header, &bold)?;
    }
    row += 1;

    for (index, slot) in state.shifts.iter().enumerate() {
        if !slot.is_complete() {
            continue;
        }
        let day = index as u32 + 1;
        // Slots past the month's real day count have no date and are skipped.
        let Some(date) = state.month.date_of(state.year, day) else {
            continue;
        };

        sheet.write_number(row, 0, f64::from(day))?;
        sheet.write_string(row, 1, date.format("%B %-d, %Y").to_string())?;
        sheet.write_string(row, 2, date.format("%A").to_string())?;
        sheet.write_string(row, 3, format_time_of_day(slot.start_time))?;
        sheet.write_string(row, 4, format_time_of_day(slot.end_time))?;
        sheet.write_number(row, 5, slot.hours.to_f64().unwrap_or_default())?;
        row += 1;
    }

    sheet.autofit();
    Ok(workbook)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Month, ShiftSlot, parse_time_of_day};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn sample_state() -> ScheduleState {
        let mut state = ScheduleState::default();
        state.employee_name = "Ada".to_string();
        state.month = Month::February;
        state.year = 2025;
        state.shifts[0] = ShiftSlot {
            start_time: parse_time_of_day("09:00").unwrap(),
            end_time: parse_time_of_day("13:00").unwrap(),
            hours: Decimal::from_str("4.00").unwrap(),
        };
        // An orphaned slot past February's day count.
        state.shifts[30] = state.shifts[0].clone();
        state.total_hours = Decimal::from_str("8.00").unwrap();
        state
    }

    #[test]
    fn test_export_file_name_pattern() {
        let state = sample_state();
        assert_eq!(export_file_name(&state), "work_schedule_February_2025.xlsx");
    }

    #[test]
    fn test_header_rows_carry_total_as_number() {
        let rows = header_rows(&sample_state());
        let labels: Vec<&str> = rows.iter().map(|(label, _)| *label).collect();
        assert_eq!(
            labels,
            [
                "Employee Name",
                "Position",
                "Month",
                "Total Hours",
                "Approval Status",
                "Approved Date",
                "Notes"
            ]
        );
        assert_eq!(rows[3].1, HeaderCell::Number(8.0));
        assert_eq!(rows[2].1, HeaderCell::Text("February 2025".to_string()));
    }

    #[test]
    fn test_render_produces_xlsx_bytes() {
        let bytes = render_schedule(&sample_state()).unwrap();
        // XLSX files are zip archives: PK magic.
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_write_schedule_creates_file_in_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_schedule(&sample_state(), dir.path()).unwrap();
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "work_schedule_February_2025.xlsx"
        );
        assert!(path.exists());
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }
}
