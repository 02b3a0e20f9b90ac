//! Excel export of the monthly performance table
//!
//! One workbook per month, single sheet named `DailyPerformance`, no index
//! column. Dates are written as `YYYY-MM-DD` strings and attendance as
//! `Y`/`N`, matching what downstream report consumers parse.

use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook};
use std::path::Path;
use tracing::debug;

use crate::error::Result;
use crate::types::{DailyRecord, COLUMNS};

/// Sheet name of the exported monthly report
pub const SHEET_NAME: &str = "DailyPerformance";

/// File name for a monthly report, e.g. `EmployeePerformance_202406.xlsx`
pub fn report_file_name(year: i32, month: u32) -> String {
    format!("EmployeePerformance_{year}{month:02}.xlsx")
}

/// Write one month's records to an xlsx file at `path`
pub fn write_monthly_report(records: &[DailyRecord], path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.set_name(SHEET_NAME)?;

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0x4472C4))
        .set_font_color(Color::White)
        .set_border(FormatBorder::Thin);

    for (col, header) in COLUMNS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    // Column widths
    worksheet.set_column_width(0, 12)?; // Date
    worksheet.set_column_width(1, 12)?; // EmployeeID
    worksheet.set_column_width(2, 20)?; // EmployeeName
    worksheet.set_column_width(3, 12)?; // Department
    worksheet.set_column_width(4, 11)?; // Attendance
    worksheet.set_column_width(5, 16)?; // LateEarlyMinutes
    worksheet.set_column_width(6, 14)?; // OvertimeHours
    worksheet.set_column_width(7, 11)?; // TotalTasks
    worksheet.set_column_width(8, 15)?; // CompletedTasks

    for (idx, record) in records.iter().enumerate() {
        let row = (idx + 1) as u32;

        worksheet.write_string(row, 0, record.date.format("%Y-%m-%d").to_string())?;
        worksheet.write_string(row, 1, &record.employee_id)?;
        worksheet.write_string(row, 2, record.employee_name)?;
        worksheet.write_string(row, 3, record.department)?;
        worksheet.write_string(row, 4, record.attendance.as_code())?;
        worksheet.write_number(row, 5, f64::from(record.late_early_minutes))?;
        worksheet.write_number(row, 6, record.overtime_hours)?;
        worksheet.write_number(row, 7, f64::from(record.total_tasks))?;
        worksheet.write_number(row, 8, f64::from(record.completed_tasks))?;
    }

    // Autofilter over the data range
    if !records.is_empty() {
        let last_row = records.len() as u32;
        worksheet.autofilter(0, 0, last_row, (COLUMNS.len() - 1) as u16)?;
    }

    // Freeze the header row
    worksheet.set_freeze_panes(1, 0)?;

    workbook.save(path)?;
    debug!(path = %path.display(), rows = records.len(), "wrote monthly report");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_file_name() {
        assert_eq!(report_file_name(2024, 6), "EmployeePerformance_202406.xlsx");
        assert_eq!(report_file_name(2025, 12), "EmployeePerformance_202512.xlsx");
    }
}
