//! Type definitions for the generated dataset

use chrono::NaiveDate;
use std::fmt;

/// Column headers of the exported `DailyPerformance` sheet, in output order
pub const COLUMNS: [&str; 9] = [
    "Date",
    "EmployeeID",
    "EmployeeName",
    "Department",
    "Attendance",
    "LateEarlyMinutes",
    "OvertimeHours",
    "TotalTasks",
    "CompletedTasks",
];

/// A stable employee identity for one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    /// Zero-padded id such as `EMP001`
    pub id: String,
    pub name: &'static str,
    pub department: &'static str,
}

/// Whether an employee showed up on a given business day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceFlag {
    Present,
    Absent,
}

impl AttendanceFlag {
    /// One-letter code used in the exported sheet (`Y`/`N`)
    pub fn as_code(&self) -> &'static str {
        match self {
            AttendanceFlag::Present => "Y",
            AttendanceFlag::Absent => "N",
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, AttendanceFlag::Present)
    }
}

impl fmt::Display for AttendanceFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_code())
    }
}

/// One output row: a single employee's performance on a single business day
///
/// Invariants upheld by the generator:
/// - `completed_tasks <= total_tasks`
/// - `late_early_minutes == 0` and `overtime_hours == 0.0` when absent
/// - `overtime_hours` is a multiple of 0.5
#[derive(Debug, Clone, PartialEq)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub employee_id: String,
    pub employee_name: &'static str,
    pub department: &'static str,
    pub attendance: AttendanceFlag,
    pub late_early_minutes: u32,
    pub overtime_hours: f64,
    pub total_tasks: u32,
    pub completed_tasks: u32,
}
