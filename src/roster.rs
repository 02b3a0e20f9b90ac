//! Fixed employee identity roster
//!
//! Identities come from fixed parallel lists: 15 names and 5 departments
//! cycled so that every department appears three times. Employee ids are
//! `EMP` plus a 1-based, zero-padded 3-digit index. Asking for more
//! employees than the lists hold is an error rather than a silent
//! truncation.

use crate::error::{GenError, Result};
use crate::types::Employee;

/// Maximum number of employees the fixed name list can identify
pub const MAX_EMPLOYEES: usize = NAMES.len();

static NAMES: [&str; 15] = [
    "John Smith",
    "Mary Johnson",
    "David Lee",
    "Sarah Wilson",
    "Michael Brown",
    "Emma Davis",
    "James Miller",
    "Linda Anderson",
    "Robert Taylor",
    "Jennifer White",
    "William Moore",
    "Elizabeth Clark",
    "Thomas Hall",
    "Patricia Lewis",
    "Richard Wright",
];

static DEPARTMENTS: [&str; 5] = ["R&D", "Marketing", "HR", "Finance", "Operations"];

/// Format the employee id for a 1-based roster index (`1` -> `EMP001`)
pub fn employee_id(index: usize) -> String {
    format!("EMP{:03}", index)
}

/// Build the roster for a run, truncating the fixed lists to `count`
///
/// Fails fast with [`GenError::RosterExhausted`] when `count` is zero or
/// exceeds [`MAX_EMPLOYEES`].
pub fn build(count: usize) -> Result<Vec<Employee>> {
    if count == 0 || count > MAX_EMPLOYEES {
        return Err(GenError::RosterExhausted {
            requested: count,
            available: MAX_EMPLOYEES,
        });
    }

    Ok((0..count)
        .map(|i| Employee {
            id: employee_id(i + 1),
            name: NAMES[i],
            department: DEPARTMENTS[i % DEPARTMENTS.len()],
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_id_padding() {
        assert_eq!(employee_id(1), "EMP001");
        assert_eq!(employee_id(11), "EMP011");
        assert_eq!(employee_id(105), "EMP105");
    }

    #[test]
    fn test_full_roster() {
        let roster = build(15).unwrap();
        assert_eq!(roster.len(), 15);
        assert_eq!(roster[0].id, "EMP001");
        assert_eq!(roster[0].name, "John Smith");
        assert_eq!(roster[0].department, "R&D");
        assert_eq!(roster[14].id, "EMP015");
        assert_eq!(roster[14].department, "Operations");
        // Departments cycle every five employees
        assert_eq!(roster[5].department, "R&D");
        assert_eq!(roster[9].department, "Operations");
    }

    #[test]
    fn test_truncated_roster() {
        let roster = build(5).unwrap();
        assert_eq!(roster.len(), 5);
        let ids: Vec<_> = roster.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["EMP001", "EMP002", "EMP003", "EMP004", "EMP005"]);
    }

    #[test]
    fn test_roster_exhausted() {
        assert!(matches!(
            build(16),
            Err(GenError::RosterExhausted {
                requested: 16,
                available: 15
            })
        ));
        assert!(matches!(build(0), Err(GenError::RosterExhausted { .. })));
    }
}
