//! Dataset generation
//!
//! Produces one [`DailyRecord`] per (business day, employee) pair for a
//! target month. Profiles are sampled fresh at the start of every call and
//! discarded when the table is returned; nothing persists across months.
//!
//! All random draws go through an injected [`Rng`], so tests can seed a
//! [`rand::rngs::StdRng`] and assert on exact output. [`generate`] wraps
//! [`generate_with_rng`] with the thread-local RNG for normal use.

use chrono::{Datelike, NaiveDate, Weekday};
use rand::Rng;
use tracing::debug;

use crate::error::{GenError, Result};
use crate::profile::EmployeeProfile;
use crate::roster;
use crate::types::{AttendanceFlag, DailyRecord, Employee};

/// Generate the daily performance table for one month using the thread RNG
///
/// `poor_performer_id` flags one employee whose month is skewed negative;
/// an id that matches no generated employee is silently ignored.
///
/// # Examples
///
/// ```
/// let records = perfgen::generate(5, 2024, 6, None).unwrap();
/// // 20 business days in June 2024, 5 employees
/// assert_eq!(records.len(), 100);
/// ```
pub fn generate(
    employee_count: usize,
    year: i32,
    month: u32,
    poor_performer_id: Option<&str>,
) -> Result<Vec<DailyRecord>> {
    generate_with_rng(
        employee_count,
        year,
        month,
        poor_performer_id,
        &mut rand::thread_rng(),
    )
}

/// Generate the daily performance table for one month with a caller-supplied RNG
pub fn generate_with_rng(
    employee_count: usize,
    year: i32,
    month: u32,
    poor_performer_id: Option<&str>,
    rng: &mut impl Rng,
) -> Result<Vec<DailyRecord>> {
    if !(1..=12).contains(&month) {
        return Err(GenError::InvalidMonth(month));
    }

    let days = business_days(year, month);
    let employees = roster::build(employee_count)?;

    let mut profiles: Vec<EmployeeProfile> = employees
        .iter()
        .map(|_| EmployeeProfile::normal(rng))
        .collect();

    // Re-sample the flagged employee from the underperformer ranges; an
    // unknown id leaves every profile untouched.
    let poor_index = poor_performer_id
        .and_then(|id| employees.iter().position(|e| e.id == id));
    if let Some(idx) = poor_index {
        profiles[idx] = EmployeeProfile::underperformer(rng);
    }

    debug!(
        year,
        month,
        business_days = days.len(),
        employees = employees.len(),
        poor_performer = poor_index.is_some(),
        "generating daily records"
    );

    let mut records = Vec::with_capacity(days.len() * employees.len());
    for &date in &days {
        for (i, employee) in employees.iter().enumerate() {
            let is_poor = poor_index == Some(i);
            records.push(draw_day(employee, &profiles[i], is_poor, date, rng));
        }
    }

    Ok(records)
}

/// Weekdays (Monday-Friday) of the given month, in calendar order
pub fn business_days(year: i32, month: u32) -> Vec<NaiveDate> {
    let mut days = Vec::new();
    let mut day = 1;
    while let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
        if !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            days.push(date);
        }
        day += 1;
    }
    days
}

/// Draw one employee's record for one business day
fn draw_day(
    employee: &Employee,
    profile: &EmployeeProfile,
    is_poor: bool,
    date: NaiveDate,
    rng: &mut impl Rng,
) -> DailyRecord {
    // The underperformer's attendance dips further on every third
    // day-of-month, modeling periodic absenteeism.
    let attendance_probability = if is_poor && date.day() % 3 == 0 {
        profile.attendance_probability * 0.8
    } else {
        profile.attendance_probability
    };
    let present = rng.gen::<f64>() < attendance_probability;

    let (total_tasks, late_early_minutes, overtime_hours, completed_tasks) = if present {
        let total_tasks = if is_poor {
            rng.gen_range(3..=6)
        } else {
            rng.gen_range(4..=10)
        };

        let late_early_minutes = if is_poor {
            // Frequently late, and late by a lot; even punctual days drift.
            if rng.gen::<f64>() < profile.lateness_probability {
                rng.gen_range(15..=60)
            } else {
                rng.gen_range(0..=15)
            }
        } else if rng.gen::<f64>() < profile.lateness_probability {
            rng.gen_range(0..=30)
        } else {
            0
        };

        let overtime_hours = if rng.gen::<f64>() < profile.overtime_probability {
            if is_poor {
                f64::from(rng.gen_range(0u32..=2)) * 0.5
            } else {
                f64::from(rng.gen_range(1u32..=8)) * 0.5
            }
        } else {
            0.0
        };

        let (multiplier, floor_fraction) = if is_poor {
            (rng.gen_range(0.7..=0.9), 0.5)
        } else {
            (rng.gen_range(0.95..=1.05), 0.8)
        };
        let completion_rate = (profile.task_completion_rate * multiplier).min(1.0);
        let min_completed = ((f64::from(total_tasks) * floor_fraction) as u32).max(1);
        let max_completed =
            ((f64::from(total_tasks) * completion_rate) as u32).max(min_completed);
        let completed_tasks = rng.gen_range(min_completed..=max_completed).min(total_tasks);

        (total_tasks, late_early_minutes, overtime_hours, completed_tasks)
    } else {
        // A small amount of remote/async work still gets assigned on
        // absent days.
        let (total_tasks, completed_tasks) = if is_poor {
            (rng.gen_range(1..=2), rng.gen_range(0..=1))
        } else {
            let total_tasks: u32 = rng.gen_range(1..=3);
            let rate = profile.task_completion_rate * rng.gen_range(0.7..=0.9);
            let completed_tasks = ((f64::from(total_tasks) * rate) as u32).max(1);
            (total_tasks, completed_tasks)
        };

        (total_tasks, 0, 0.0, completed_tasks)
    };

    DailyRecord {
        date,
        employee_id: employee.id.clone(),
        employee_name: employee.name,
        department: employee.department,
        attendance: if present {
            AttendanceFlag::Present
        } else {
            AttendanceFlag::Absent
        },
        late_early_minutes,
        overtime_hours,
        total_tasks,
        completed_tasks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_business_days_june_2024() {
        let days = business_days(2024, 6);
        assert_eq!(days.len(), 20);
        assert_eq!(days[0], NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());
        assert_eq!(days[19], NaiveDate::from_ymd_opt(2024, 6, 28).unwrap());
        assert!(days
            .iter()
            .all(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun)));
    }

    #[test]
    fn test_business_days_december_wraps_year() {
        let days = business_days(2024, 12);
        assert_eq!(days.len(), 22);
        assert_eq!(days.last().unwrap().day(), 31);
    }

    #[test]
    fn test_invalid_month_rejected() {
        assert!(matches!(
            generate(5, 2024, 0, None),
            Err(GenError::InvalidMonth(0))
        ));
        assert!(matches!(
            generate(5, 2024, 13, None),
            Err(GenError::InvalidMonth(13))
        ));
    }

    #[test]
    fn test_row_count_and_order() {
        let mut rng = StdRng::seed_from_u64(7);
        let records = generate_with_rng(5, 2024, 6, None, &mut rng).unwrap();
        assert_eq!(records.len(), 20 * 5);

        // Day-major, employee-minor
        assert_eq!(records[0].employee_id, "EMP001");
        assert_eq!(records[4].employee_id, "EMP005");
        assert_eq!(records[0].date, records[4].date);
        assert!(records[5].date > records[4].date);
    }

    #[test]
    fn test_invariants_hold() {
        let mut rng = StdRng::seed_from_u64(11);
        let records = generate_with_rng(15, 2025, 2, Some("EMP005"), &mut rng).unwrap();

        for r in &records {
            assert!(r.completed_tasks <= r.total_tasks, "record {r:?}");
            assert!(!matches!(r.date.weekday(), Weekday::Sat | Weekday::Sun));
            // Overtime is half-hour granular, capped at 4h
            assert_eq!((r.overtime_hours * 2.0).fract(), 0.0, "record {r:?}");
            assert!((0.0..=4.0).contains(&r.overtime_hours));
            if !r.attendance.is_present() {
                assert_eq!(r.late_early_minutes, 0);
                assert_eq!(r.overtime_hours, 0.0);
            }
        }
    }

    #[test]
    fn test_seeded_runs_are_deterministic() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        let first = generate_with_rng(15, 2025, 3, Some("EMP011"), &mut a).unwrap();
        let second = generate_with_rng(15, 2025, 3, Some("EMP011"), &mut b).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_poor_performer_ignored() {
        // An id outside the roster must not perturb the draw stream either:
        // the output matches a run with no flag at all.
        let mut a = StdRng::seed_from_u64(5);
        let mut b = StdRng::seed_from_u64(5);
        let flagged = generate_with_rng(15, 2025, 1, Some("EMP999"), &mut a).unwrap();
        let unflagged = generate_with_rng(15, 2025, 1, None, &mut b).unwrap();
        assert_eq!(flagged, unflagged);
    }

    #[test]
    fn test_poor_performer_is_visibly_worse() {
        let mut rng = StdRng::seed_from_u64(42);
        let records = generate_with_rng(15, 2025, 2, Some("EMP005"), &mut rng).unwrap();

        let (poor, rest): (Vec<_>, Vec<_>) =
            records.iter().partition(|r| r.employee_id == "EMP005");

        let attendance = |rows: &[&DailyRecord]| {
            rows.iter().filter(|r| r.attendance.is_present()).count() as f64 / rows.len() as f64
        };
        let mean_late = |rows: &[&DailyRecord]| {
            rows.iter().map(|r| f64::from(r.late_early_minutes)).sum::<f64>() / rows.len() as f64
        };
        let completion = |rows: &[&DailyRecord]| {
            rows.iter()
                .map(|r| f64::from(r.completed_tasks) / f64::from(r.total_tasks))
                .sum::<f64>()
                / rows.len() as f64
        };

        assert!(attendance(&poor) < attendance(&rest));
        assert!(mean_late(&poor) > mean_late(&rest));
        assert!(completion(&poor) < completion(&rest));

        // Underperformer overtime never exceeds one hour
        assert!(poor.iter().all(|r| r.overtime_hours <= 1.0));
    }

    #[test]
    fn test_normal_month_has_no_underperformer_stats() {
        let mut rng = StdRng::seed_from_u64(3);
        let records = generate_with_rng(5, 2024, 6, None, &mut rng).unwrap();

        let ids: std::collections::BTreeSet<_> =
            records.iter().map(|r| r.employee_id.as_str()).collect();
        assert_eq!(
            ids.into_iter().collect::<Vec<_>>(),
            ["EMP001", "EMP002", "EMP003", "EMP004", "EMP005"]
        );

        // Present normal employees are assigned at least 4 tasks and their
        // lateness never reaches the underperformer's 15-60 minute band's
        // upper half.
        for r in records.iter().filter(|r| r.attendance.is_present()) {
            assert!((4..=10).contains(&r.total_tasks));
            assert!(r.late_early_minutes <= 30);
        }
    }
}
