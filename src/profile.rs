//! Per-employee behavioral probability profiles

use rand::Rng;

/// Behavioral parameters sampled once per run for each employee
///
/// All values are probabilities or rates in `[0, 1]`. Normal employees and
/// the flagged underperformer draw from disjoint ranges, so an
/// underperformer's month is visibly worse on every axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmployeeProfile {
    /// Chance of showing up on any given business day
    pub attendance_probability: f64,
    /// Chance of arriving late or leaving early on a day worked
    pub lateness_probability: f64,
    /// Chance of logging overtime on a day worked
    pub overtime_probability: f64,
    /// Base fraction of assigned tasks completed
    pub task_completion_rate: f64,
}

impl EmployeeProfile {
    /// Sample a profile from the normal-employee ranges
    pub fn normal(rng: &mut impl Rng) -> Self {
        EmployeeProfile {
            attendance_probability: rng.gen_range(0.92..=0.99),
            lateness_probability: rng.gen_range(0.05..=0.15),
            overtime_probability: rng.gen_range(0.3..=0.6),
            task_completion_rate: rng.gen_range(0.8..=1.0),
        }
    }

    /// Sample a profile from the underperformer ranges
    pub fn underperformer(rng: &mut impl Rng) -> Self {
        EmployeeProfile {
            attendance_probability: rng.gen_range(0.65..=0.75),
            lateness_probability: rng.gen_range(0.4..=0.6),
            overtime_probability: rng.gen_range(0.05..=0.15),
            task_completion_rate: rng.gen_range(0.5..=0.65),
        }
    }
}
