//! Driver configuration
//!
//! The months to generate, and who (if anyone) underperforms in each, are an
//! explicit list handed to the driver rather than logic baked into the loop.

/// One month of data to generate and export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthPlan {
    pub year: i32,
    pub month: u32,
    /// Employee id whose month is skewed negative, if any
    pub poor_performer: Option<String>,
}

impl MonthPlan {
    pub fn new(year: i32, month: u32) -> Self {
        MonthPlan {
            year,
            month,
            poor_performer: None,
        }
    }

    pub fn with_poor_performer(year: i32, month: u32, employee_id: &str) -> Self {
        MonthPlan {
            year,
            month,
            poor_performer: Some(employee_id.to_string()),
        }
    }
}

/// The stock ten-month plan: 2024-06 through 2024-12 clean, then
/// 2025-01 through 2025-03 with EMP005 flagged in February and EMP011 in
/// March
pub fn default_plan() -> Vec<MonthPlan> {
    let mut plan: Vec<MonthPlan> = (6..=12).map(|m| MonthPlan::new(2024, m)).collect();
    plan.push(MonthPlan::new(2025, 1));
    plan.push(MonthPlan::with_poor_performer(2025, 2, "EMP005"));
    plan.push(MonthPlan::with_poor_performer(2025, 3, "EMP011"));
    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_plan_shape() {
        let plan = default_plan();
        assert_eq!(plan.len(), 10);
        assert_eq!(plan[0], MonthPlan::new(2024, 6));
        assert_eq!(plan[6], MonthPlan::new(2024, 12));
        assert_eq!(plan[7], MonthPlan::new(2025, 1));
        assert_eq!(
            plan[8].poor_performer.as_deref(),
            Some("EMP005")
        );
        assert_eq!(
            plan[9],
            MonthPlan::with_poor_performer(2025, 3, "EMP011")
        );
    }
}
