//! # perfgen
//!
//! Synthesizes a fake daily employee-performance dataset (attendance,
//! lateness, overtime, task completion) for every business day of a month
//! and exports it as one Excel workbook per month.
//!
//! ## Features
//!
//! - **Per-employee behavior profiles**: each employee draws personal
//!   attendance/lateness/overtime/completion probabilities for the run
//! - **Poor-performer mode**: one employee per month can be flagged, skewing
//!   every probability toward worse outcomes
//! - **Business days only**: weekends never appear in the output
//! - **Injectable randomness**: every draw flows through a caller-supplied
//!   [`rand::Rng`], so tests run against a seeded stream
//! - **Excel export**: one `DailyPerformance` sheet per month via
//!   `rust_xlsxwriter`
//!
//! ## Quick Start
//!
//! ```no_run
//! use perfgen::{export, generate};
//! use std::path::Path;
//!
//! # fn main() -> perfgen::Result<()> {
//! let records = generate(15, 2025, 2, Some("EMP005"))?;
//! let name = export::report_file_name(2025, 2);
//! export::write_monthly_report(&records, Path::new(&name))?;
//! # Ok(())
//! # }
//! ```
//!
//! Deterministic generation for tests:
//!
//! ```
//! use perfgen::generate_with_rng;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let records = generate_with_rng(5, 2024, 6, None, &mut rng).unwrap();
//! assert!(records.iter().all(|r| r.completed_tasks <= r.total_tasks));
//! ```

pub mod error;
pub mod export;
pub mod generator;
pub mod plan;
pub mod profile;
pub mod roster;
pub mod types;

pub use error::{GenError, Result};
pub use generator::{business_days, generate, generate_with_rng};
pub use plan::{default_plan, MonthPlan};
pub use profile::EmployeeProfile;
pub use types::{AttendanceFlag, DailyRecord, Employee};
