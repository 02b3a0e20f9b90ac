//! perfgen driver - generates the stock ten months of performance reports.
//!
//! Writes `EmployeePerformance_<year><month>.xlsx` files into the output
//! directory given as the first argument (current directory by default):
//!
//! ```bash
//! perfgen ./reports
//! ```
//!
//! Verbosity is controlled through `RUST_LOG` (default `info`).

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use perfgen::{default_plan, export, generate, Result};

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

fn run(output_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(output_dir)?;

    let plan = default_plan();
    let months = plan.len();

    for entry in plan {
        let records = generate(15, entry.year, entry.month, entry.poor_performer.as_deref())?;
        let path = output_dir.join(export::report_file_name(entry.year, entry.month));
        export::write_monthly_report(&records, &path)?;
        info!(
            year = entry.year,
            month = entry.month,
            rows = records.len(),
            poor_performer = entry.poor_performer.as_deref().unwrap_or("-"),
            "wrote {}",
            path.display()
        );
    }

    info!(
        "generated {months} monthly reports in {}",
        output_dir.display()
    );
    Ok(())
}

fn main() -> ExitCode {
    setup_logging();

    let output_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    match run(&output_dir) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("generation failed: {e}");
            ExitCode::FAILURE
        }
    }
}
