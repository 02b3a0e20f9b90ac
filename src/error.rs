//! Error types for the perfgen library

use thiserror::Error;

/// Result type alias for perfgen operations
pub type Result<T> = std::result::Result<T, GenError>;

/// Main error type for dataset generation and export
#[derive(Error, Debug)]
pub enum GenError {
    /// Requested more employees than the fixed identity roster can supply
    #[error("roster exhausted: requested {requested} employees, only {available} identities available")]
    RosterExhausted { requested: usize, available: usize },

    /// Month outside 1-12
    #[error("invalid month {0}: expected a value in 1-12")]
    InvalidMonth(u32),

    /// Error occurred while writing the Excel report
    #[error("failed to write Excel report: {0}")]
    Export(#[from] rust_xlsxwriter::XlsxError),

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
