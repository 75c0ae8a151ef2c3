use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ToolError>;

/// The column roles the ingestion layer must be able to locate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Machinery,
    JobTitle,
}

impl std::fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnKind::Machinery => write!(f, "machinery"),
            ColumnKind::JobTitle => write!(f, "job title"),
        }
    }
}

/// Error type covering the different failure cases that can occur when the
/// tool ingests, compares, or reports machinery job data.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Wrapper for IO failures such as reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when delimited-file parsing fails.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Errors bubbled up from the Excel reader implementation.
    #[error("Excel read error: {0}")]
    ExcelRead(#[from] calamine::XlsxError),

    /// Errors bubbled up from the Excel writer implementation.
    #[error("Excel write error: {0}")]
    ExcelWrite(#[from] rust_xlsxwriter::XlsxError),

    /// Raised when JSON serialization of the comparison summary fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Raised when a canonicalization rule pattern fails to compile.
    #[error("rule pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// Raised when the user provides a path that does not exist.
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),

    /// Raised when the input extension maps to no known tabular format.
    #[error("unsupported input format: {0}")]
    UnsupportedFormat(PathBuf),

    /// Raised when a file carries no header row at all.
    #[error("no header row found in {0}")]
    EmptyTable(PathBuf),

    /// Raised when no accepted alias for a required column is present.
    /// Carries the full header list so the caller can diagnose the file.
    #[error("no {kind} column found; available columns: {available:?}")]
    MissingColumn {
        kind: ColumnKind,
        available: Vec<String>,
    },

    /// Raised when the CLI is invoked without any report or summary target.
    #[error("no output requested; pass --titles-output, --counts-output, or --summary")]
    NoOutputRequested,

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
