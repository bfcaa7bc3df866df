//! Error types for the fallible edges of the crate.
//!
//! Stat calculation itself never fails. Errors only arise when parsing
//! names and tiers, loading a pet dataset, or writing and reading back
//! a spreadsheet export. All of them are represented by `StatError`.

use thiserror::Error;

/// Errors that can occur at the boundaries of the calculator.
///
/// # Examples
///
/// ```rust
/// use petstat::StatError;
///
/// let err = StatError::UnknownNature("Grumpy".to_string());
/// assert_eq!(err.to_string(), "Unknown nature: Grumpy");
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StatError {
    /// A stat name or dataset key that does not name any `StatKind`.
    #[error("Unknown stat kind: {0}")]
    UnknownStat(String),

    /// A nature name that is not part of the nature catalog.
    #[error("Unknown nature: {0}")]
    UnknownNature(String),

    /// An enhancement tier outside `[-6, 6]`.
    #[error("Tier level out of range [-6, 6]: {0}")]
    InvalidTier(i64),

    /// The pet dataset could not be parsed.
    #[error("Invalid pet dataset: {0}")]
    Dataset(String),

    /// Writing or reading the CSV export failed.
    #[error("Export failed: {0}")]
    Export(String),

    /// An export was read back but a column is missing or a cell is not an integer.
    #[error("Malformed export: {0}")]
    MalformedExport(String),
}

impl From<serde_json::Error> for StatError {
    fn from(err: serde_json::Error) -> Self {
        StatError::Dataset(err.to_string())
    }
}

impl From<csv::Error> for StatError {
    fn from(err: csv::Error) -> Self {
        StatError::Export(err.to_string())
    }
}
