use thiserror::Error;

/// Error type for invalid case input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CaseError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("height {target} m is outside the table domain [{lo} m, {hi} m]")]
    OutOfRangeHeight {
        target: f64,
        lo: f64,
        hi: f64,
    },
    #[error("table {name} has {actual} entries, expected {expected} to match its time axis")]
    MismatchedTableLength {
        name: String,
        expected: usize,
        actual: usize,
    },
}

/// Convenience type for `Result<T, CaseError>`.
pub type CaseResult<T> = Result<T, CaseError>;
