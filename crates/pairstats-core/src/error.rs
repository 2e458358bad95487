// =============================================================================
// Error Types
// =============================================================================
//
// Every fallible operation in the library returns `Result<T>`, which is
// `std::result::Result<T, PairStatsError>`.
//
// There are no "None means undefined" sentinels anywhere in the crate. A ratio
// that cannot be computed (zero variance, zero mean, zero residuals) is the
// named error `DegenerateInput`, so callers always know *why* a number is
// missing and can decide whether to abort, skip, or print a placeholder.
//
// Nothing here is retried: all computations are deterministic, so the same
// input always produces the same error.
//
// =============================================================================

use thiserror::Error;

/// Errors raised by the statistics, inference and regression routines.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PairStatsError {
    /// Two sequences that must be index-aligned have different lengths.
    #[error("length mismatch: {left} observations vs {right} observations")]
    LengthMismatch { left: usize, right: usize },

    /// A ratio is undefined for this data (zero variance, zero mean, ...).
    #[error("degenerate input: {0}")]
    DegenerateInput(String),

    /// No critical value is tabulated for these degrees of freedom.
    #[error("degrees of freedom {df} out of range (smallest supported is {min})")]
    OutOfRange { df: u32, min: u32 },

    /// An operation that needs at least one observation got none.
    #[error("empty input: {0}")]
    EmptyInput(String),

    /// Too few observations for the requested degrees of freedom.
    #[error("insufficient data: need at least {required} observations, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// A value is outside its domain (NaN/inf data, alpha not in (0, 1), ...).
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// The distribution backend rejected its parameters.
    #[error("distribution error: {0}")]
    Distribution(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PairStatsError>;
