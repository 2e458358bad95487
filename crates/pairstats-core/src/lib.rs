// =============================================================================
// PairStats Core Library
// =============================================================================
//
// Pure Rust statistics for two paired numeric samples: describe them, test
// whether they are correlated, fit a straight line through them, and decide
// whether that line means anything. No I/O happens here.
//
// STRUCTURE:
// ----------
//   - sample:      Validated input containers (Sample, PairedSample)
//   - descriptive: Moments, order statistics, covariance, correlation
//   - tables:      Printed t and F critical values at α = 0.05
//   - inference:   Significance verdicts (t-test, F-test, correlation test)
//   - regression:  Ordinary least squares with one predictor
//   - analysis:    All of the above in one call, for report generation
//   - error:       Error types used throughout the library
//
// Data flows leaf to root:
//
//   sample → descriptive → inference (+ tables) → regression → analysis
//
// FOR MAINTAINERS:
// ----------------
// Every fallible function returns `Result<T>`. Do not introduce sentinel
// values (NaN, None, 0.0) for "undefined" results; add a `PairStatsError`
// variant or reuse `DegenerateInput`.
//
// =============================================================================

pub mod analysis;
pub mod descriptive;
pub mod error;
pub mod inference;
pub mod regression;
pub mod sample;
pub mod tables;

// Re-export commonly used items at the top level
pub use analysis::{analyze, analyze_many, AnalysisConfig, AnalysisReport, CorrelationStrength};
pub use error::{PairStatsError, Result};
pub use inference::{
    f_test, t_test, t_test_correlation, CriticalValues, QuantileCriticalValues,
    TabulatedCriticalValues, TestVerdict, ThresholdPolicy,
};
pub use regression::{fit_many, RegressionModel};
pub use sample::{PairedSample, Sample};
