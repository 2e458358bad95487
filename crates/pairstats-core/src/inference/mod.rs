// =============================================================================
// Hypothesis Testing
// =============================================================================
//
// This module turns an empirical test statistic into a yes/no significance
// verdict:
//
//     statistic  ──compare──▶  critical value  ──▶  TestVerdict
//
// - VERDICTS:  `TestVerdict` and the two comparison policies
// - CRITICAL:  where critical values come from (printed tables or quantiles)
// - TESTS:     the t-test, F-test and correlation t-test themselves
//
// TWO COMPARISON POLICIES
// -----------------------
// The library deliberately keeps two different comparisons:
//
//   Signed:    significant ⇔ statistic > critical
//   Absolute:  significant ⇔ |statistic| > critical
//
// `t_test` uses Signed: a strongly NEGATIVE coefficient is reported as NOT
// significant, so callers who want a two-sided answer must pass |t|. The
// regression engine's `check_parameters_significance` uses Absolute. Neither
// is silently rewritten into the other.
//
// HOW TO READ THE RESULTS
// -----------------------
// A significant verdict at α = 0.05 means: if the true effect were zero, a
// statistic this large would occur less than 5% of the time. It says nothing
// about how large or how useful the effect is.
//
// =============================================================================

mod critical;
mod hypothesis;
mod verdict;

pub use critical::{CriticalValues, QuantileCriticalValues, TabulatedCriticalValues};
pub use hypothesis::{
    confidence_interval_t, f_test, f_test_with, t_test, t_test_correlation, t_test_with,
    CorrelationTest, DEFAULT_ALPHA,
};
pub use verdict::{significance_marker, TestVerdict, ThresholdPolicy};
