// =============================================================================
// t-Test, F-Test and Correlation Test
// =============================================================================

use crate::descriptive::pearson_correlation;
use crate::error::{PairStatsError, Result};
use crate::sample::Sample;
use crate::tables::df_from_count;

use super::critical::{CriticalValues, QuantileCriticalValues, TabulatedCriticalValues};
use super::verdict::{TestVerdict, ThresholdPolicy};

/// Significance level used when the caller does not choose one.
pub const DEFAULT_ALPHA: f64 = 0.05;

// =============================================================================
// t-test
// =============================================================================

/// Compare a t-statistic with the tabulated critical value for `df`.
///
/// Uses the SIGNED policy: significant only if `t_emp > t_critical`. A large
/// negative statistic is not significant here; pass `t_emp.abs()` for the
/// usual two-sided reading, or use `t_test_with` and
/// `ThresholdPolicy::Absolute`.
///
/// # Arguments
/// * `t_emp` - Empirical t-statistic
/// * `df` - Degrees of freedom (rounded down to a table key)
pub fn t_test(t_emp: f64, df: u32) -> Result<TestVerdict> {
    t_test_with(t_emp, df, ThresholdPolicy::Signed, &TabulatedCriticalValues)
}

/// t-test with an explicit comparison policy and critical-value source.
pub fn t_test_with(
    t_emp: f64,
    df: u32,
    policy: ThresholdPolicy,
    source: &dyn CriticalValues,
) -> Result<TestVerdict> {
    let t_crit = source.t_critical(df)?;
    Ok(TestVerdict::decide(t_emp, t_crit, policy))
}

// =============================================================================
// F-test
// =============================================================================

/// Compare an F-statistic with the F quantile at `1 - alpha`.
///
/// Unlike the t-test this does not use the printed table, because the
/// table only covers one model degree of freedom; the critical value is
/// `F⁻¹(1 - alpha; df_model, df_resid)`.
///
/// # Arguments
/// * `f_emp` - Empirical F-statistic
/// * `df_model` - Numerator degrees of freedom (number of predictors)
/// * `df_resid` - Denominator degrees of freedom (n - predictors - 1)
/// * `alpha` - Significance level, e.g. `DEFAULT_ALPHA`
pub fn f_test(f_emp: f64, df_model: u32, df_resid: u32, alpha: f64) -> Result<TestVerdict> {
    let source = QuantileCriticalValues::new(alpha)?;
    f_test_with(f_emp, df_model, df_resid, &source)
}

/// F-test against an explicit critical-value source.
///
/// F is never negative, so the comparison is always `f_emp > critical`.
pub fn f_test_with(
    f_emp: f64,
    df_model: u32,
    df_resid: u32,
    source: &dyn CriticalValues,
) -> Result<TestVerdict> {
    let f_crit = source.f_critical(df_model, df_resid)?;
    Ok(TestVerdict::decide(f_emp, f_crit, ThresholdPolicy::Signed))
}

// =============================================================================
// Correlation t-test
// =============================================================================

/// Result of testing a Pearson correlation for significance.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CorrelationTest {
    /// Pearson correlation coefficient
    pub r: f64,
    /// Degrees of freedom, n - 2
    pub df: u32,
    /// t = |r|·√(n-2) / √(1-r²) against the tabulated t critical value
    pub verdict: TestVerdict,
}

/// Test H₀: ρ = 0 for two aligned samples.
///
/// The statistic is
///
/// ```text
/// t = |r| · √(n - 2) / √(1 - r²)
/// ```
///
/// with `n - 2` degrees of freedom. Because `|r|` is used, the statistic is
/// never negative and a strong negative correlation is significant too. A
/// perfect correlation (`|r| = 1`) gives `t = +∞`.
///
/// Fails with `LengthMismatch` for unequal lengths, `InsufficientData` for
/// fewer than 3 pairs, and `DegenerateInput` when either sample is constant.
pub fn t_test_correlation(x: &Sample, y: &Sample) -> Result<CorrelationTest> {
    if x.len() != y.len() {
        return Err(PairStatsError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    let n = x.len();
    if n < 3 {
        return Err(PairStatsError::InsufficientData {
            required: 3,
            actual: n,
        });
    }

    let r = pearson_correlation(x, y)?;
    let df = df_from_count(n - 2);

    let one_minus_r2 = 1.0 - r * r;
    let t_emp = if one_minus_r2 <= 0.0 {
        f64::INFINITY
    } else {
        r.abs() * ((n - 2) as f64).sqrt() / one_minus_r2.sqrt()
    };

    Ok(CorrelationTest {
        r,
        df,
        verdict: t_test(t_emp, df)?,
    })
}

// =============================================================================
// Confidence intervals
// =============================================================================

/// Confidence interval `estimate ± t_crit · std_error`.
///
/// # Returns
/// (lower_bound, upper_bound)
pub fn confidence_interval_t(estimate: f64, std_error: f64, t_crit: f64) -> (f64, f64) {
    let margin = t_crit * std_error;
    (estimate - margin, estimate + margin)
}

// =============================================================================
// Tests
// =============================================================================
