// =============================================================================
// Paired-Sample Analysis
// =============================================================================
//
// The full pipeline in one call, producing a single record that a report
// renderer can print without doing any statistics of its own:
//
//   1. Descriptive summaries of X and Y
//   2. Pearson correlation and its t-test
//   3. OLS fit: equation, R², standard errors, confidence intervals
//   4. Overall F-test against the F quantile at the configured α
//   5. Per-coefficient t-tests, both the signed table test and the
//      absolute-value convenience check
//   6. Table-based overall model check
//
// =============================================================================

use rayon::prelude::*;

use crate::descriptive::{describe, DescriptiveSummary};
use crate::error::Result;
use crate::inference::{
    f_test, t_test, t_test_correlation, CorrelationTest, QuantileCriticalValues, TestVerdict,
    DEFAULT_ALPHA,
};
use crate::regression::{ConfidenceIntervals, ParameterSignificance, RegressionModel, StandardErrors};
use crate::sample::PairedSample;

// =============================================================================
// Configuration
// =============================================================================

/// Options for [`analyze`].
///
/// The defaults reproduce the classic 5% textbook analysis.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnalysisConfig {
    /// Significance level for the F quantile and the confidence intervals.
    /// The t-tests always use the printed α = 0.05 table.
    /// Default: 0.05
    pub alpha: f64,

    /// |r| above this is reported as a strong correlation.
    /// Default: 0.7
    pub strong_correlation: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            strong_correlation: 0.7,
        }
    }
}

/// Verbal strength of a correlation coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CorrelationStrength {
    Strong,
    WeakOrModerate,
}

impl CorrelationStrength {
    /// `Strong` if `|r| > threshold`.
    pub fn classify(r: f64, threshold: f64) -> Self {
        if r.abs() > threshold {
            CorrelationStrength::Strong
        } else {
            CorrelationStrength::WeakOrModerate
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CorrelationStrength::Strong => "strong",
            CorrelationStrength::WeakOrModerate => "weak/moderate",
        }
    }
}

// =============================================================================
// Result
// =============================================================================

/// Everything a report needs about one paired sample.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnalysisReport {
    pub n: usize,
    pub alpha: f64,
    pub x_summary: DescriptiveSummary,
    pub y_summary: DescriptiveSummary,

    pub correlation: CorrelationTest,
    pub correlation_strength: CorrelationStrength,

    pub intercept: f64,
    pub slope: f64,
    pub r_squared: f64,
    pub standard_errors: StandardErrors,
    pub confidence_intervals: ConfidenceIntervals,

    /// F against `F⁻¹(1 - alpha; 1, n - 2)`
    pub f_test: TestVerdict,
    /// Signed t-test of the intercept against the t-table
    pub intercept_t_test: TestVerdict,
    /// Signed t-test of the slope against the t-table
    pub slope_t_test: TestVerdict,
    /// |t| against the t-table for both coefficients
    pub parameter_significance: ParameterSignificance,
    /// F against the F-table
    pub model_significance: TestVerdict,
}

/// Run the whole analysis on one paired sample.
///
/// Fails if any step fails: too few pairs, a constant column, or a
/// perfect fit (which leaves no residual variance to test against).
pub fn analyze(data: &PairedSample, config: &AnalysisConfig) -> Result<AnalysisReport> {
    let quantiles = QuantileCriticalValues::new(config.alpha)?;

    let x_summary = describe(data.x())?;
    let y_summary = describe(data.y())?;
    let correlation = t_test_correlation(data.x(), data.y())?;

    let model = RegressionModel::fit(data)?;
    let df_resid = model.df_resid();
    let (t_a, t_b) = model.t_values()?;

    let report = AnalysisReport {
        n: data.len(),
        alpha: config.alpha,
        x_summary,
        y_summary,
        correlation_strength: CorrelationStrength::classify(
            correlation.r,
            config.strong_correlation,
        ),
        correlation,
        intercept: model.intercept(),
        slope: model.slope(),
        r_squared: model.r_squared()?,
        standard_errors: model.standard_errors(),
        confidence_intervals: model.confidence_intervals(&quantiles)?,
        f_test: f_test(model.f_statistic()?, model.df_model(), df_resid, config.alpha)?,
        intercept_t_test: t_test(t_a, df_resid)?,
        slope_t_test: t_test(t_b, df_resid)?,
        parameter_significance: model.check_parameters_significance()?,
        model_significance: model.check_model_significance()?,
    };

    tracing::debug!(
        n = report.n,
        r = report.correlation.r,
        r_squared = report.r_squared,
        f = report.f_test.statistic,
        "analysis complete"
    );
    Ok(report)
}

/// Analyze many independent paired samples in parallel, in input order.
pub fn analyze_many(samples: &[PairedSample], config: &AnalysisConfig) -> Vec<Result<AnalysisReport>> {
    samples.par_iter().map(|data| analyze(data, config)).collect()
}

// =============================================================================
// Tests
// =============================================================================
