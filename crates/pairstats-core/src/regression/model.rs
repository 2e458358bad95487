// =============================================================================
// Regression Model
// =============================================================================

use ndarray::Array1;

use crate::descriptive::{covariance, is_constant, mean, pearson_correlation, variance};
use crate::error::{PairStatsError, Result};
use crate::inference::{
    confidence_interval_t, f_test_with, t_test_with, CriticalValues, TabulatedCriticalValues,
    TestVerdict, ThresholdPolicy,
};
use crate::sample::{PairedSample, Sample};
use crate::tables::{self, df_from_count};

/// Minimum number of pairs: two parameters plus one residual degree of freedom.
const MIN_OBSERVATIONS: usize = 3;

// =============================================================================
// Result records
// =============================================================================

/// Standard errors of the two coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StandardErrors {
    pub intercept: f64,
    pub slope: f64,
}

/// Per-coefficient t-test verdicts.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParameterSignificance {
    pub intercept: TestVerdict,
    pub slope: TestVerdict,
}

/// (lower, upper) confidence bounds for each coefficient.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfidenceIntervals {
    pub intercept: (f64, f64),
    pub slope: (f64, f64),
}

// =============================================================================
// RegressionModel
// =============================================================================

/// An ordinary-least-squares line fitted to one `PairedSample`.
///
/// Built once by [`RegressionModel::fit`] and never modified; every query
/// is a pure function of the fitted state. To refit, build a new model.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RegressionModel {
    data: PairedSample,
    intercept: f64,
    slope: f64,
    mean_x: f64,
    mean_y: f64,
    fitted_values: Array1<f64>,
    residuals: Array1<f64>,
}

impl RegressionModel {
    /// Fit `y = a + b·x` by ordinary least squares.
    ///
    /// # Errors
    /// * `InsufficientData` - fewer than 3 pairs (no residual degrees of freedom)
    /// * `DegenerateInput` - x is constant, so the slope is undefined
    pub fn fit(data: &PairedSample) -> Result<Self> {
        let n = data.len();
        if n < MIN_OBSERVATIONS {
            return Err(PairStatsError::InsufficientData {
                required: MIN_OBSERVATIONS,
                actual: n,
            });
        }

        let (x, y) = (data.x(), data.y());

        // ---------------------------------------------------------------------
        // Step 1: slope b = cov(x, y) / var(x)
        // ---------------------------------------------------------------------
        if is_constant(x) {
            return Err(PairStatsError::DegenerateInput(
                "slope is undefined because X has zero variance".to_string(),
            ));
        }
        let slope = covariance(x, y)? / variance(x)?;

        // ---------------------------------------------------------------------
        // Step 2: intercept a = ȳ - b·x̄
        // ---------------------------------------------------------------------
        let mean_x = mean(x)?;
        let mean_y = mean(y)?;
        let intercept = mean_y - slope * mean_x;

        // ---------------------------------------------------------------------
        // Steps 3-4: fitted values and residuals
        // ---------------------------------------------------------------------
        let fitted_values = x.values().mapv(|xi| intercept + slope * xi);
        let residuals = y.values() - &fitted_values;

        tracing::debug!(n, intercept, slope, "fitted OLS line");

        Ok(Self {
            data: data.clone(),
            intercept,
            slope,
            mean_x,
            mean_y,
            fitted_values,
            residuals,
        })
    }

    // -------------------------------------------------------------------------
    // Fitted state
    // -------------------------------------------------------------------------

    /// Number of observations the line was fitted to.
    pub fn n(&self) -> usize {
        self.data.len()
    }

    /// Intercept `a`.
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Slope `b`: change in y per unit change in x.
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Fitted values `ŷᵢ = a + b·xᵢ`, in input order.
    pub fn fitted_values(&self) -> &Array1<f64> {
        &self.fitted_values
    }

    /// Residuals `eᵢ = yᵢ - ŷᵢ`, in input order.
    pub fn residuals(&self) -> &Array1<f64> {
        &self.residuals
    }

    pub fn x(&self) -> &Sample {
        self.data.x()
    }

    pub fn y(&self) -> &Sample {
        self.data.y()
    }

    /// Predict y for a new x.
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    /// Predict y for several new x values.
    pub fn predict_many(&self, xs: &[f64]) -> Array1<f64> {
        xs.iter().map(|&x| self.predict(x)).collect()
    }

    /// Pearson correlation between x and y.
    pub fn correlation(&self) -> Result<f64> {
        pearson_correlation(self.data.x(), self.data.y())
    }

    // -------------------------------------------------------------------------
    // Sums of squares
    // -------------------------------------------------------------------------

    /// Total sum of squares, `Σ(yᵢ - ȳ)²`.
    pub fn tss(&self) -> f64 {
        self.data
            .y()
            .iter()
            .map(|&yi| (yi - self.mean_y).powi(2))
            .sum()
    }

    /// Residual sum of squares, `Σeᵢ²`.
    pub fn rss(&self) -> f64 {
        self.residuals.iter().map(|&e| e * e).sum()
    }

    /// Explained sum of squares, `TSS - RSS`.
    pub fn ess(&self) -> f64 {
        self.tss() - self.rss()
    }

    /// Coefficient of determination, `ESS / TSS`.
    ///
    /// Undefined when y is constant (`TSS = 0`).
    pub fn r_squared(&self) -> Result<f64> {
        if is_constant(self.data.y()) {
            return Err(PairStatsError::DegenerateInput(
                "R² is undefined because Y has zero variance".to_string(),
            ));
        }
        Ok(self.ess() / self.tss())
    }

    // -------------------------------------------------------------------------
    // Inference
    // -------------------------------------------------------------------------

    /// Model degrees of freedom (one predictor).
    pub fn df_model(&self) -> u32 {
        1
    }

    /// Residual degrees of freedom, `n - 2`.
    pub fn df_resid(&self) -> u32 {
        df_from_count(self.n() - 2)
    }

    /// Unbiased noise variance estimate `s² = RSS / (n - 2)`.
    pub fn residual_variance(&self) -> f64 {
        self.rss() / f64::from(self.df_resid())
    }

    /// True when the residuals carry no variance to test against: Y is
    /// constant, or RSS is rounding noise relative to TSS.
    fn is_perfect_fit(&self) -> bool {
        is_constant(self.data.y()) || self.rss() <= f64::EPSILON * self.n() as f64 * self.tss()
    }

    /// `Sxx = Σ(xᵢ - x̄)²`.
    fn sxx(&self) -> f64 {
        self.data
            .x()
            .iter()
            .map(|&xi| (xi - self.mean_x).powi(2))
            .sum()
    }

    /// Standard errors of the intercept and slope.
    pub fn standard_errors(&self) -> StandardErrors {
        let s2 = self.residual_variance();
        let sxx = self.sxx();
        let n = self.n() as f64;

        StandardErrors {
            intercept: (s2 * (1.0 / n + self.mean_x.powi(2) / sxx)).sqrt(),
            slope: (s2 / sxx).sqrt(),
        }
    }

    /// t-statistics `(a / se(a), b / se(b))`.
    ///
    /// Undefined for a perfect fit, where the standard errors vanish.
    pub fn t_values(&self) -> Result<(f64, f64)> {
        if self.is_perfect_fit() {
            return Err(PairStatsError::DegenerateInput(
                "t-values are undefined because the residuals are all zero".to_string(),
            ));
        }
        let se = self.standard_errors();
        Ok((self.intercept / se.intercept, self.slope / se.slope))
    }

    /// Overall F-statistic `(ESS / 1) / (RSS / (n - 2))`.
    ///
    /// Undefined for a perfect fit (RSS zero up to rounding).
    pub fn f_statistic(&self) -> Result<f64> {
        if self.is_perfect_fit() {
            return Err(PairStatsError::DegenerateInput(
                "F-statistic is undefined because the residual sum of squares is zero"
                    .to_string(),
            ));
        }
        let df_model = f64::from(self.df_model());
        Ok((self.ess() / df_model) / (self.rss() / f64::from(self.df_resid())))
    }

    /// Tabulated t critical value at `n - 2` degrees of freedom.
    pub fn t_critical(&self) -> Result<f64> {
        tables::t_critical(self.df_resid())
    }

    /// Tabulated F critical value for (1, `n - 2`) degrees of freedom.
    pub fn f_critical(&self) -> Result<f64> {
        tables::f_critical(self.df_resid())
    }

    /// Are the coefficients individually significant?
    ///
    /// Uses the ABSOLUTE policy (`|t| > t_critical`) against the t-table,
    /// unlike the signed [`crate::inference::t_test`].
    pub fn check_parameters_significance(&self) -> Result<ParameterSignificance> {
        self.check_parameters_significance_with(&TabulatedCriticalValues)
    }

    /// Coefficient significance against an explicit critical-value source.
    pub fn check_parameters_significance_with(
        &self,
        source: &dyn CriticalValues,
    ) -> Result<ParameterSignificance> {
        let (t_a, t_b) = self.t_values()?;
        let df = self.df_resid();
        Ok(ParameterSignificance {
            intercept: t_test_with(t_a, df, ThresholdPolicy::Absolute, source)?,
            slope: t_test_with(t_b, df, ThresholdPolicy::Absolute, source)?,
        })
    }

    /// Is the model as a whole significant? `F > F_critical` via the F-table.
    pub fn check_model_significance(&self) -> Result<TestVerdict> {
        self.check_model_significance_with(&TabulatedCriticalValues)
    }

    /// Model significance against an explicit critical-value source.
    pub fn check_model_significance_with(
        &self,
        source: &dyn CriticalValues,
    ) -> Result<TestVerdict> {
        let f = self.f_statistic()?;
        f_test_with(f, self.df_model(), self.df_resid(), source)
    }

    /// Confidence intervals for both coefficients at the source's level.
    pub fn confidence_intervals(&self, source: &dyn CriticalValues) -> Result<ConfidenceIntervals> {
        let t_crit = source.t_critical(self.df_resid())?;
        let se = self.standard_errors();
        Ok(ConfidenceIntervals {
            intercept: confidence_interval_t(self.intercept, se.intercept, t_crit),
            slope: confidence_interval_t(self.slope, se.slope, t_crit),
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
