// =============================================================================
// Critical Value Sources
// =============================================================================
//
// Two interchangeable ways of answering "what value must the statistic beat?":
//
//   TabulatedCriticalValues  The printed α = 0.05 tables in `crate::tables`.
//                            Sparse df coverage (rounded down), F only for
//                            one model degree of freedom. This is the default
//                            everywhere in the library.
//
//   QuantileCriticalValues   Exact quantiles of Student's t and Fisher's F
//                            (via statrs) at any α and any df.
//
// Both agree to the printed precision wherever the tables have an entry.
//
// =============================================================================

use statrs::distribution::{ContinuousCDF, FisherSnedecor, StudentsT};

use crate::error::{PairStatsError, Result};
use crate::tables::{self, TABLE_ALPHA};

/// A source of critical values for t- and F-tests.
pub trait CriticalValues: Send + Sync {
    /// Short name for reports and logs.
    fn name(&self) -> &str;

    /// Significance level the values are computed for.
    fn alpha(&self) -> f64;

    /// Two-sided t critical value for `df` degrees of freedom.
    fn t_critical(&self, df: u32) -> Result<f64>;

    /// Upper-tail F critical value for (`df_model`, `df_resid`).
    fn f_critical(&self, df_model: u32, df_resid: u32) -> Result<f64>;
}

// =============================================================================
// Printed tables
// =============================================================================

/// Critical values from the fixed α = 0.05 tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabulatedCriticalValues;

impl CriticalValues for TabulatedCriticalValues {
    fn name(&self) -> &str {
        "tables"
    }

    fn alpha(&self) -> f64 {
        TABLE_ALPHA
    }

    fn t_critical(&self, df: u32) -> Result<f64> {
        tables::t_critical(df)
    }

    /// Only `df_model = 1` is tabulated; anything else is `InvalidValue`.
    fn f_critical(&self, df_model: u32, df_resid: u32) -> Result<f64> {
        if df_model != 1 {
            return Err(PairStatsError::InvalidValue(format!(
                "only df_model = 1 is tabulated for F, got {}",
                df_model
            )));
        }
        tables::f_critical(df_resid)
    }
}

// =============================================================================
// Distribution quantiles
// =============================================================================

/// Critical values from the t and F quantile functions.
#[derive(Debug, Clone, Copy)]
pub struct QuantileCriticalValues {
    alpha: f64,
}

impl QuantileCriticalValues {
    /// Quantile-based critical values at significance level `alpha`.
    ///
    /// `alpha` must lie strictly between 0 and 1.
    pub fn new(alpha: f64) -> Result<Self> {
        if !(alpha > 0.0 && alpha < 1.0) {
            return Err(PairStatsError::InvalidValue(format!(
                "alpha must be in (0, 1), got {}",
                alpha
            )));
        }
        Ok(Self { alpha })
    }
}

impl Default for QuantileCriticalValues {
    fn default() -> Self {
        Self { alpha: TABLE_ALPHA }
    }
}

impl CriticalValues for QuantileCriticalValues {
    fn name(&self) -> &str {
        "quantiles"
    }

    fn alpha(&self) -> f64 {
        self.alpha
    }

    fn t_critical(&self, df: u32) -> Result<f64> {
        require_df(df)?;
        let t_dist = StudentsT::new(0.0, 1.0, df as f64)
            .map_err(|e| PairStatsError::Distribution(e.to_string()))?;

        // Two-sided: α/2 in each tail
        Ok(t_dist.inverse_cdf(1.0 - self.alpha / 2.0))
    }

    fn f_critical(&self, df_model: u32, df_resid: u32) -> Result<f64> {
        require_df(df_model)?;
        require_df(df_resid)?;
        let f_dist = FisherSnedecor::new(df_model as f64, df_resid as f64)
            .map_err(|e| PairStatsError::Distribution(e.to_string()))?;

        // Upper tail only: large F means the model explains a lot
        Ok(f_dist.inverse_cdf(1.0 - self.alpha))
    }
}

fn require_df(df: u32) -> Result<()> {
    if df == 0 {
        return Err(PairStatsError::OutOfRange { df, min: 1 });
    }
    Ok(())
}
