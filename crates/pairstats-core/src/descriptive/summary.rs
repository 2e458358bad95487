// =============================================================================
// Descriptive Summary
// =============================================================================
//
// One record per sample, for reports. Shape measures that are undefined for
// this particular sample (constant data, zero mean) come back as `None`
// instead of failing the whole summary.
//
// =============================================================================

use crate::error::Result;
use crate::sample::Sample;

use super::moments::{coefficient_of_variation, kurtosis, mean, skewness, std_dev, variance};
use super::order::{median, mode, range};

/// All single-sample statistics in one place.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DescriptiveSummary {
    pub n: usize,
    pub mean: f64,
    pub median: f64,
    pub modes: Vec<f64>,
    pub variance: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    /// `None` when the mean is zero
    pub coefficient_of_variation: Option<f64>,
    /// `None` when the sample is constant
    pub skewness: Option<f64>,
    /// Excess kurtosis; `None` when the sample is constant
    pub kurtosis: Option<f64>,
}

/// Summarize one sample. Fails only on an empty sample.
pub fn describe(d: &Sample) -> Result<DescriptiveSummary> {
    let (min, max) = range(d)?;

    Ok(DescriptiveSummary {
        n: d.len(),
        mean: mean(d)?,
        median: median(d)?,
        modes: mode(d)?,
        variance: variance(d)?,
        std_dev: std_dev(d)?,
        min,
        max,
        coefficient_of_variation: coefficient_of_variation(d).ok(),
        skewness: skewness(d).ok(),
        kurtosis: kurtosis(d).ok(),
    })
}
