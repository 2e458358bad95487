// =============================================================================
// Descriptive Statistics
// =============================================================================
//
// Summary measures for one sample, and association measures for two:
//
// - MOMENTS:   mean, variance, standard deviation, skewness, kurtosis,
//              coefficient of variation
// - ORDER:     median, mode, range
// - BIVARIATE: covariance, Pearson correlation
// - SUMMARY:   everything above for one sample, in one record
//
// CONVENTIONS:
// ------------
// Variance and covariance here are POPULATION quantities: the sum of squared
// (or cross-multiplied) deviations is divided by n, not n - 1. The regression
// engine's residual variance deliberately uses n - 2 instead; the two are not
// interchangeable.
//
// Skewness and kurtosis are the standardized third and fourth central
// moments, built on the same population standard deviation. Kurtosis is
// reported as EXCESS kurtosis (normal distribution = 0).
//
// =============================================================================

mod bivariate;
mod moments;
mod order;
mod summary;

pub use bivariate::{covariance, pearson_correlation};
pub use moments::{
    coefficient_of_variation, is_constant, kurtosis, mean, skewness, std_dev, variance,
};
pub use order::{median, mode, range};
pub use summary::{describe, DescriptiveSummary};
