// =============================================================================
// Bivariate Measures
// =============================================================================
//
//     cov(x, y) = Σ(xᵢ - x̄)(yᵢ - ȳ) / n
//     r         = cov(x, y) / (s_x · s_y)
//
// Both require index-aligned samples of the same length.
//
// =============================================================================

use crate::error::{PairStatsError, Result};
use crate::sample::Sample;

use super::moments::{is_constant, mean, std_dev};

/// Population covariance of two aligned samples.
///
/// Fails with `LengthMismatch` if the samples differ in length and
/// `EmptyInput` if they are empty.
pub fn covariance(d: &Sample, other: &Sample) -> Result<f64> {
    if d.len() != other.len() {
        return Err(PairStatsError::LengthMismatch {
            left: d.len(),
            right: other.len(),
        });
    }
    let mean_x = mean(d)?;
    let mean_y = mean(other)?;
    let n = d.len() as f64;

    let cross: f64 = d
        .iter()
        .zip(other.iter())
        .map(|(&x, &y)| (x - mean_x) * (y - mean_y))
        .sum();
    Ok(cross / n)
}

/// Pearson correlation coefficient.
///
/// Undefined (`DegenerateInput`) if either sample is constant. The result is
/// clamped to `[-1, 1]` so rounding cannot push `1 - r²` below zero.
pub fn pearson_correlation(d: &Sample, other: &Sample) -> Result<f64> {
    let cov = covariance(d, other)?;
    let std_x = std_dev(d)?;
    let std_y = std_dev(other)?;

    if is_constant(d) || is_constant(other) {
        return Err(PairStatsError::DegenerateInput(
            "correlation is undefined when a sample has zero standard deviation".to_string(),
        ));
    }

    Ok((cov / (std_x * std_y)).clamp(-1.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn sample(values: &[f64]) -> Sample {
        Sample::try_from(values).unwrap()
    }

    #[test]
    fn test_covariance_scenario() {
        let x = sample(&[1.0, 2.0, 4.0, 3.0, 5.0, 3.0, 4.0]);
        let y = sample(&[3.0, 7.0, 15.0, 10.0, 17.0, 10.0, 15.0]);
        // Σ(x - x̄)(y - ȳ) = 40, n = 7
        assert_abs_diff_eq!(covariance(&x, &y).unwrap(), 40.0 / 7.0, epsilon = 1e-12);
        assert_abs_diff_eq!(pearson_correlation(&x, &y).unwrap(), 0.991189, epsilon = 1e-6);
    }

    #[test]
    fn test_covariance_with_itself_is_variance() {
        let x = sample(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert_abs_diff_eq!(covariance(&x, &x).unwrap(), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_covariance_length_mismatch() {
        let x = sample(&[1.0, 2.0, 3.0]);
        let y = sample(&[1.0, 2.0]);
        assert_eq!(
            covariance(&x, &y).unwrap_err(),
            PairStatsError::LengthMismatch { left: 3, right: 2 }
        );
        assert!(matches!(
            pearson_correlation(&x, &y),
            Err(PairStatsError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn test_perfect_negative_correlation() {
        let x = sample(&[1.0, 2.0, 3.0, 4.0]);
        let y = sample(&[8.0, 6.0, 4.0, 2.0]);
        assert_abs_diff_eq!(pearson_correlation(&x, &y).unwrap(), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_correlation_with_constant_is_degenerate() {
        let x = sample(&[1.0, 2.0, 3.0]);
        let y = sample(&[5.0, 5.0, 5.0]);
        assert!(matches!(
            pearson_correlation(&x, &y),
            Err(PairStatsError::DegenerateInput(_))
        ));
        // Covariance itself is fine
        assert_eq!(covariance(&x, &y).unwrap(), 0.0);
    }

    #[test]
    fn test_correlation_with_inexact_constant_is_degenerate() {
        let x = sample(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
        let y = sample(&[0.7; 7]);
        assert!(matches!(
            pearson_correlation(&x, &y),
            Err(PairStatsError::DegenerateInput(_))
        ));
        assert!(matches!(
            pearson_correlation(&y, &x),
            Err(PairStatsError::DegenerateInput(_))
        ));
    }
}
