// =============================================================================
// Moments
// =============================================================================
//
// All moments are taken about the sample mean and divided by n:
//
//     m_k = Σ(xᵢ - x̄)^k / n
//
//     variance = m_2
//     skewness = m_3 / s³          (s = sqrt(m_2))
//     kurtosis = m_4 / s⁴ - 3      (excess)
//
// =============================================================================

use crate::error::{PairStatsError, Result};
use crate::sample::Sample;

/// Arithmetic mean.
///
/// Fails with `EmptyInput` on an empty sample.
pub fn mean(d: &Sample) -> Result<f64> {
    d.values()
        .mean()
        .ok_or_else(|| PairStatsError::EmptyInput("mean of an empty sample".to_string()))
}

/// k-th central moment with divisor n.
fn central_moment(d: &Sample, k: i32) -> Result<f64> {
    let m = mean(d)?;
    let n = d.len() as f64;
    Ok(d.iter().map(|&x| (x - m).powi(k)).sum::<f64>() / n)
}

/// Population variance: average squared deviation from the mean.
///
/// A single observation has variance 0.
pub fn variance(d: &Sample) -> Result<f64> {
    central_moment(d, 2)
}

/// Population standard deviation, `sqrt(variance)`.
pub fn std_dev(d: &Sample) -> Result<f64> {
    variance(d).map(f64::sqrt)
}

/// Coefficient of variation, `std_dev / mean`.
///
/// Undefined (`DegenerateInput`) when the mean is exactly zero.
pub fn coefficient_of_variation(d: &Sample) -> Result<f64> {
    let m = mean(d)?;
    if m == 0.0 {
        return Err(PairStatsError::DegenerateInput(
            "coefficient of variation is undefined for a zero mean".to_string(),
        ));
    }
    Ok(std_dev(d)? / m)
}

/// Standardized third central moment.
///
/// Positive values mean a longer right tail. Undefined when the sample is
/// constant.
pub fn skewness(d: &Sample) -> Result<f64> {
    let s = nonzero_std_dev(d, "skewness")?;
    Ok(central_moment(d, 3)? / s.powi(3))
}

/// Excess kurtosis: standardized fourth central moment minus 3.
///
/// Undefined when the sample is constant.
pub fn kurtosis(d: &Sample) -> Result<f64> {
    let s = nonzero_std_dev(d, "kurtosis")?;
    Ok(central_moment(d, 4)? / s.powi(4) - 3.0)
}

/// True when every observation equals the first one.
///
/// Decided on the raw values, not on a computed variance: the mean of a
/// constant like 0.1 is off by an ulp, which leaves a tiny nonzero variance.
/// An empty sample is trivially constant.
pub fn is_constant(d: &Sample) -> bool {
    match d.iter().next() {
        Some(&first) => d.iter().all(|&v| v == first),
        None => true,
    }
}

fn nonzero_std_dev(d: &Sample, what: &str) -> Result<f64> {
    let s = std_dev(d)?;
    if is_constant(d) {
        return Err(PairStatsError::DegenerateInput(format!(
            "{} is undefined for a sample with zero standard deviation",
            what
        )));
    }
    Ok(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn sample(values: &[f64]) -> Sample {
        Sample::try_from(values).unwrap()
    }

    #[test]
    fn test_mean() {
        assert_abs_diff_eq!(mean(&sample(&[1.0, 2.0, 3.0, 4.0, 5.0])).unwrap(), 3.0);
        assert_abs_diff_eq!(
            mean(&sample(&[1.0, 2.0, 4.0, 3.0, 5.0, 3.0, 4.0])).unwrap(),
            3.142857,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_mean_empty() {
        let empty = sample(&[]);
        assert!(matches!(mean(&empty), Err(PairStatsError::EmptyInput(_))));
        assert!(matches!(variance(&empty), Err(PairStatsError::EmptyInput(_))));
    }

    #[test]
    fn test_variance_is_population() {
        // Σ(x - 5)² = 32, divided by n = 8 (not 7)
        let d = sample(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert_abs_diff_eq!(variance(&d).unwrap(), 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(std_dev(&d).unwrap(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_variance_single_observation() {
        assert_eq!(variance(&sample(&[5.0])).unwrap(), 0.0);
    }

    #[test]
    fn test_coefficient_of_variation() {
        let d = sample(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert_abs_diff_eq!(coefficient_of_variation(&d).unwrap(), 0.4, epsilon = 1e-12);

        let zero_mean = sample(&[-1.0, 1.0]);
        assert!(matches!(
            coefficient_of_variation(&zero_mean),
            Err(PairStatsError::DegenerateInput(_))
        ));
    }

    #[test]
    fn test_skewness_sign() {
        let symmetric = sample(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_abs_diff_eq!(skewness(&symmetric).unwrap(), 0.0, epsilon = 1e-12);

        let right_tailed = sample(&[1.0, 1.0, 1.0, 2.0, 10.0]);
        assert!(skewness(&right_tailed).unwrap() > 0.0);

        let d = sample(&[1.0, 2.0, 4.0, 3.0, 5.0, 3.0, 4.0]);
        assert_abs_diff_eq!(skewness(&d).unwrap(), -0.271677, epsilon = 1e-6);
    }

    #[test]
    fn test_kurtosis_is_excess() {
        // Two-point symmetric distribution: m4 / s⁴ = 1, so excess = -2
        let d = sample(&[-1.0, 1.0, -1.0, 1.0]);
        assert_abs_diff_eq!(kurtosis(&d).unwrap(), -2.0, epsilon = 1e-12);

        let d = sample(&[1.0, 2.0, 4.0, 3.0, 5.0, 3.0, 4.0]);
        assert_abs_diff_eq!(kurtosis(&d).unwrap(), -0.876039, epsilon = 1e-6);
    }

    #[test]
    fn test_constant_sample_shape_is_degenerate() {
        let constant = sample(&[3.0, 3.0, 3.0]);
        assert!(matches!(skewness(&constant), Err(PairStatsError::DegenerateInput(_))));
        assert!(matches!(kurtosis(&constant), Err(PairStatsError::DegenerateInput(_))));
        // CV is still defined: 0 / 3
        assert_eq!(coefficient_of_variation(&constant).unwrap(), 0.0);
    }

    #[test]
    fn test_inexact_constant_shape_is_degenerate() {
        // 0.7 has no exact binary form, so the computed variance is not exactly zero
        let constant = sample(&[0.7; 7]);
        assert!(is_constant(&constant));
        assert!(matches!(skewness(&constant), Err(PairStatsError::DegenerateInput(_))));
        assert!(matches!(kurtosis(&constant), Err(PairStatsError::DegenerateInput(_))));
    }

    #[test]
    fn test_is_constant() {
        assert!(is_constant(&sample(&[0.1, 0.1, 0.1])));
        assert!(is_constant(&sample(&[4.0])));
        assert!(!is_constant(&sample(&[0.1, 0.1, 0.2])));
    }
}
