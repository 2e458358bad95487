// =============================================================================
// Batch Fitting
// =============================================================================
//
// Independent fits share nothing, so they run on the rayon thread pool with
// no synchronization beyond collecting the results (in input order).
//
// =============================================================================

use rayon::prelude::*;

use crate::error::Result;
use crate::sample::PairedSample;

use super::model::RegressionModel;

/// Fit one regression per paired sample, in parallel.
///
/// A failure in one fit does not affect the others; each slot carries its
/// own `Result`.
pub fn fit_many(samples: &[PairedSample]) -> Vec<Result<RegressionModel>> {
    tracing::debug!(count = samples.len(), "fitting regressions in parallel");
    samples.par_iter().map(RegressionModel::fit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PairStatsError;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_fit_many_preserves_order_and_isolates_failures() {
        let samples: Vec<PairedSample> = (1..=20)
            .map(|slope| {
                let x: Vec<f64> = (0..10).map(f64::from).collect();
                let y: Vec<f64> = x
                    .iter()
                    .enumerate()
                    .map(|(i, &xi)| f64::from(slope) * xi + if i % 2 == 0 { 0.5 } else { -0.5 })
                    .collect();
                PairedSample::from_vecs(x, y).unwrap()
            })
            .chain(std::iter::once(
                PairedSample::from_vecs(vec![1.0, 1.0, 1.0], vec![1.0, 2.0, 3.0]).unwrap(),
            ))
            .collect();

        let results = fit_many(&samples);
        assert_eq!(results.len(), 21);

        for (i, result) in results.iter().take(20).enumerate() {
            let model = result.as_ref().unwrap();
            assert_abs_diff_eq!(model.slope(), (i + 1) as f64, epsilon = 0.2);
        }
        assert!(matches!(results[20], Err(PairStatsError::DegenerateInput(_))));
    }

    #[test]
    fn test_fit_many_empty() {
        assert!(fit_many(&[]).is_empty());
    }
}
