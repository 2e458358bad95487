// Property tests over randomly generated samples.

use pairstats_core::descriptive::{mean, pearson_correlation, std_dev, variance};
use pairstats_core::tables::{T_TABLE, F_TABLE};
use pairstats_core::{PairedSample, RegressionModel, Sample};
use proptest::prelude::*;

fn finite_values(min_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e3..1.0e3f64, min_len..60)
}

fn paired_values() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (3usize..60).prop_flat_map(|n| {
        (
            prop::collection::vec(-1.0e3..1.0e3f64, n),
            prop::collection::vec(-1.0e3..1.0e3f64, n),
        )
    })
}

proptest! {
    #[test]
    fn variance_is_non_negative(values in finite_values(1)) {
        let d = Sample::new(values).unwrap();
        let var = variance(&d).unwrap();
        prop_assert!(var >= 0.0);
        prop_assert_eq!(std_dev(&d).unwrap(), var.sqrt());
    }

    #[test]
    fn mean_lies_within_range(values in finite_values(1)) {
        let lo = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let hi = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let m = mean(&Sample::new(values).unwrap()).unwrap();
        prop_assert!(m >= lo - 1e-9 && m <= hi + 1e-9);
    }

    #[test]
    fn correlation_is_bounded((x, y) in paired_values()) {
        let x = Sample::new(x).unwrap();
        let y = Sample::new(y).unwrap();
        if let Ok(r) = pearson_correlation(&x, &y) {
            prop_assert!((-1.0..=1.0).contains(&r));
        }
    }

    #[test]
    fn sum_of_squares_decomposes((x, y) in paired_values()) {
        let data = PairedSample::from_vecs(x, y).unwrap();
        if let Ok(model) = RegressionModel::fit(&data) {
            let tss = model.tss();
            let lhs = model.ess() + model.rss();
            prop_assert!((tss - lhs).abs() <= 1e-9 * tss.max(1.0));
            // OLS can never do worse than predicting the mean
            prop_assert!(model.rss() <= tss * (1.0 + 1e-9) + 1e-9);
        }
    }

    #[test]
    fn fitting_is_deterministic((x, y) in paired_values()) {
        let data = PairedSample::from_vecs(x, y).unwrap();
        if let (Ok(a), Ok(b)) = (RegressionModel::fit(&data), RegressionModel::fit(&data)) {
            prop_assert_eq!(a.slope(), b.slope());
            prop_assert_eq!(a.intercept(), b.intercept());
            prop_assert_eq!(a.residuals(), b.residuals());
        }
    }

    #[test]
    fn table_lookup_never_rounds_up(df in 1u32..1000) {
        for table in [&T_TABLE, &F_TABLE] {
            let key = table.key_for(df).unwrap();
            prop_assert!(key <= df);
            // no tabulated key lies strictly between the chosen key and df
            prop_assert!(table.keys().all(|k| k <= key || k > df));
        }
    }
}
