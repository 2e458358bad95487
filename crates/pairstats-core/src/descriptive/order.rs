// =============================================================================
// Order Statistics
// =============================================================================

use std::collections::HashMap;

use crate::error::{PairStatsError, Result};
use crate::sample::Sample;

/// Middle value of the sorted sample.
///
/// For an even number of observations this is the average of the two
/// central values.
pub fn median(d: &Sample) -> Result<f64> {
    if d.is_empty() {
        return Err(PairStatsError::EmptyInput(
            "median of an empty sample".to_string(),
        ));
    }

    let mut sorted = d.to_vec();
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len();
    if n % 2 == 1 {
        Ok(sorted[n / 2])
    } else {
        Ok((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
    }
}

/// All values tied for the highest frequency.
///
/// Values are returned in order of first appearance, so
/// `[1, 2, 4, 3, 5, 3, 4]` gives `[4, 3]`. When every value occurs once,
/// every value is a mode.
pub fn mode(d: &Sample) -> Result<Vec<f64>> {
    if d.is_empty() {
        return Err(PairStatsError::EmptyInput(
            "mode of an empty sample".to_string(),
        ));
    }

    // Count by bit pattern; -0.0 is folded into 0.0
    let mut slot_of: HashMap<u64, usize> = HashMap::new();
    let mut counts: Vec<(f64, usize)> = Vec::new();
    for &v in d.iter() {
        let v = if v == 0.0 { 0.0 } else { v };
        match slot_of.get(&v.to_bits()) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                slot_of.insert(v.to_bits(), counts.len());
                counts.push((v, 1));
            }
        }
    }

    let max_count = counts.iter().map(|&(_, c)| c).max().unwrap_or(0);
    Ok(counts
        .into_iter()
        .filter(|&(_, c)| c == max_count)
        .map(|(v, _)| v)
        .collect())
}

/// Smallest and largest observation.
pub fn range(d: &Sample) -> Result<(f64, f64)> {
    if d.is_empty() {
        return Err(PairStatsError::EmptyInput(
            "range of an empty sample".to_string(),
        ));
    }
    Ok(d.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
        (lo.min(x), hi.max(x))
    }))
}
