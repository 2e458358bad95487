// =============================================================================
// Critical Value Tables
// =============================================================================
//
// Printed statistical tables, as found at the back of any textbook, for a
// 5% significance level:
//
//   - Student's t, two-sided (α/2 = 0.025 in each tail)
//   - Fisher's F with ONE numerator degree of freedom (the single-predictor
//     regression case), indexed by the denominator degrees of freedom
//
// LOOKUP POLICY
// -------------
// Only a sparse set of df values is tabulated. A request for any other df is
// ROUNDED DOWN to the largest tabulated key that does not exceed it:
//
//     df = 11  →  key 10
//     df = 14  →  key 12
//     df = 500 →  key 120
//
// Rounding down is conservative: fewer df means a larger critical value, so
// a borderline statistic is never declared significant by accident. There is
// no interpolation and no rounding up. A df below the smallest key (i.e. 0)
// has no answer and fails with `OutOfRange`.
//
// The tables are `static` data: built at compile time, never mutated, safe
// to read from any thread.
//
// =============================================================================

use crate::error::{PairStatsError, Result};

/// Significance level every table in this module is printed for.
pub const TABLE_ALPHA: f64 = 0.05;

/// A sparse df → critical value mapping at a fixed significance level.
#[derive(Debug)]
pub struct CriticalValueTable {
    name: &'static str,
    entries: &'static [(u32, f64)],
}

/// Two-sided Student's t critical values, α = 0.05.
pub static T_TABLE: CriticalValueTable = CriticalValueTable {
    name: "Student t (two-sided, alpha = 0.05)",
    entries: &[
        (1, 12.71),
        (2, 4.303),
        (3, 3.182),
        (4, 2.776),
        (5, 2.571),
        (6, 2.447),
        (7, 2.365),
        (8, 2.306),
        (9, 2.262),
        (10, 2.228),
        (12, 2.179),
        (15, 2.131),
        (20, 2.086),
        (25, 2.060),
        (30, 2.042),
        (40, 2.021),
        (60, 2.000),
        (120, 1.980),
    ],
};

/// Fisher F critical values for df_model = 1, α = 0.05, keyed by df_resid.
pub static F_TABLE: CriticalValueTable = CriticalValueTable {
    name: "Fisher F (df_model = 1, alpha = 0.05)",
    entries: &[
        (1, 161.4),
        (2, 18.5),
        (3, 10.1),
        (4, 7.71),
        (5, 6.61),
        (6, 5.99),
        (7, 5.59),
        (8, 5.32),
        (9, 5.12),
        (10, 4.96),
        (12, 4.75),
        (15, 4.54),
        (20, 4.35),
        (25, 4.24),
        (30, 4.17),
        (40, 4.08),
        (60, 4.00),
        (120, 3.92),
    ],
};

impl CriticalValueTable {
    /// Human-readable description of the table.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Significance level of the table.
    pub fn alpha(&self) -> f64 {
        TABLE_ALPHA
    }

    /// Tabulated df keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries.iter().map(|&(k, _)| k)
    }

    /// Smallest df the table can answer for.
    pub fn min_df(&self) -> u32 {
        self.entries[0].0
    }

    /// The table key used for `df`: the largest key ≤ `df`.
    pub fn key_for(&self, df: u32) -> Result<u32> {
        self.entry_for(df).map(|(k, _)| k)
    }

    /// Critical value for `df`, rounding df down to a tabulated key.
    pub fn lookup(&self, df: u32) -> Result<f64> {
        let (key, value) = self.entry_for(df)?;
        tracing::trace!(table = self.name, df, key, value, "critical value lookup");
        Ok(value)
    }

    fn entry_for(&self, df: u32) -> Result<(u32, f64)> {
        // entries are sorted by key, so this counts the keys ≤ df
        let idx = self.entries.partition_point(|&(k, _)| k <= df);
        if idx == 0 {
            return Err(PairStatsError::OutOfRange {
                df,
                min: self.min_df(),
            });
        }
        Ok(self.entries[idx - 1])
    }
}

/// Tabulated two-sided t critical value at α = 0.05.
pub fn t_critical(df: u32) -> Result<f64> {
    T_TABLE.lookup(df)
}

/// Tabulated F critical value at α = 0.05 for one model degree of freedom.
pub fn f_critical(df_resid: u32) -> Result<f64> {
    F_TABLE.lookup(df_resid)
}

/// Degrees of freedom as a table index, saturating on huge samples.
pub(crate) fn df_from_count(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_keys() {
        assert_eq!(t_critical(7).unwrap(), 2.365);
        assert_eq!(t_critical(1).unwrap(), 12.71);
        assert_eq!(t_critical(120).unwrap(), 1.980);
        assert_eq!(f_critical(5).unwrap(), 6.61);
        assert_eq!(f_critical(120).unwrap(), 3.92);
    }

    #[test]
    fn test_rounds_down_not_up() {
        // 11 sits between keys 10 and 12: the answer is key 10
        assert_eq!(T_TABLE.key_for(11).unwrap(), 10);
        assert_eq!(t_critical(11).unwrap(), 2.228);
        assert_eq!(f_critical(11).unwrap(), 4.96);
    }

    #[test]
    fn test_every_gap_between_keys() {
        for table in [&T_TABLE, &F_TABLE] {
            let keys: Vec<u32> = table.keys().collect();
            for pair in keys.windows(2) {
                let (lo, hi) = (pair[0], pair[1]);
                let lo_value = table.lookup(lo).unwrap();
                // Every df in [lo, hi) resolves to `lo`
                for df in lo..hi {
                    assert_eq!(table.key_for(df).unwrap(), lo, "{} df={}", table.name(), df);
                    assert_eq!(table.lookup(df).unwrap(), lo_value);
                }
                // ...and the next key resolves to itself
                assert_eq!(table.key_for(hi).unwrap(), hi);
                assert_ne!(table.lookup(hi).unwrap(), lo_value);
            }
        }
    }

    #[test]
    fn test_large_df_uses_last_key() {
        assert_eq!(T_TABLE.key_for(121).unwrap(), 120);
        assert_eq!(t_critical(500).unwrap(), 1.980);
        assert_eq!(f_critical(u32::MAX).unwrap(), 3.92);
    }

    #[test]
    fn test_zero_df_is_out_of_range() {
        assert_eq!(
            t_critical(0).unwrap_err(),
            PairStatsError::OutOfRange { df: 0, min: 1 }
        );
        assert!(matches!(f_critical(0), Err(PairStatsError::OutOfRange { .. })));
    }

    #[test]
    fn test_tables_decrease_with_df() {
        for table in [&T_TABLE, &F_TABLE] {
            let values: Vec<f64> = table.keys().map(|k| table.lookup(k).unwrap()).collect();
            assert!(values.windows(2).all(|w| w[0] > w[1]), "{}", table.name());
        }
        assert_eq!(T_TABLE.alpha(), 0.05);
    }
}
