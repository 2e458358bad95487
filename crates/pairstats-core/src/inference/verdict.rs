// =============================================================================
// Significance Verdicts
// =============================================================================

/// How an empirical statistic is compared with its critical value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ThresholdPolicy {
    /// `statistic > critical`; the sign of the statistic matters.
    Signed,
    /// `|statistic| > critical`; the usual two-sided reading.
    Absolute,
}

impl ThresholdPolicy {
    /// Does `statistic` exceed `critical` under this policy?
    ///
    /// Equality is never significant.
    pub fn exceeds(self, statistic: f64, critical: f64) -> bool {
        match self {
            ThresholdPolicy::Signed => statistic > critical,
            ThresholdPolicy::Absolute => statistic.abs() > critical,
        }
    }
}

/// Outcome of comparing one empirical statistic with one critical value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TestVerdict {
    /// The empirical statistic, exactly as it was passed in
    pub statistic: f64,
    /// Critical value it was compared with
    pub critical: f64,
    /// Did the statistic exceed the critical value?
    pub significant: bool,
}

impl TestVerdict {
    /// Compare `statistic` with `critical` under `policy`.
    pub fn decide(statistic: f64, critical: f64, policy: ThresholdPolicy) -> Self {
        Self {
            statistic,
            critical,
            significant: policy.exceeds(statistic, critical),
        }
    }
}

/// Marker for summary tables: `"*"` if significant, `""` otherwise.
pub fn significance_marker(verdict: &TestVerdict) -> &'static str {
    if verdict.significant {
        "*"
    } else {
        ""
    }
}
