// =============================================================================
// Samples
// =============================================================================
//
// The two input containers of the library:
//
//   - Sample:       one ordered sequence of finite real numbers
//   - PairedSample: two Samples of equal length, index-aligned (xᵢ ↔ yᵢ)
//
// Both are validated once, at construction, and are immutable afterwards.
// Everything downstream (descriptive statistics, hypothesis tests, the
// regression engine) can therefore assume finite data and, for pairs,
// matching lengths.
//
// =============================================================================

use ndarray::Array1;

use crate::error::{PairStatsError, Result};

// =============================================================================
// Sample
// =============================================================================

/// An ordered, immutable sequence of finite `f64` observations.
///
/// An empty sample is allowed to exist; statistics that need data
/// report `EmptyInput` when handed one.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Sample {
    values: Array1<f64>,
}

impl Sample {
    /// Build a sample, rejecting NaN and infinite values.
    pub fn new(values: Vec<f64>) -> Result<Self> {
        Self::from_array(Array1::from_vec(values))
    }

    /// Build a sample from an existing ndarray vector.
    pub fn from_array(values: Array1<f64>) -> Result<Self> {
        if let Some((i, v)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(PairStatsError::InvalidValue(format!(
                "observation {} is not finite ({})",
                i, v
            )));
        }
        Ok(Self { values })
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Borrow the underlying vector.
    pub fn values(&self) -> &Array1<f64> {
        &self.values
    }

    /// Iterate over the observations in order.
    pub fn iter(&self) -> impl Iterator<Item = &f64> + '_ {
        self.values.iter()
    }

    /// Copy the observations into a plain `Vec`.
    pub fn to_vec(&self) -> Vec<f64> {
        self.values.to_vec()
    }
}

impl TryFrom<Vec<f64>> for Sample {
    type Error = PairStatsError;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::new(values)
    }
}

impl TryFrom<&[f64]> for Sample {
    type Error = PairStatsError;

    fn try_from(values: &[f64]) -> Result<Self> {
        Self::new(values.to_vec())
    }
}

// =============================================================================
// PairedSample
// =============================================================================

/// Two equal-length samples, aligned by index.
///
/// `x` is the explanatory variable and `y` the response when the pair is
/// handed to the regression engine.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PairedSample {
    x: Sample,
    y: Sample,
}

impl PairedSample {
    /// Pair two samples; fails with `LengthMismatch` if their lengths differ.
    pub fn new(x: Sample, y: Sample) -> Result<Self> {
        if x.len() != y.len() {
            return Err(PairStatsError::LengthMismatch {
                left: x.len(),
                right: y.len(),
            });
        }
        Ok(Self { x, y })
    }

    /// Validate and pair two raw vectors in one step.
    pub fn from_vecs(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        Self::new(Sample::new(x)?, Sample::new(y)?)
    }

    /// Number of (x, y) pairs.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn x(&self) -> &Sample {
        &self.x
    }

    pub fn y(&self) -> &Sample {
        &self.y
    }
}

// =============================================================================
// Tests
// =============================================================================
