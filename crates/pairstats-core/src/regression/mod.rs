// =============================================================================
// Simple Linear Regression
// =============================================================================
//
// Ordinary least squares with one predictor:
//
//     y = a + b·x + ε
//
// THE FIT
// -------
// Minimizing Σ(yᵢ - a - b·xᵢ)² has a closed-form answer, no iteration needed:
//
//     b = cov(x, y) / var(x)          (population cov and var; the n's cancel)
//     a = ȳ - b·x̄
//
//     ŷᵢ = a + b·xᵢ                    (fitted values)
//     eᵢ = yᵢ - ŷᵢ                     (residuals)
//
// HOW GOOD IS THE FIT?
// --------------------
// The variation of y around its mean splits into an explained and an
// unexplained part:
//
//     TSS = Σ(yᵢ - ȳ)²      total
//     RSS = Σeᵢ²            residual (unexplained)
//     ESS = TSS - RSS       explained by the line
//
//     R² = ESS / TSS        share of variation explained, in [0, 1]
//
// INFERENCE
// ---------
// The noise variance is estimated with n - 2 degrees of freedom (two
// parameters were estimated), NOT with the population divisor n:
//
//     s² = RSS / (n - 2)
//     Sxx = Σ(xᵢ - x̄)²
//
//     se(b) = √(s² / Sxx)
//     se(a) = √(s² · (1/n + x̄²/Sxx))
//
//     t_a = a / se(a),  t_b = b / se(b)         compared with t(n - 2)
//     F   = (ESS / 1) / (RSS / (n - 2))         compared with F(1, n - 2)
//
// With a single predictor, F = t_b² and t_b equals the correlation t-statistic.
//
// =============================================================================

mod batch;
mod model;

pub use batch::fit_many;
pub use model::{ConfidenceIntervals, ParameterSignificance, RegressionModel, StandardErrors};
