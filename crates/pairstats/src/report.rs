//! Report rendering: text block or JSON record for one `AnalysisReport`

use std::fmt;

use anyhow::{Context, Result};
use pairstats_core::inference::significance_marker;
use pairstats_core::AnalysisReport;
use serde::Serialize;

const RULE: &str = "==================================================";

/// Text rendering of an analysis, via `Display`.
pub struct TextReport<'a> {
    pub label: &'a str,
    pub report: &'a AnalysisReport,
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.report;
        let corr = &r.correlation;
        let confidence = (1.0 - r.alpha) * 100.0;

        writeln!(f, "{}", RULE)?;
        writeln!(f, "Model summary ({})", self.label)?;
        writeln!(f, "{}", RULE)?;
        writeln!(f, "Observations: {}", r.n)?;
        writeln!(f)?;

        writeln!(f, "1. Descriptive statistics:")?;
        for (name, s) in [("X", &r.x_summary), ("Y", &r.y_summary)] {
            writeln!(
                f,
                "   {}: mean={:.3}, std={:.3}, median={:.3}, min={:.3}, max={:.3}",
                name, s.mean, s.std_dev, s.median, s.min, s.max
            )?;
        }
        writeln!(f)?;

        writeln!(f, "2. Correlation:")?;
        writeln!(
            f,
            "   r = {:.3} → {} relationship",
            corr.r,
            r.correlation_strength.label()
        )?;
        writeln!(
            f,
            "   t_emp={:.3}, t_cr={:.3}, df={}, significant={}",
            corr.verdict.statistic, corr.verdict.critical, corr.df, corr.verdict.significant
        )?;
        writeln!(f)?;

        writeln!(f, "3. Regression equation:")?;
        writeln!(f, "   Y = {:.3} + {:.3} * X", r.intercept, r.slope)?;
        writeln!(
            f,
            "   R² = {:.3} (explains {:.1}% of the variation in Y)",
            r.r_squared,
            r.r_squared * 100.0
        )?;
        writeln!(f)?;

        writeln!(f, "4. F-test (alpha = {}):", r.alpha)?;
        writeln!(
            f,
            "   F_emp={:.3}, F_cr={:.3}, significant={}",
            r.f_test.statistic, r.f_test.critical, r.f_test.significant
        )?;
        writeln!(
            f,
            "   table check: F_cr={:.3}, significant={}",
            r.model_significance.critical, r.model_significance.significant
        )?;
        writeln!(f)?;

        writeln!(f, "5. t-tests (df = {}):", corr.df)?;
        for (name, signed, absolute) in [
            ("constant a", &r.intercept_t_test, &r.parameter_significance.intercept),
            ("coefficient b", &r.slope_t_test, &r.parameter_significance.slope),
        ] {
            writeln!(
                f,
                "   • {}: t_emp={:.3}, t_cr={:.3}, significant={} (|t| check: {}){}",
                name,
                signed.statistic,
                signed.critical,
                signed.significant,
                absolute.significant,
                significance_marker(absolute)
            )?;
        }
        writeln!(f)?;

        writeln!(f, "6. Confidence intervals ({:.0}%):", confidence)?;
        let ci = &r.confidence_intervals;
        writeln!(f, "   a: [{:.3}, {:.3}]", ci.intercept.0, ci.intercept.1)?;
        writeln!(f, "   b: [{:.3}, {:.3}]", ci.slope.0, ci.slope.1)?;
        writeln!(f)?;

        writeln!(f, "7. Interpretation:")?;
        writeln!(
            f,
            "   A one-unit increase in X changes Y by {:.3} on average.",
            r.slope
        )?;
        writeln!(f, "{}", RULE)
    }
}

/// Render the text report.
pub fn render_text(label: &str, report: &AnalysisReport) -> String {
    TextReport { label, report }.to_string()
}

#[derive(Serialize)]
struct JsonReport<'a> {
    label: &'a str,
    #[serde(flatten)]
    report: &'a AnalysisReport,
}

/// Render the report as pretty-printed JSON.
pub fn render_json(label: &str, report: &AnalysisReport) -> Result<String> {
    serde_json::to_string_pretty(&JsonReport { label, report })
        .context("cannot serialize report to JSON")
}
