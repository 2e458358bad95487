//! Command-line interface definition

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use pairstats_core::AnalysisConfig;

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text report
    Text,
    /// Pretty-printed JSON record
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "pairstats")]
#[command(version)]
#[command(about = "Correlation and linear regression report for two CSV columns", long_about = None)]
pub struct Cli {
    /// CSV file with a header row
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Column holding the explanatory variable X
    #[arg(short = 'x', long = "x-column", default_value = "gdp_value")]
    pub x_column: String,

    /// Column holding the response variable Y
    #[arg(short = 'y', long = "y-column", default_value = "mcftr_index")]
    pub y_column: String,

    /// Field delimiter (a single ASCII character)
    #[arg(short = 'd', long = "delimiter", default_value_t = ';')]
    pub delimiter: char,

    /// Significance level for the F quantile and confidence intervals
    #[arg(long = "alpha", default_value_t = 0.05)]
    pub alpha: f64,

    /// |r| above this is reported as a strong correlation
    #[arg(long = "strong-correlation", default_value_t = 0.7)]
    pub strong_correlation: f64,

    /// Report format
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write the report to this file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Title shown in the report (defaults to "X → Y" using the column names)
    #[arg(long = "label")]
    pub label: Option<String>,

    /// Enable debug tracing on stderr
    #[arg(long = "debug")]
    pub debug: bool,
}

impl Cli {
    /// Analysis options taken from the command line.
    pub fn analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig {
            alpha: self.alpha,
            strong_correlation: self.strong_correlation,
        }
    }

    /// Report title.
    pub fn label(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| format!("{} → {}", self.x_column, self.y_column))
    }
}
