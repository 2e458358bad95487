// =============================================================================
// PairStats Command-Line Front-End
// =============================================================================
//
// Thin I/O layer around `pairstats-core`:
//
//   CSV file ──loader──▶ PairedSample ──core::analyze──▶ AnalysisReport
//                                                          │
//                                          report (text / JSON) ◀─┘
//
// No statistics are computed here. If a number appears in a report, it was
// produced by the core library.
//
// =============================================================================

pub mod cli;
pub mod loader;
pub mod report;

use anyhow::{Context, Result};
use pairstats_core::analyze;

use crate::cli::{Cli, OutputFormat};

/// Load the input, analyze it and render the report in the requested format.
pub fn run(cli: &Cli) -> Result<String> {
    let data = loader::load_csv(&cli.input, cli.delimiter, &cli.x_column, &cli.y_column)?;
    tracing::info!(
        n = data.len(),
        x = %cli.x_column,
        y = %cli.y_column,
        "loaded paired sample"
    );

    let analysis = analyze(&data, &cli.analysis_config())
        .with_context(|| format!("cannot analyze {}", cli.input.display()))?;

    let label = cli.label();
    match cli.format {
        OutputFormat::Text => Ok(report::render_text(&label, &analysis)),
        OutputFormat::Json => report::render_json(&label, &analysis),
    }
}
