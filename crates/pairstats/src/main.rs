use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use pairstats::{cli::Cli, run};
use tracing_subscriber::EnvFilter;

/// Initialize tracing on stderr: everything with --debug, otherwise RUST_LOG if set
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    } else if let Ok(filter) = EnvFilter::try_from_default_env() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let rendered = run(&cli)?;

    match &cli.output {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("cannot write report to {}", path.display()))?;
            eprintln!("Report saved to {}", path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}
