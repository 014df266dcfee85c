use anyhow::{bail, Context};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use chess_referee::{referee, Cli, OutputFormat};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref())?;

    let config = cli.into_config().context("Failed to load configuration")?;
    let report = referee::run(&config)?;

    match config.format {
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Pretty => print!("{}", report),
    }

    if config.stop_on_invalid && report.refused() > 0 {
        bail!("Stopped at an invalid submission");
    }

    Ok(())
}

/// Logs go to stderr; stdout carries the report
fn init_tracing(level: Option<&str>) -> anyhow::Result<()> {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level)
            .with_context(|| format!("Invalid log filter {:?}", level))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}
