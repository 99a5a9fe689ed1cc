//! Place invariant auditor for Petri net simulation logs
//!
//! Usage: petri-invariant [LOG_PATH] [options]

use anyhow::Context;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use petri_invariant::{LogScanner, PlacePattern, ScanReport, VerifierConfig};

mod cli;

use cli::output::OutputFormat;

#[derive(Parser)]
#[command(name = "petri-invariant")]
#[command(about = "Checks that P0 + P1 + P2 = 3 on every line of a Petri net log", long_about = None)]
struct Cli {
    /// Log file to audit (default: petri_log.txt)
    log_path: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "human")]
    format: OutputFormat,

    /// Verbose output on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // stdout carries the report, so diagnostics go to stderr
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config = VerifierConfig::with_log_path(cli.log_path);

    let report = match cli.format {
        OutputFormat::Human => {
            petri_invariant::verify(&config.log_path)
                .with_context(|| format!("verification of {} failed", config.log_path.display()))?;
            return Ok(());
        }
        OutputFormat::Json => cli::output::format_json(&scan(&config)?)?,
        OutputFormat::Markdown => cli::output::format_markdown(&scan(&config)?),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    out.write_all(report.as_bytes()).context("failed to write report")?;

    // Violations are a finding, not a failure: exit code stays 0
    Ok(())
}

/// Scan without streaming, for the report formats
fn scan(config: &VerifierConfig) -> anyhow::Result<ScanReport> {
    let scanner = LogScanner::new(PlacePattern::new()?);
    scanner
        .scan_path(&config.log_path, |_| Ok(()))
        .with_context(|| format!("verification of {} failed", config.log_path.display()))
}
