//! Headless simulation runner.
//!
//! Usage:
//!
//! ```text
//! nova-headless [CONFIG.toml] [OUTPUT.json|OUTPUT.csv]
//! ```
//!
//! Without a config file the default galaxy-scale configuration is used.
//! The report format follows the output extension; with no output path
//! the JSON report goes to stdout. Logging honours `RUST_LOG` (default
//! `info`).

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use nova_engine::{SimConfig, SimulationEngine, StepOutcome};
use nova_report::RunReport;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Emit a progress line roughly this many times per run.
const PROGRESS_LINES: u64 = 20;

enum OutputFormat {
    Json,
    Csv,
}

fn output_format(path: &Path) -> Result<OutputFormat> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => Ok(OutputFormat::Json),
        Some("csv") => Ok(OutputFormat::Csv),
        _ => bail!(
            "unsupported output extension for {} (expected .json or .csv)",
            path.display()
        ),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let config_path = args.next().map(PathBuf::from);
    let output_path = args.next().map(PathBuf::from);
    if args.next().is_some() {
        bail!("usage: nova-headless [CONFIG.toml] [OUTPUT.json|OUTPUT.csv]");
    }
    // Reject a bad output path before spending time on the run.
    let format = match &output_path {
        Some(path) => output_format(path)?,
        None => OutputFormat::Json,
    };

    let config = match &config_path {
        Some(path) => SimConfig::from_toml_file(path)?,
        None => SimConfig::default(),
    };
    let mut engine = SimulationEngine::new(config).context("invalid configuration")?;
    info!(
        config = ?config_path,
        intervals = engine.num_intervals(),
        seed = engine.seed(),
        "starting headless run"
    );

    let start = Instant::now();
    let every = (engine.num_intervals() / PROGRESS_LINES).max(1);
    while let StepOutcome::Advanced(result) = engine.step() {
        if result.interval.0 % every == 0 {
            info!(
                interval = result.interval.0,
                supernovae = result.supernovae,
                coverage_ge_1 = result.coverage.get(&1).copied().unwrap_or(0.0),
                living = ?result.civ_count,
                step_us = engine.last_metrics().total_us,
                "progress"
            );
        }
    }
    info!(
        elapsed_ms = start.elapsed().as_millis() as u64,
        supernovae = engine.supernovae(),
        "run finished"
    );

    let report = RunReport::from_engine(&engine);
    match &output_path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            match format {
                OutputFormat::Json => report.write_json(&mut writer)?,
                OutputFormat::Csv => report.write_csv(&mut writer)?,
            }
            writer.flush()?;
            info!(path = %path.display(), "report written");
        }
        None => report.write_json(io::stdout().lock())?,
    }
    Ok(())
}
