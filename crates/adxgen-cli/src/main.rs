#![forbid(unsafe_code)]
#![deny(
    rust_2018_idioms,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo
)]

use adxgen::generator::RowSampler;
use adxgen::io::generate_report;
use anyhow::{Context, Result};
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Default number of data rows.
const DEFAULT_ROWS: u64 = 500_000;

/// Default destination path.
const DEFAULT_OUT: &str = "test-data-500k.csv";

#[derive(Parser, Debug)]
#[command(
    name = "adxgen-cli",
    about = "Synthetic Ad Exchange report fixture generator",
    long_about = "Synthetic Ad Exchange report fixture generator.\n\nWrites a CSV file of simulated ad-exchange metrics (fixed 18-column schema, independent uniform draws per row) for use as test fixture data.",
    version = env!("CARGO_PKG_VERSION"),
    disable_help_subcommand = true
)]
struct Cli {
    /// Number of data rows to generate (>0)
    #[arg(long, default_value_t = DEFAULT_ROWS, value_parser = clap::value_parser!(u64).range(1..))]
    rows: u64,

    /// Output CSV path (created or truncated)
    #[arg(long, default_value = DEFAULT_OUT)]
    out: PathBuf,

    /// Seed for reproducible output; omit for OS entropy.
    /// Note the date window still tracks the wall clock.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    info!(rows = cli.rows, out = %cli.out.display(), seed = ?cli.seed, "generating report fixture");

    ensure_parent_dir(&cli.out)?;
    let mut sampler = RowSampler::new(rng).context("build row sampler")?;
    let stats = generate_report(&cli.out, &mut sampler, cli.rows)
        .with_context(|| format!("writing report to {}", cli.out.display()))?;

    println!(
        "Wrote {} rows → {} ({:.2} MB)",
        stats.rows,
        cli.out.display(),
        stats.bytes as f64 / 1024.0 / 1024.0
    );
    Ok(())
}

/// Initialize tracing with an env-driven filter (default INFO).
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer().with_target(false).with_level(true).compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

/// Ensure the parent directory for a file exists.
fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating parent directory {}", dir.display()))?;
        }
    }
    Ok(())
}
