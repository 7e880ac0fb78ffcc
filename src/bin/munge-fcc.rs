//! CLI tool to munge the CDBS facility table into guide source files.
//!
//! Usage:
//!   munge-fcc facility.dat
//!   munge-fcc facility.dat --out-dir generated -v
//!   munge-fcc < facility.dat

use clap::Parser;
use fcc_munge::{Config, MungeError, munge};
use std::path::PathBuf;
use std::process;
use tracing::Level;
use tracing_subscriber::fmt;

/// Build uscallsign.hash and usstationdata.h from facility.dat.
///
/// Reads standard input when no input file is given.
#[derive(Parser)]
#[command(name = "munge-fcc")]
struct Cli {
    /// Facility table (pipe-delimited lines)
    input: Option<PathBuf>,

    /// YAML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for the generated files (overrides the config)
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Log rejected lines, duplicates and unresolved values on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    fmt::Subscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), MungeError> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(out_dir) = &cli.out_dir {
        config.out_dir = out_dir.clone();
    }

    let stats = munge(&config, cli.input.as_deref())?;

    if cli.verbose {
        eprintln!(
            "Processed {} lines -> {} stations ({} rejected, {} duplicates)",
            stats.lines, stats.accepted, stats.rejected, stats.duplicates
        );
        eprintln!("Keywords: {}", config.keyword_path().display());
        eprintln!("Stations: {}", config.table_path().display());
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(e.exit_code());
    }
}
