//! Property listing report.
//!
//! Reads a listing export (`property_listings.json`), keeps listings in the
//! requested state with at least the requested number of baths, and prints
//! them with their average price and average price per square foot.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use listings::core::summary::render;
use listings::error::ListingsError;
use listings::exit_codes;
use listings::io::config::{DEFAULT_CONFIG_FILE, load_config};
use listings::logging;
use listings::report::{ReportRequest, run_report};

#[derive(Parser)]
#[command(
    name = "listings",
    version,
    about = "Filter property listings by state and baths and report average prices",
    allow_negative_numbers = true
)]
struct Cli {
    /// State code to keep, e.g. CA.
    #[arg(value_name = "STATE_ABBREVIATION")]
    state: Option<String>,

    /// Minimum number of baths (inclusive).
    #[arg(value_name = "MIN_BATHS")]
    min_baths: Option<String>,

    /// Listing export to read (overrides `input_path` in the config).
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// TOML config file; missing means defaults.
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Skip lines that fail to parse instead of aborting.
    #[arg(long)]
    skip_invalid: bool,

    /// More diagnostics on stderr (-v info, -vv debug). `RUST_LOG` overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = usage_exit_code(&err);
            let _ = err.print();
            std::process::exit(code);
        }
    };
    logging::init(cli.verbose);
    let code = match run(cli) {
        Ok(()) => exit_codes::OK,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_code_for(&err)
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli.config)
        .with_context(|| format!("load config {}", cli.config.display()))?;
    let request = ReportRequest {
        state: cli.state,
        min_baths: cli.min_baths,
        input: cli.input,
        skip_invalid: cli.skip_invalid,
    };
    let summary = run_report(&config, &request)?;
    print!("{}", render(&summary).context("render report")?);
    Ok(())
}

/// `--help` and `--version` succeed; usage errors count as invalid arguments.
fn usage_exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() {
        exit_codes::INVALID
    } else {
        exit_codes::OK
    }
}

/// Typed pipeline errors carry their own code; anything else (config,
/// rendering) is reported as invalid.
fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<ListingsError>()
        .map_or(exit_codes::INVALID, ListingsError::exit_code)
}
