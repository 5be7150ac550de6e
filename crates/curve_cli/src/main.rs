//! curve - command-line front end for the discount curve engine
//!
//! Loads anchor points from CSV files and answers rate queries.
//!
//! # Commands
//!
//! - `curve nodes --points <file>` - Curve table with zero and forward rates
//! - `curve discount --points <file> --date <d>...` - Discount factors and zero rates
//! - `curve forward --points <file> --period <start:end>...` - Forward rates
//! - `curve daily --points <file> --window <start:end>` - Overnight forwards per day
//! - `curve rate --points <file> --time <t>...` - Time-keyed zero-rate curve
//! - `curve check` - Show the effective configuration
//!
//! Conventions come from `--config <file>`, `CURVE_*` environment variables
//! and the global flags, in increasing order of precedence.

use clap::{Parser, Subcommand};
use curve_core::market_data::{Extrapolation, Interpolation};
use curve_core::rates::{Compounding, Frequency};
use curve_core::types::{Date, DayCountConvention};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod loader;
mod output;

pub use error::{CliError, Result};

use commands::forward::Period;
use config::{build_config, CliArgs};
use output::OutputFormat;

/// Discount curve queries from the command line
#[derive(Parser)]
#[command(name = "curve")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Day count convention (ACT/360, ACT/365F, 30/360)
    #[arg(long, global = true)]
    day_count: Option<DayCountConvention>,

    /// Compounding rule (simple, compounded, continuous, simple-then-compounded)
    #[arg(long, global = true)]
    compounding: Option<Compounding>,

    /// Compounding frequency (e.g. annual, semiannual, quarterly)
    #[arg(long, global = true)]
    frequency: Option<Frequency>,

    /// Behaviour outside the anchor range (flat-forward, reject)
    #[arg(long, global = true)]
    extrapolation: Option<Extrapolation>,

    /// Interpolation between anchors (log-linear, linear-zero, step-zero, cubic-zero)
    #[arg(long, global = true)]
    interpolation: Option<Interpolation>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the curve table for a set of anchors
    Nodes {
        /// CSV file with date,discount_factor columns
        #[arg(short, long)]
        points: PathBuf,
    },

    /// Discount factors and zero rates at given dates
    Discount {
        /// CSV file with date,discount_factor columns
        #[arg(short, long)]
        points: PathBuf,

        /// Query date (YYYY-MM-DD), repeatable or comma-separated
        #[arg(short, long = "date", value_delimiter = ',', required = true)]
        dates: Vec<Date>,
    },

    /// Forward rates between pairs of dates
    Forward {
        /// CSV file with date,discount_factor columns
        #[arg(short, long)]
        points: PathBuf,

        /// Forward period as START:END, repeatable
        #[arg(short = 'P', long = "period", required = true)]
        periods: Vec<Period>,
    },

    /// Overnight forward rate for every day of a window
    Daily {
        /// CSV file with date,discount_factor columns
        #[arg(short, long)]
        points: PathBuf,

        /// Window as START:END (END excluded)
        #[arg(short, long)]
        window: Period,
    },

    /// Query a time-keyed zero-rate curve
    Rate {
        /// CSV file with time,rate columns
        #[arg(short, long)]
        points: PathBuf,

        /// Query time in years, repeatable or comma-separated
        #[arg(short, long = "time", value_delimiter = ',')]
        times: Vec<f64>,
    },

    /// Check configuration, optionally building a curve
    Check {
        /// CSV file with date,discount_factor columns
        #[arg(short, long)]
        points: Option<PathBuf>,
    },
}

impl Cli {
    fn overrides(&self) -> CliArgs {
        CliArgs {
            config_file: self.config.clone(),
            verbose: self.verbose,
            format: self.format,
            day_count: self.day_count,
            compounding: self.compounding,
            frequency: self.frequency,
            extrapolation: self.extrapolation,
            interpolation: self.interpolation,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli.overrides(), |key| std::env::var(key).ok())?;

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_filter_str()));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!("Effective configuration: {:?}", config);

    match cli.command {
        Commands::Nodes { points } => commands::nodes::run(&points, &config),
        Commands::Discount { points, dates } => commands::discount::run(&points, &dates, &config),
        Commands::Forward { points, periods } => {
            commands::forward::run(&points, &periods, &config)
        }
        Commands::Daily { points, window } => {
            commands::forward::run_daily(&points, window, &config)
        }
        Commands::Rate { points, times } => commands::rate::run(&points, &times, &config),
        Commands::Check { points } => commands::check::run(&config, points.as_deref()),
    }
}
