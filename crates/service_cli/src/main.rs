//! gbm-forecast - Monte Carlo price forecasts from historical prices
//!
//! # Commands
//!
//! - `gbm-forecast simulate --data-file prices.csv` - Full forecast report
//! - `gbm-forecast estimate --data-file prices.csv` - Historical statistics only

use clap::{Args as ClapArgs, Parser, Subcommand};
use service_cli::commands;
use service_cli::config::{build_config, CliArgs};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// GBM Monte Carlo price forecaster
#[derive(Parser, Debug)]
#[command(name = "gbm-forecast")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE", env = "FORECAST_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "FORECAST_LOG_LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command
#[derive(ClapArgs, Debug, Default)]
struct CommonArgs {
    /// Instrument ticker symbol
    #[arg(short, long)]
    instrument: Option<String>,

    /// History start date (YYYY-MM-DD, inclusive)
    #[arg(long)]
    start_date: Option<String>,

    /// History end date (YYYY-MM-DD, exclusive; default today)
    #[arg(long)]
    end_date: Option<String>,

    /// CSV price file, or directory of <instrument>.csv files
    #[arg(short, long, value_name = "PATH")]
    data_file: Option<PathBuf>,

    /// Price column ("auto" prefers Adj Close, then Close)
    #[arg(long)]
    price_column: Option<String>,

    /// Output format (table, json)
    #[arg(short, long)]
    output: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Estimate returns, simulate GBM paths and report the terminal distribution
    Simulate {
        #[command(flatten)]
        common: CommonArgs,

        /// Number of simulated paths (5000-100000, step 5000)
        #[arg(short = 'n', long)]
        num_simulations: Option<usize>,

        /// Forecast horizon in days (30-365)
        #[arg(short = 't', long)]
        num_days: Option<usize>,

        /// RNG seed
        #[arg(long, conflicts_with = "no_seed")]
        seed: Option<u64>,

        /// Draw the seed from OS entropy
        #[arg(long)]
        no_seed: bool,

        /// Number of paths included in the report
        #[arg(long)]
        display_paths: Option<usize>,

        /// Terminal histogram bin count
        #[arg(long)]
        histogram_bins: Option<usize>,
    },

    /// Print historical return statistics without simulating
    Estimate {
        #[command(flatten)]
        common: CommonArgs,
    },
}

impl Cli {
    fn config_args(&self) -> CliArgs {
        let common = match &self.command {
            Commands::Simulate { common, .. } | Commands::Estimate { common } => common,
        };
        let mut args = CliArgs {
            config_file: self.config.clone(),
            log_level: self.log_level.clone(),
            instrument: common.instrument.clone(),
            start_date: common.start_date.clone(),
            end_date: common.end_date.clone(),
            data_file: common.data_file.clone(),
            price_column: common.price_column.clone(),
            output: common.output.clone(),
            ..Default::default()
        };
        if let Commands::Simulate {
            num_simulations,
            num_days,
            seed,
            no_seed,
            display_paths,
            histogram_bins,
            ..
        } = &self.command
        {
            args.num_simulations = *num_simulations;
            args.num_days = *num_days;
            args.seed = *seed;
            args.no_seed = *no_seed;
            args.display_paths = *display_paths;
            args.histogram_bins = *histogram_bins;
        }
        args
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli.config_args())?;

    init_tracing(config.log_level.as_filter_str());

    tracing::info!("gbm-forecast v{}", service_cli::VERSION);
    tracing::info!(
        instrument = %config.instrument,
        start_date = %config.start_date,
        end_date = %config.resolved_end_date(),
        num_simulations = config.num_simulations,
        num_days = config.num_days,
        seed = ?config.seed,
        output = %config.output,
        "Configuration loaded"
    );

    match cli.command {
        Commands::Simulate { .. } => commands::simulate::run(&config)?,
        Commands::Estimate { .. } => commands::estimate::run(&config)?,
    }

    Ok(())
}
