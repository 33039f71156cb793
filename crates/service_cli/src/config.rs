//! Forecast configuration management
//!
//! Handles loading configuration from TOML files, environment variables, and
//! CLI arguments.

use adapter_feeds::PriceColumn;
use forecast_core::types::Date;
use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Smallest accepted simulation count.
pub const MIN_SIMULATIONS: usize = 5_000;
/// Largest accepted simulation count.
pub const MAX_SIMULATIONS: usize = 100_000;
/// Simulation counts must be a multiple of this step.
pub const SIMULATION_STEP: usize = 5_000;
/// Shortest accepted horizon in days.
pub const MIN_DAYS: usize = 30;
/// Longest accepted horizon in days.
pub const MAX_DAYS: usize = 365;
/// Seed used unless disabled.
pub const DEFAULT_SEED: u64 = 42;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "Invalid simulation count: {0}. Must be between {min} and {max} in steps of {step}",
        min = MIN_SIMULATIONS,
        max = MAX_SIMULATIONS,
        step = SIMULATION_STEP
    )]
    InvalidSimulationCount(usize),

    #[error("Invalid day count: {0}. Must be between {min} and {max}", min = MIN_DAYS, max = MAX_DAYS)]
    InvalidDayCount(usize),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: table, json")]
    InvalidOutputFormat(String),

    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid date range: start {start} must be before end {end}")]
    InvalidDateRange { start: Date, end: Date },

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Report output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" | "text" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidOutputFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Forecast configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Instrument (ticker symbol)
    pub instrument: String,
    /// Inclusive history start date
    pub start_date: Date,
    /// Exclusive history end date; today when unset
    pub end_date: Option<Date>,
    /// Number of simulated paths
    pub num_simulations: usize,
    /// Forecast horizon in days
    pub num_days: usize,
    /// RNG seed; `None` draws one from OS entropy
    pub seed: Option<u64>,
    /// Log level
    #[serde(deserialize_with = "deserialize_from_str")]
    pub log_level: LogLevel,
    /// CSV file, or directory of `<instrument>.csv` files
    pub data_file: Option<PathBuf>,
    /// Price column preference ("auto" or a header name)
    #[serde(deserialize_with = "deserialize_from_str")]
    pub price_column: PriceColumn,
    /// Report format
    #[serde(deserialize_with = "deserialize_from_str")]
    pub output: OutputFormat,
    /// Number of paths included in the report
    pub display_paths: usize,
    /// Terminal histogram bin count
    pub histogram_bins: usize,
}

fn deserialize_from_str<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let s = String::deserialize(deserializer)?;
    T::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            instrument: "AAPL".to_string(),
            start_date: Date::from_ymd(2018, 1, 1).unwrap_or_else(|_| Date::today()),
            end_date: None,
            num_simulations: 20_000,
            num_days: 180,
            seed: Some(DEFAULT_SEED),
            log_level: LogLevel::Info,
            data_file: None,
            price_column: PriceColumn::Auto,
            output: OutputFormat::Table,
            display_paths: 300,
            histogram_bins: 80,
        }
    }
}

impl ForecastConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Overrides fields from `FORECAST_*` variables resolved by `lookup`.
    ///
    /// `FORECAST_SEED=none` disables seeding.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(instrument) = lookup("FORECAST_INSTRUMENT") {
            self.instrument = instrument;
        }
        if let Some(start) = lookup("FORECAST_START_DATE") {
            self.start_date = parse_date(&start)?;
        }
        if let Some(end) = lookup("FORECAST_END_DATE") {
            self.end_date = Some(parse_date(&end)?);
        }
        if let Some(n) = lookup("FORECAST_NUM_SIMULATIONS") {
            self.num_simulations = parse_number("num_simulations", &n)?;
        }
        if let Some(n) = lookup("FORECAST_NUM_DAYS") {
            self.num_days = parse_number("num_days", &n)?;
        }
        if let Some(seed) = lookup("FORECAST_SEED") {
            self.seed = parse_seed(&seed)?;
        }
        if let Some(level) = lookup("FORECAST_LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(path) = lookup("FORECAST_DATA_FILE") {
            self.data_file = Some(PathBuf::from(path));
        }
        if let Some(column) = lookup("FORECAST_PRICE_COLUMN") {
            self.price_column = parse_price_column(&column);
        }
        if let Some(output) = lookup("FORECAST_OUTPUT") {
            self.output = OutputFormat::from_str(&output)?;
        }
        if let Some(n) = lookup("FORECAST_DISPLAY_PATHS") {
            self.display_paths = parse_number("display_paths", &n)?;
        }
        if let Some(n) = lookup("FORECAST_HISTOGRAM_BINS") {
            self.histogram_bins = parse_number("histogram_bins", &n)?;
        }
        Ok(())
    }

    /// Returns the exclusive end date, defaulting to today.
    pub fn resolved_end_date(&self) -> Date {
        self.end_date.unwrap_or_else(Date::today)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_SIMULATIONS..=MAX_SIMULATIONS).contains(&self.num_simulations)
            || self.num_simulations % SIMULATION_STEP != 0
        {
            return Err(ConfigError::InvalidSimulationCount(self.num_simulations));
        }
        if !(MIN_DAYS..=MAX_DAYS).contains(&self.num_days) {
            return Err(ConfigError::InvalidDayCount(self.num_days));
        }
        let end = self.resolved_end_date();
        if self.start_date >= end {
            return Err(ConfigError::InvalidDateRange {
                start: self.start_date,
                end,
            });
        }
        if self.instrument.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "instrument",
                value: "must not be empty".to_string(),
            });
        }
        if self.histogram_bins == 0 {
            return Err(ConfigError::InvalidValue {
                name: "histogram_bins",
                value: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(instrument) = &cli.instrument {
            self.instrument = instrument.clone();
        }
        if let Some(start) = &cli.start_date {
            self.start_date = parse_date(start)?;
        }
        if let Some(end) = &cli.end_date {
            self.end_date = Some(parse_date(end)?);
        }
        if let Some(n) = cli.num_simulations {
            self.num_simulations = n;
        }
        if let Some(n) = cli.num_days {
            self.num_days = n;
        }
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if cli.no_seed {
            self.seed = None;
        }
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        }
        if let Some(path) = &cli.data_file {
            self.data_file = Some(path.clone());
        }
        if let Some(column) = &cli.price_column {
            self.price_column = parse_price_column(column);
        }
        if let Some(output) = &cli.output {
            self.output = OutputFormat::from_str(output)?;
        }
        if let Some(n) = cli.display_paths {
            self.display_paths = n;
        }
        if let Some(n) = cli.histogram_bins {
            self.histogram_bins = n;
        }
        Ok(())
    }
}

fn parse_date(s: &str) -> Result<Date, ConfigError> {
    Date::parse(s).map_err(|_| ConfigError::InvalidDate(s.to_string()))
}

fn parse_number(name: &'static str, s: &str) -> Result<usize, ConfigError> {
    s.trim().parse().map_err(|_| ConfigError::InvalidValue {
        name,
        value: s.to_string(),
    })
}

fn parse_seed(s: &str) -> Result<Option<u64>, ConfigError> {
    match s.trim().to_lowercase().as_str() {
        "none" | "random" | "entropy" => Ok(None),
        other => other
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                name: "seed",
                value: s.to_string(),
            }),
    }
}

fn parse_price_column(s: &str) -> PriceColumn {
    match PriceColumn::from_str(s) {
        Ok(column) => column,
        Err(never) => match never {},
    }
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Instrument override
    pub instrument: Option<String>,
    /// Start date override (YYYY-MM-DD)
    pub start_date: Option<String>,
    /// End date override (YYYY-MM-DD)
    pub end_date: Option<String>,
    /// Simulation count override
    pub num_simulations: Option<usize>,
    /// Horizon override
    pub num_days: Option<usize>,
    /// Seed override
    pub seed: Option<u64>,
    /// Disable seeding
    pub no_seed: bool,
    /// Log level override
    pub log_level: Option<String>,
    /// Data file override
    pub data_file: Option<PathBuf>,
    /// Price column override
    pub price_column: Option<String>,
    /// Output format override
    pub output: Option<String>,
    /// Displayed path count override
    pub display_paths: Option<usize>,
    /// Histogram bin override
    pub histogram_bins: Option<usize>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<ForecastConfig, ConfigError> {
    build_config_with_env(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an explicit environment lookup.
pub fn build_config_with_env<F>(cli: &CliArgs, lookup: F) -> Result<ForecastConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = if let Some(config_path) = &cli.config_file {
        ForecastConfig::from_file(config_path)?
    } else {
        ForecastConfig::default()
    };

    config.apply_env(lookup)?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}
