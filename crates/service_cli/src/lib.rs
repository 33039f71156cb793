//! # service_cli: GBM Price Forecaster
//!
//! Library half of the `gbm-forecast` binary: layered configuration,
//! command implementations and report rendering. The binary in `main.rs`
//! only parses arguments, initialises logging and dispatches.
//!
//! # Commands
//!
//! - `gbm-forecast simulate` - Estimate returns, simulate paths, report the terminal distribution
//! - `gbm-forecast estimate` - Print historical return statistics only

pub mod commands;
pub mod config;
pub mod error;
pub mod report;

pub use error::{CliError, Result};

/// Crate version, reported at start-up.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
