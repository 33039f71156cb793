//! CLI error types

use adapter_feeds::FeedError;
use forecast_core::types::StatsError;
use forecast_engine::{EstimationError, SimulationError};
use thiserror::Error;

use crate::config::ConfigError;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or is out of range
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Price history could not be retrieved
    #[error("Market data error: {0}")]
    Feed(#[from] FeedError),

    /// Return statistics could not be estimated
    #[error("Estimation error: {0}")]
    Estimation(#[from] EstimationError),

    /// Simulation failed
    #[error("Simulation error: {0}")]
    Simulation(#[from] SimulationError),

    /// Report statistics could not be computed
    #[error("Report error: {0}")]
    Report(#[from] StatsError),

    /// Invalid argument combination
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Report serialisation failed
    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CliError::InvalidArgument("no data source".to_string());
        assert!(err.to_string().contains("no data source"));

        let err: CliError = EstimationError::InsufficientData { got: 1, need: 2 }.into();
        assert!(err.to_string().starts_with("Estimation error"));

        let err: CliError = ConfigError::InvalidDayCount(5).into();
        assert!(err.to_string().contains("Invalid day count: 5"));
    }
}
