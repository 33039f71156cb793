//! Error types for the path simulator.
//!
//! This module defines structured error types for configuration validation
//! and runtime failures of a simulation run. Every error is fatal to the
//! run; no partially populated matrix is ever returned alongside one.

use forecast_core::types::StatsError;
use thiserror::Error;

use super::config::{MAX_CELLS, MAX_DAYS, MAX_SIMULATIONS};
use crate::rng::SourceError;

/// Configuration error for the path simulator.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Day count outside [1, MAX_DAYS].
    #[error("Invalid day count {0}: must be in range [1, {max}]", max = MAX_DAYS)]
    InvalidDayCount(usize),

    /// Simulation count outside [1, MAX_SIMULATIONS].
    #[error("Invalid simulation count {0}: must be in range [1, {max}]", max = MAX_SIMULATIONS)]
    InvalidSimulationCount(usize),

    /// Path matrix would exceed MAX_CELLS prices.
    #[error(
        "Path matrix of {num_days} days x {num_simulations} simulations exceeds {max} cells",
        max = MAX_CELLS
    )]
    TooManyCells {
        /// Requested day count.
        num_days: usize,
        /// Requested simulation count.
        num_simulations: usize,
    },

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

/// Simulation run error.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum SimulationError {
    /// Simulation configuration is out of range.
    #[error("Invalid simulation config: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// Return statistics cannot drive a GBM simulation.
    #[error("Invalid return statistics: '{name}' {reason}")]
    InvalidStats {
        /// Field name.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// The random source failed to supply draws.
    #[error("Random source failed at row {row}: {source}")]
    Source {
        /// Row being generated when the source failed.
        row: usize,
        /// Underlying source error.
        source: SourceError,
    },

    /// The random source produced NaN or infinity.
    #[error("Random source produced a non-finite draw at row {row}, column {column}")]
    NonFiniteDraw {
        /// Row being generated.
        row: usize,
        /// Column of the offending draw.
        column: usize,
    },

    /// The recurrence produced a non-positive or non-finite price.
    #[error("Simulated prices left the positive finite range at row {row}")]
    NumericalBreakdown {
        /// Row at which the breakdown was detected.
        row: usize,
    },

    /// The run was cancelled at a row boundary.
    #[error("Simulation cancelled after {completed_rows} completed row(s)")]
    Cancelled {
        /// Number of fully populated rows when cancellation was observed.
        completed_rows: usize,
    },

    /// The terminal row could not be summarised.
    #[error("Terminal distribution summary failed: {0}")]
    Summary(#[from] StatsError),
}

impl SimulationError {
    /// Create an invalid statistics error
    pub fn invalid_stats(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidStats {
            name,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidSimulationCount(0);
        assert!(err.to_string().contains("Invalid simulation count 0"));

        let err = ConfigError::InvalidDayCount(20_000);
        assert!(err.to_string().contains("Invalid day count 20000"));
        assert!(err.to_string().contains("10000"));

        let err = ConfigError::TooManyCells {
            num_days: 10_000,
            num_simulations: 10_000_000,
        };
        assert!(err.to_string().contains("10000 days x 10000000 simulations"));

        let err = ConfigError::InvalidParameter {
            name: "num_days",
            value: "must be specified".to_string(),
        };
        assert!(err.to_string().contains("num_days"));
    }

    #[test]
    fn test_config_error_converts_to_invalid_config() {
        let err: SimulationError = ConfigError::InvalidDayCount(0).into();
        assert!(matches!(
            err,
            SimulationError::InvalidConfig(ConfigError::InvalidDayCount(0))
        ));
    }

    #[test]
    fn test_simulation_error_display() {
        let err = SimulationError::invalid_stats("daily_std_dev", "must be non-negative, got -0.1");
        assert!(err.to_string().contains("daily_std_dev"));

        let err = SimulationError::Cancelled { completed_rows: 12 };
        assert!(err.to_string().contains("12 completed"));

        let err = SimulationError::Source {
            row: 3,
            source: SourceError::Failure("boom".into()),
        };
        assert!(err.to_string().contains("row 3"));
        assert!(err.to_string().contains("boom"));
    }
}
