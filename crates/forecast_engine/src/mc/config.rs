//! Path simulation configuration.
//!
//! This module provides the immutable run configuration and its builder.
//! Validation happens at build time and again when a run starts.

use super::error::ConfigError;

/// Maximum number of simulated paths allowed.
pub const MAX_SIMULATIONS: usize = 10_000_000;

/// Maximum forecast horizon in trading days.
pub const MAX_DAYS: usize = 10_000;

/// Maximum number of prices held by one path matrix (2 GB of `f64`).
pub const MAX_CELLS: usize = 250_000_000;

/// Time step of the recurrence, in days.
pub const TIME_STEP_DAYS: f64 = 1.0;

/// Path simulation configuration.
///
/// Immutable configuration specifying the shape of the path matrix.
/// Use [`SimulationConfigBuilder`] to construct instances.
///
/// The time step is fixed at one trading day ([`TIME_STEP_DAYS`]).
///
/// # Examples
///
/// ```rust
/// use forecast_engine::mc::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .num_days(180)
///     .num_simulations(20_000)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.num_days(), 180);
/// assert_eq!(config.num_simulations(), 20_000);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationConfig {
    /// Number of rows in the path matrix (row 0 is the starting price).
    num_days: usize,
    /// Number of independent paths (matrix columns).
    num_simulations: usize,
    /// Optional seed recorded for reproducibility.
    seed: Option<u64>,
}

impl SimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Returns the forecast horizon in days.
    #[inline]
    pub fn num_days(&self) -> usize {
        self.num_days
    }

    /// Returns the number of simulated paths.
    #[inline]
    pub fn num_simulations(&self) -> usize {
        self.num_simulations
    }

    /// Returns the optional seed.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the recurrence time step in days.
    #[inline]
    pub fn time_step_days(&self) -> f64 {
        TIME_STEP_DAYS
    }

    /// Returns the total number of matrix cells.
    #[inline]
    pub fn total_cells(&self) -> usize {
        self.num_days * self.num_simulations
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `num_days` is 0 or greater than 10,000
    /// - `num_simulations` is 0 or greater than 10,000,000
    /// - `num_days * num_simulations` exceeds [`MAX_CELLS`]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_days == 0 || self.num_days > MAX_DAYS {
            return Err(ConfigError::InvalidDayCount(self.num_days));
        }
        if self.num_simulations == 0 || self.num_simulations > MAX_SIMULATIONS {
            return Err(ConfigError::InvalidSimulationCount(self.num_simulations));
        }
        match self.num_days.checked_mul(self.num_simulations) {
            Some(cells) if cells <= MAX_CELLS => Ok(()),
            _ => Err(ConfigError::TooManyCells {
                num_days: self.num_days,
                num_simulations: self.num_simulations,
            }),
        }
    }
}

/// Builder for [`SimulationConfig`].
///
/// # Examples
///
/// ```rust
/// use forecast_engine::mc::{ConfigError, SimulationConfig};
///
/// let err = SimulationConfig::builder().num_simulations(100).build();
/// assert!(matches!(err, Err(ConfigError::InvalidParameter { name: "num_days", .. })));
/// ```
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    num_days: Option<usize>,
    num_simulations: Option<usize>,
    seed: Option<u64>,
}

impl SimulationConfigBuilder {
    /// Sets the forecast horizon in days, in [1, 10_000].
    #[inline]
    pub fn num_days(mut self, num_days: usize) -> Self {
        self.num_days = Some(num_days);
        self
    }

    /// Sets the number of simulated paths, in [1, 10_000_000].
    #[inline]
    pub fn num_simulations(mut self, num_simulations: usize) -> Self {
        self.num_simulations = Some(num_simulations);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets or clears the seed.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a required field is missing or out of range.
    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        let num_days = self.num_days.ok_or_else(|| ConfigError::InvalidParameter {
            name: "num_days",
            value: "must be specified".to_string(),
        })?;
        let num_simulations = self
            .num_simulations
            .ok_or_else(|| ConfigError::InvalidParameter {
                name: "num_simulations",
                value: "must be specified".to_string(),
            })?;

        let config = SimulationConfig {
            num_days,
            num_simulations,
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }
}
