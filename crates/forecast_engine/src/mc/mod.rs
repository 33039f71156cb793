//! # GBM Path Simulation
//!
//! Builds the `num_days × num_simulations` matrix of simulated prices and
//! summarises its terminal row.
//!
//! ## Module Structure
//!
//! - [`config`]: Run configuration and builder with validation
//! - [`error`]: Configuration and runtime error types
//! - [`matrix`]: Row-major path storage
//! - [`simulator`]: The recurrence, draw ordering and parallel row updates
//! - [`summary`]: Mean and 5th/95th percentile of terminal prices
//! - [`parallel`]: Column chunking settings
//! - [`cancel`]: Cooperative cancellation token
//!
//! ## Usage Example
//!
//! ```rust
//! use forecast_engine::estimator::ReturnStats;
//! use forecast_engine::mc::{PathSimulator, SimulationConfig};
//!
//! let stats = ReturnStats::new(0.0, 0.0, 100.0);
//! let config = SimulationConfig::builder()
//!     .num_days(10)
//!     .num_simulations(5)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let outcome = PathSimulator::new().run_seeded(&stats, &config).unwrap();
//! assert_eq!(outcome.summary.expected_price, 100.0);
//! ```

pub mod cancel;
pub mod config;
pub mod error;
pub mod matrix;
pub mod parallel;
pub mod simulator;
pub mod summary;

pub use cancel::CancellationToken;
pub use config::{
    SimulationConfig, SimulationConfigBuilder, MAX_CELLS, MAX_DAYS, MAX_SIMULATIONS,
};
pub use error::{ConfigError, SimulationError};
pub use matrix::PathMatrix;
pub use parallel::ParallelConfig;
pub use simulator::{PathSimulator, SimulationOutcome};
pub use summary::TerminalDistributionSummary;
