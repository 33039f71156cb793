//! # forecast_engine: GBM Forecast Engine (Layer 2)
//!
//! ## Layer 2 Role
//!
//! forecast_engine turns a historical price series into a distribution of
//! future prices:
//! - Return estimation from a [`PriceSeries`](forecast_core::types::PriceSeries)
//!   (`estimator`)
//! - Injectable standard-normal sources (`rng`)
//! - GBM path simulation and terminal distribution summaries (`mc`)
//!
//! The engine is a pure, single-attempt computation: no I/O, no retries,
//! and no user-facing logging. Diagnostics are emitted at `debug` level only.
//!
//! ## Usage Example
//!
//! ```rust
//! use forecast_engine::estimator::ReturnStats;
//! use forecast_engine::mc::{PathSimulator, SimulationConfig};
//! use forecast_engine::rng::ForecastRng;
//!
//! let stats = ReturnStats::new(0.0005, 0.02, 150.0);
//! let config = SimulationConfig::builder()
//!     .num_days(30)
//!     .num_simulations(1_000)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let mut rng = ForecastRng::from_seed(42);
//! let outcome = PathSimulator::new().run(&stats, &config, &mut rng).unwrap();
//!
//! assert_eq!(outcome.paths.row(0)[0], 150.0);
//! assert!(outcome.summary.lower_bound_5pct <= outcome.summary.upper_bound_95pct);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod estimator;
pub mod mc;
pub mod rng;

// Re-export commonly used items for convenience
pub use estimator::{estimate_returns, EstimationError, ReturnEstimator, ReturnStats};
pub use mc::{
    CancellationToken, ConfigError, PathMatrix, PathSimulator, SimulationConfig,
    SimulationError, SimulationOutcome, TerminalDistributionSummary,
};
pub use rng::{ForecastRng, NormalSource, SourceError};
