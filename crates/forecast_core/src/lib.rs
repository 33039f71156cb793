//! # forecast_core: Foundation Types for GBM Price Forecasting
//!
//! ## Layer 1 (Foundation) Role
//!
//! forecast_core is the bottom layer of the workspace, providing:
//! - Date type wrapping chrono (`types::time`)
//! - Historical price observations: `PricePoint`, `PriceSeries` (`types::series`)
//! - Error types: `DateError`, `SeriesError`, `StatsError` (`types::error`)
//! - Online mean/variance accumulation (`math::moments`)
//! - Linear-interpolation percentiles and sample means (`math::quantile`)
//! - Equal-width histograms (`math::histogram`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other workspace crates, with minimal external dependencies:
//! - chrono: Date arithmetic and parsing
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use forecast_core::math::{percentile_linear, RunningMoments};
//! use forecast_core::types::{Date, PricePoint, PriceSeries};
//!
//! let series = PriceSeries::new(vec![
//!     PricePoint::new(Date::from_ymd(2024, 1, 2).unwrap(), 100.0),
//!     PricePoint::new(Date::from_ymd(2024, 1, 3).unwrap(), 101.0),
//! ])
//! .unwrap();
//! assert_eq!(series.last_price(), Some(101.0));
//!
//! let mut moments = RunningMoments::new();
//! moments.extend([1.0, 2.0, 3.0]);
//! assert_eq!(moments.mean(), Some(2.0));
//!
//! let p50 = percentile_linear(&[1.0, 2.0, 3.0, 4.0], 50.0).unwrap();
//! assert!((p50 - 2.5).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for Date, PricePoint, PriceSeries and Histogram

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
