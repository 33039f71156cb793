//! Core time, series, and error types.
//!
//! This module provides:
//! - `time`: `Date` wrapper around chrono::NaiveDate
//! - `series`: `PricePoint` and `PriceSeries` for historical observations
//! - `error`: Structured error types for dates, series, and statistics
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Date`] from `time`
//! - [`PricePoint`], [`PriceSeries`] from `series`
//! - [`DateError`], [`SeriesError`], [`StatsError`] from `error`

pub mod error;
pub mod series;
pub mod time;

pub use error::{DateError, SeriesError, StatsError};
pub use series::{PricePoint, PriceSeries};
pub use time::Date;
