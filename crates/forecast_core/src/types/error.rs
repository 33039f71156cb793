//! Error types for structured error handling.
//!
//! This module provides:
//! - `DateError`: Errors from date construction and parsing
//! - `SeriesError`: Errors from price series construction
//! - `StatsError`: Errors from sample statistics

use thiserror::Error;

/// Date-related errors.
///
/// # Examples
/// ```
/// use forecast_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse date string.
    #[error("Date parse error: {0}")]
    ParseError(String),
}

/// Price series construction errors.
///
/// A [`PriceSeries`](super::PriceSeries) must be strictly increasing in date.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeriesError {
    /// Observation date is not after its predecessor.
    #[error("Observation {index} dated {date} is not after the previous observation ({previous})")]
    NonIncreasingDate {
        /// Index of the offending observation
        index: usize,
        /// Date of the offending observation
        date: String,
        /// Date of the preceding observation
        previous: String,
    },
}

/// Sample statistics errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    /// Statistic requested on an empty sample.
    #[error("Statistic requested on an empty sample")]
    EmptySample,

    /// Percentile outside [0, 100].
    #[error("Invalid percentile {0}: must be in [0, 100]")]
    InvalidPercentile(f64),

    /// Sample contains NaN or infinite values.
    #[error("Sample contains a non-finite value at index {0}")]
    NonFinite(usize),

    /// Histogram requested with zero bins.
    #[error("Histogram bin count must be at least 1")]
    ZeroBins,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_error_display() {
        let err = DateError::ParseError("bad".to_string());
        assert_eq!(err.to_string(), "Date parse error: bad");
    }

    #[test]
    fn test_series_error_display() {
        let err = SeriesError::NonIncreasingDate {
            index: 3,
            date: "2024-01-02".to_string(),
            previous: "2024-01-05".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Observation 3"));
        assert!(msg.contains("2024-01-05"));
    }

    #[test]
    fn test_stats_error_display() {
        assert!(StatsError::InvalidPercentile(120.0)
            .to_string()
            .contains("120"));
        assert!(StatsError::EmptySample.to_string().contains("empty"));
        assert!(StatsError::NonFinite(7).to_string().contains("index 7"));
    }
}
