//! Feed error types.

use std::path::PathBuf;

use forecast_core::types::{Date, DateError, SeriesError};
use thiserror::Error;

/// Errors raised while retrieving a price history.
#[derive(Error, Debug)]
pub enum FeedError {
    /// The source holds no observations for the request.
    #[error("No data available for {instrument} between {start} and {end}")]
    NoDataAvailable {
        /// Requested instrument
        instrument: String,
        /// Inclusive start date
        start: Date,
        /// Exclusive end date
        end: Date,
    },

    /// The requested date range is empty or inverted.
    #[error("Invalid date range: start {start} must be before end {end}")]
    InvalidRange {
        /// Inclusive start date
        start: Date,
        /// Exclusive end date
        end: Date,
    },

    /// The source file could not be opened.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// File path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Malformed CSV input.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is missing from the header row.
    #[error("Missing column '{column}' (available: {available})")]
    MissingColumn {
        /// Column that was looked for
        column: String,
        /// Comma-separated header names
        available: String,
    },

    /// A cell could not be parsed.
    #[error("Failed to parse {field} '{value}' on line {line}")]
    Parse {
        /// Field kind ("date" or "price")
        field: &'static str,
        /// Raw cell content
        value: String,
        /// 1-based line number in the source
        line: u64,
    },

    /// A date cell parsed as text but is not a valid calendar date.
    #[error("Invalid date on line {line}: {source}")]
    Date {
        /// 1-based line number in the source
        line: u64,
        /// Underlying date error
        source: DateError,
    },

    /// Observations could not be ordered strictly by date.
    #[error("Unsorted series: {0}")]
    UnsortedSeries(#[from] SeriesError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_data_display() {
        let err = FeedError::NoDataAvailable {
            instrument: "AAPL".into(),
            start: Date::from_ymd(2018, 1, 1).unwrap(),
            end: Date::from_ymd(2019, 1, 1).unwrap(),
        };
        let msg = err.to_string();
        assert!(msg.contains("AAPL"));
        assert!(msg.contains("2018-01-01"));
    }

    #[test]
    fn test_missing_column_display() {
        let err = FeedError::MissingColumn {
            column: "Close".into(),
            available: "Date, Open".into(),
        };
        assert!(err.to_string().contains("'Close'"));
        assert!(err.to_string().contains("Date, Open"));
    }
}
