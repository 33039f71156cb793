//! Market data provider abstraction.

use forecast_core::types::{Date, PriceSeries};

use crate::error::FeedError;

/// A request for daily closing prices of one instrument.
///
/// The range is half-open: observations with `start <= date < end`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PriceRequest {
    /// Instrument identifier (ticker symbol)
    pub instrument: String,
    /// Inclusive start date
    pub start: Date,
    /// Exclusive end date
    pub end: Date,
}

impl PriceRequest {
    /// Creates a new request.
    pub fn new(instrument: impl Into<String>, start: Date, end: Date) -> Self {
        Self {
            instrument: instrument.into(),
            start,
            end,
        }
    }

    /// Validates the date range.
    ///
    /// # Errors
    ///
    /// Returns `FeedError::InvalidRange` if `start >= end`.
    pub fn validate(&self) -> Result<(), FeedError> {
        if self.start >= self.end {
            return Err(FeedError::InvalidRange {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    pub(crate) fn no_data(&self) -> FeedError {
        FeedError::NoDataAvailable {
            instrument: self.instrument.clone(),
            start: self.start,
            end: self.end,
        }
    }
}

/// Trait for historical market data providers.
///
/// Implementations return the observations in the request's range ordered
/// strictly by date, or `FeedError::NoDataAvailable` when the range is
/// empty. A provider never returns an empty series.
pub trait MarketDataProvider: Send + Sync {
    /// Short provider name for logs.
    fn name(&self) -> &str;

    /// Fetches the closing-price history for `request`.
    fn fetch(&self, request: &PriceRequest) -> Result<PriceSeries, FeedError>;
}

/// Applies the request range to a full history and enforces non-emptiness.
pub(crate) fn select_range(
    history: &PriceSeries,
    request: &PriceRequest,
) -> Result<PriceSeries, FeedError> {
    request.validate()?;
    let selected = history.between(request.start, request.end);
    if selected.is_empty() {
        return Err(request.no_data());
    }
    Ok(selected)
}
