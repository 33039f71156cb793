//! In-memory price history source, for tests and embedding.

use std::collections::HashMap;

use forecast_core::types::PriceSeries;

use crate::error::FeedError;
use crate::provider::{select_range, MarketDataProvider, PriceRequest};

/// Provider serving pre-loaded series keyed by instrument.
///
/// # Examples
///
/// ```rust
/// use adapter_feeds::{InMemoryFeed, MarketDataProvider, PriceRequest};
/// use forecast_core::types::{Date, PricePoint, PriceSeries};
///
/// let d = |day| Date::from_ymd(2024, 1, day).unwrap();
/// let series = PriceSeries::new(vec![
///     PricePoint::new(d(2), 100.0),
///     PricePoint::new(d(3), 101.0),
/// ])
/// .unwrap();
///
/// let feed = InMemoryFeed::new().with_series("ACME", series);
/// let fetched = feed.fetch(&PriceRequest::new("ACME", d(1), d(31))).unwrap();
/// assert_eq!(fetched.len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct InMemoryFeed {
    series: HashMap<String, PriceSeries>,
}

impl InMemoryFeed {
    /// Creates an empty feed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the history for `instrument`.
    pub fn with_series(mut self, instrument: impl Into<String>, series: PriceSeries) -> Self {
        self.insert(instrument, series);
        self
    }

    /// Adds or replaces the history for `instrument`.
    pub fn insert(&mut self, instrument: impl Into<String>, series: PriceSeries) {
        self.series.insert(instrument.into(), series);
    }

    /// Number of instruments held.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Returns `true` if no instrument is held.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

impl MarketDataProvider for InMemoryFeed {
    fn name(&self) -> &str {
        "memory"
    }

    fn fetch(&self, request: &PriceRequest) -> Result<PriceSeries, FeedError> {
        request.validate()?;
        let history = self
            .series
            .get(&request.instrument)
            .ok_or_else(|| request.no_data())?;
        select_range(history, request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forecast_core::types::{Date, PricePoint};

    fn d(day: u32) -> Date {
        Date::from_ymd(2024, 3, day).unwrap()
    }

    fn feed() -> InMemoryFeed {
        let series = PriceSeries::new(
            (1..=10)
                .map(|day| PricePoint::new(d(day), 100.0 + day as f64))
                .collect(),
        )
        .unwrap();
        InMemoryFeed::new().with_series("ACME", series)
    }

    #[test]
    fn test_end_is_exclusive() {
        let series = feed()
            .fetch(&PriceRequest::new("ACME", d(3), d(6)))
            .unwrap();
        assert_eq!(series.prices().collect::<Vec<_>>(), vec![103.0, 104.0, 105.0]);
    }

    #[test]
    fn test_unknown_instrument() {
        let err = feed()
            .fetch(&PriceRequest::new("NOPE", d(1), d(5)))
            .unwrap_err();
        assert!(matches!(err, FeedError::NoDataAvailable { ref instrument, .. } if instrument == "NOPE"));
    }

    #[test]
    fn test_empty_range() {
        let err = feed()
            .fetch(&PriceRequest::new("ACME", d(11), d(20)))
            .unwrap_err();
        assert!(matches!(err, FeedError::NoDataAvailable { .. }));
    }

    #[test]
    fn test_inverted_range() {
        let err = feed()
            .fetch(&PriceRequest::new("ACME", d(5), d(5)))
            .unwrap_err();
        assert!(matches!(err, FeedError::InvalidRange { .. }));
    }

    #[test]
    fn test_len() {
        let mut feed = feed();
        assert_eq!(feed.len(), 1);
        feed.insert("OTHER", PriceSeries::empty());
        assert_eq!(feed.len(), 2);
        assert!(!feed.is_empty());
    }
}
