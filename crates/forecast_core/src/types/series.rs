//! Historical price observations.
//!
//! A [`PriceSeries`] is the input to return estimation: an ordered sequence
//! of `(date, price)` observations, strictly increasing in date. Price
//! positivity is not enforced here; the return estimator rejects
//! non-positive prices with a dedicated error so the caller can tell the
//! two failure modes apart.

use super::error::SeriesError;
use super::time::Date;

/// A single dated price observation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricePoint {
    /// Observation date.
    pub date: Date,
    /// Observed price.
    pub price: f64,
}

impl PricePoint {
    /// Creates a new observation.
    #[inline]
    pub fn new(date: Date, price: f64) -> Self {
        Self { date, price }
    }
}

/// Ordered, immutable sequence of price observations.
///
/// # Examples
///
/// ```
/// use forecast_core::types::{Date, PricePoint, PriceSeries};
///
/// let d = |day| Date::from_ymd(2024, 1, day).unwrap();
/// let series = PriceSeries::new(vec![
///     PricePoint::new(d(2), 100.0),
///     PricePoint::new(d(3), 90.0),
/// ])
/// .unwrap();
///
/// assert_eq!(series.len(), 2);
/// assert_eq!(series.last_price(), Some(90.0));
///
/// // Dates must be strictly increasing
/// let unsorted = PriceSeries::new(vec![
///     PricePoint::new(d(3), 100.0),
///     PricePoint::new(d(2), 90.0),
/// ]);
/// assert!(unsorted.is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Creates a series, validating that dates are strictly increasing.
    ///
    /// # Errors
    ///
    /// Returns `SeriesError::NonIncreasingDate` for the first observation
    /// whose date is not after its predecessor.
    pub fn new(points: Vec<PricePoint>) -> Result<Self, SeriesError> {
        for (index, pair) in points.windows(2).enumerate() {
            if pair[1].date <= pair[0].date {
                return Err(SeriesError::NonIncreasingDate {
                    index: index + 1,
                    date: pair[1].date.to_string(),
                    previous: pair[0].date.to_string(),
                });
            }
        }
        Ok(Self { points })
    }

    /// Creates an empty series.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the number of observations.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the series has no observations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the observations in date order.
    #[inline]
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Iterates over prices in date order.
    pub fn prices(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.price)
    }

    /// Returns the first observation.
    pub fn first(&self) -> Option<&PricePoint> {
        self.points.first()
    }

    /// Returns the most recent observation.
    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// Returns the price of the most recent observation.
    pub fn last_price(&self) -> Option<f64> {
        self.points.last().map(|p| p.price)
    }

    /// Returns the sub-series with `start <= date < end`.
    ///
    /// The end bound is exclusive.
    pub fn between(&self, start: Date, end: Date) -> PriceSeries {
        let points = self
            .points
            .iter()
            .filter(|p| p.date >= start && p.date < end)
            .copied()
            .collect();
        PriceSeries { points }
    }
}

impl<'a> IntoIterator for &'a PriceSeries {
    type Item = &'a PricePoint;
    type IntoIter = std::slice::Iter<'a, PricePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
