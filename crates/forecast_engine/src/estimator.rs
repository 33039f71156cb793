//! Historical return estimation.
//!
//! Converts a price history into the two drift/volatility parameters the
//! simulator needs plus the starting price:
//!
//! ```text
//! r_t   = (p_t - p_{t-1}) / p_{t-1}
//! mu    = mean(r_t)
//! sigma = sample std dev of r_t   (divisor n - 1)
//! S_0   = p_last
//! ```
//!
//! Estimation is incremental. [`ReturnEstimator`] consumes one price at a
//! time through a Welford accumulator, so histories can be streamed without
//! buffering the full series.
//!
//! # Single-return histories
//!
//! Two prices yield exactly one return, for which the sample standard
//! deviation has zero degrees of freedom. The estimator reports
//! `daily_std_dev = 0.0` in that case rather than NaN.

use forecast_core::math::RunningMoments;
use forecast_core::types::PriceSeries;
use thiserror::Error;

/// Minimum number of price observations needed to form one return.
pub const MIN_OBSERVATIONS: usize = 2;

/// Return estimation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EstimationError {
    /// Fewer than two price observations.
    #[error("Insufficient data: got {got} price observation(s), need at least {need}")]
    InsufficientData {
        /// Number of observations supplied
        got: usize,
        /// Minimum number required
        need: usize,
    },

    /// Price is zero, negative, or not finite.
    #[error("Invalid price {price} at observation {index}: prices must be positive and finite")]
    InvalidPrice {
        /// Index of the offending observation
        index: usize,
        /// The offending price
        price: f64,
    },
}

/// Daily return statistics and the simulation starting price.
///
/// Derived once per run from a price history; immutable afterwards.
///
/// # Examples
///
/// ```rust
/// use forecast_engine::estimator::ReturnStats;
///
/// let stats = ReturnStats::new(0.001, 0.015, 182.5);
/// assert_eq!(stats.last_price, 182.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReturnStats {
    /// Arithmetic mean of daily simple returns (μ).
    pub mean_daily_return: f64,
    /// Sample standard deviation of daily simple returns (σ).
    pub daily_std_dev: f64,
    /// Price of the most recent observation (S₀).
    pub last_price: f64,
}

impl ReturnStats {
    /// Creates return statistics from explicit values.
    ///
    /// No validation is performed here; the simulator rejects invalid
    /// statistics before generating any path.
    #[inline]
    pub fn new(mean_daily_return: f64, daily_std_dev: f64, last_price: f64) -> Self {
        Self {
            mean_daily_return,
            daily_std_dev,
            last_price,
        }
    }
}

/// Incremental return estimator.
///
/// Feed prices in date order with [`push`](Self::push), then call
/// [`finish`](Self::finish).
///
/// # Examples
///
/// ```rust
/// use forecast_engine::estimator::ReturnEstimator;
///
/// let mut estimator = ReturnEstimator::new();
/// for price in [100.0, 110.0, 99.0] {
///     estimator.push(price).unwrap();
/// }
/// let stats = estimator.finish().unwrap();
///
/// // Returns: +10%, -10%
/// assert!(stats.mean_daily_return.abs() < 1e-12);
/// assert_eq!(stats.last_price, 99.0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ReturnEstimator {
    observations: usize,
    last_price: Option<f64>,
    returns: RunningMoments,
}

impl ReturnEstimator {
    /// Creates an empty estimator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the next price observation.
    ///
    /// # Errors
    ///
    /// Returns `EstimationError::InvalidPrice` if `price` is not a positive
    /// finite number. The estimator state is left unchanged.
    pub fn push(&mut self, price: f64) -> Result<(), EstimationError> {
        if !(price.is_finite() && price > 0.0) {
            return Err(EstimationError::InvalidPrice {
                index: self.observations,
                price,
            });
        }

        if let Some(previous) = self.last_price {
            self.returns.push((price - previous) / previous);
        }
        self.last_price = Some(price);
        self.observations += 1;
        Ok(())
    }

    /// Returns the number of prices accepted so far.
    #[inline]
    pub fn observations(&self) -> usize {
        self.observations
    }

    /// Returns the number of returns accumulated so far.
    #[inline]
    pub fn return_count(&self) -> u64 {
        self.returns.count()
    }

    /// Produces the return statistics.
    ///
    /// # Errors
    ///
    /// Returns `EstimationError::InsufficientData` if fewer than two prices
    /// have been pushed.
    pub fn finish(&self) -> Result<ReturnStats, EstimationError> {
        let insufficient = EstimationError::InsufficientData {
            got: self.observations,
            need: MIN_OBSERVATIONS,
        };
        let (Some(mean_daily_return), Some(last_price)) = (self.returns.mean(), self.last_price)
        else {
            return Err(insufficient);
        };

        // One return: zero degrees of freedom, reported as no dispersion
        let daily_std_dev = self.returns.sample_std_dev().unwrap_or(0.0);

        Ok(ReturnStats {
            mean_daily_return,
            daily_std_dev,
            last_price,
        })
    }
}

/// Estimates return statistics from prices in date order.
///
/// # Errors
///
/// - `EstimationError::InvalidPrice` at the first non-positive or non-finite price
/// - `EstimationError::InsufficientData` if fewer than two prices are supplied
pub fn estimate_from_prices<I>(prices: I) -> Result<ReturnStats, EstimationError>
where
    I: IntoIterator<Item = f64>,
{
    let mut estimator = ReturnEstimator::new();
    for price in prices {
        estimator.push(price)?;
    }
    estimator.finish()
}

/// Estimates return statistics from a price series.
///
/// # Errors
///
/// See [`estimate_from_prices`].
///
/// # Examples
///
/// ```rust
/// use forecast_core::types::{Date, PricePoint, PriceSeries};
/// use forecast_engine::estimator::estimate_returns;
///
/// let d = |day| Date::from_ymd(2024, 1, day).unwrap();
/// let series = PriceSeries::new(vec![
///     PricePoint::new(d(2), 100.0),
///     PricePoint::new(d(3), 90.0),
/// ])
/// .unwrap();
///
/// let stats = estimate_returns(&series).unwrap();
/// assert!((stats.mean_daily_return + 0.10).abs() < 1e-12);
/// assert_eq!(stats.daily_std_dev, 0.0);
/// assert_eq!(stats.last_price, 90.0);
/// ```
pub fn estimate_returns(series: &PriceSeries) -> Result<ReturnStats, EstimationError> {
    estimate_from_prices(series.prices())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_empty_history() {
        assert_eq!(
            estimate_from_prices(std::iter::empty()),
            Err(EstimationError::InsufficientData { got: 0, need: 2 })
        );
    }

    #[test]
    fn test_single_price() {
        assert_eq!(
            estimate_from_prices([42.0]),
            Err(EstimationError::InsufficientData { got: 1, need: 2 })
        );
    }

    #[test]
    fn test_two_prices_single_return() {
        let stats = estimate_from_prices([100.0, 90.0]).unwrap();
        assert_relative_eq!(stats.mean_daily_return, -0.10, epsilon = 1e-15);
        assert_eq!(stats.daily_std_dev, 0.0);
        assert_eq!(stats.last_price, 90.0);
    }

    #[test]
    fn test_known_sample() {
        // Returns: 0.1, -0.1, 0.05
        let stats = estimate_from_prices([100.0, 110.0, 99.0, 103.95]).unwrap();
        let returns = [0.1, -0.1, 0.05];
        let mean = returns.iter().sum::<f64>() / 3.0;
        let var = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / 2.0;

        assert_relative_eq!(stats.mean_daily_return, mean, epsilon = 1e-12);
        assert_relative_eq!(stats.daily_std_dev, var.sqrt(), epsilon = 1e-12);
        assert_eq!(stats.last_price, 103.95);
    }

    #[test]
    fn test_constant_prices() {
        let stats = estimate_from_prices([50.0; 20]).unwrap();
        assert_eq!(stats.mean_daily_return, 0.0);
        assert_eq!(stats.daily_std_dev, 0.0);
    }

    #[test]
    fn test_zero_price_rejected() {
        assert_eq!(
            estimate_from_prices([100.0, 0.0, 90.0]),
            Err(EstimationError::InvalidPrice {
                index: 1,
                price: 0.0
            })
        );
    }

    #[test]
    fn test_negative_first_price_rejected() {
        assert!(matches!(
            estimate_from_prices([-1.0]),
            Err(EstimationError::InvalidPrice { index: 0, .. })
        ));
    }

    #[test]
    fn test_nan_price_rejected() {
        assert!(matches!(
            estimate_from_prices([100.0, f64::NAN]),
            Err(EstimationError::InvalidPrice { index: 1, .. })
        ));
    }

    #[test]
    fn test_rejected_push_leaves_state_unchanged() {
        let mut estimator = ReturnEstimator::new();
        estimator.push(100.0).unwrap();
        assert!(estimator.push(-5.0).is_err());
        estimator.push(105.0).unwrap();

        assert_eq!(estimator.observations(), 2);
        assert_eq!(estimator.return_count(), 1);
        let stats = estimator.finish().unwrap();
        assert_relative_eq!(stats.mean_daily_return, 0.05, epsilon = 1e-15);
    }

    #[test]
    fn test_error_messages() {
        let err = EstimationError::InsufficientData { got: 1, need: 2 };
        assert!(err.to_string().contains("Insufficient data"));

        let err = EstimationError::InvalidPrice {
            index: 4,
            price: -3.0,
        };
        assert!(err.to_string().contains("observation 4"));
    }

    proptest! {
        #[test]
        fn prop_std_dev_non_negative(prices in prop::collection::vec(0.01f64..1.0e5, 2..250)) {
            let stats = estimate_from_prices(prices.iter().copied()).unwrap();
            prop_assert!(stats.daily_std_dev >= 0.0);
            prop_assert!(stats.daily_std_dev.is_finite());
            prop_assert_eq!(stats.last_price, *prices.last().unwrap());
        }
    }
}
