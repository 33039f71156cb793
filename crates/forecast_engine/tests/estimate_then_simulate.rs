//! Integration tests for the core → engine pipeline.
//!
//! A price series from `forecast_core` is reduced to return statistics and
//! then drives a simulation.

use approx::assert_relative_eq;
use forecast_core::types::{Date, PricePoint, PriceSeries};
use forecast_engine::{
    estimate_returns, EstimationError, PathSimulator, ReturnEstimator, SimulationConfig,
    SimulationError,
};

fn series(prices: &[f64]) -> PriceSeries {
    // At most 31 prices: one per day of January
    let points = prices
        .iter()
        .zip(1..=31)
        .map(|(&price, day)| PricePoint::new(Date::from_ymd(2024, 1, day).unwrap(), price))
        .collect();
    PriceSeries::new(points).unwrap()
}

#[test]
fn test_two_points_give_one_return() {
    let stats = estimate_returns(&series(&[100.0, 90.0])).unwrap();
    assert_relative_eq!(stats.mean_daily_return, -0.10, epsilon = 1e-12);
    assert_eq!(stats.daily_std_dev, 0.0);
    assert_eq!(stats.last_price, 90.0);
}

#[test]
fn test_single_point_is_insufficient() {
    let err = estimate_returns(&series(&[100.0])).unwrap_err();
    assert_eq!(err, EstimationError::InsufficientData { got: 1, need: 2 });
}

#[test]
fn test_flat_history_forecasts_flat_prices() {
    let stats = estimate_returns(&series(&[75.0; 30])).unwrap();
    assert_eq!(stats.mean_daily_return, 0.0);
    assert_eq!(stats.daily_std_dev, 0.0);

    let config = SimulationConfig::builder()
        .num_days(30)
        .num_simulations(5_000)
        .seed(42)
        .build()
        .unwrap();
    let outcome = PathSimulator::new().run_seeded(&stats, &config).unwrap();

    assert_eq!(outcome.summary.expected_price, 75.0);
    assert_eq!(outcome.summary.lower_bound_5pct, 75.0);
    assert_eq!(outcome.summary.upper_bound_95pct, 75.0);
}

#[test]
fn test_streamed_and_batch_estimates_agree() {
    let prices = [101.0, 102.5, 99.8, 100.4, 103.9, 104.2, 102.0];
    let batch = estimate_returns(&series(&prices)).unwrap();

    let mut estimator = ReturnEstimator::new();
    for &p in &prices {
        estimator.push(p).unwrap();
    }
    let streamed = estimator.finish().unwrap();

    assert_relative_eq!(batch.mean_daily_return, streamed.mean_daily_return);
    assert_relative_eq!(batch.daily_std_dev, streamed.daily_std_dev);
    assert_eq!(batch.last_price, streamed.last_price);
}

#[test]
fn test_volatile_history_spreads_forecast() {
    let prices = [100.0, 104.0, 97.0, 103.0, 95.0, 102.0, 98.0, 105.0];
    let stats = estimate_returns(&series(&prices)).unwrap();
    assert!(stats.daily_std_dev > 0.03);

    let config = SimulationConfig::builder()
        .num_days(90)
        .num_simulations(10_000)
        .seed(42)
        .build()
        .unwrap();
    let outcome = PathSimulator::new().run_seeded(&stats, &config).unwrap();

    let s = outcome.summary;
    assert!(s.lower_bound_5pct < stats.last_price);
    assert!(s.upper_bound_95pct > stats.last_price);
    assert_eq!(s.sample_size, 10_000);
}

#[test]
fn test_non_positive_price_fails_estimation_not_simulation() {
    let err = estimate_returns(&series(&[100.0, 0.0, 101.0])).unwrap_err();
    assert!(matches!(err, EstimationError::InvalidPrice { index: 1, .. }));

    let stats = forecast_engine::ReturnStats::new(0.0, 0.01, 0.0);
    let config = SimulationConfig::builder()
        .num_days(2)
        .num_simulations(1)
        .build()
        .unwrap();
    let err = PathSimulator::new().run_seeded(&stats, &config).unwrap_err();
    assert!(matches!(err, SimulationError::InvalidStats { name: "last_price", .. }));
}
