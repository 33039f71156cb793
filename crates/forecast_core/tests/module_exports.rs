//! Public API surface tests for forecast_core.
//!
//! Verifies that the re-exports used by the engine and adapter crates stay
//! reachable from their documented paths.

use approx::assert_relative_eq;
use forecast_core::math::{mean, percentile_linear, percentile_sorted, Histogram, RunningMoments};
use forecast_core::types::{Date, DateError, PricePoint, PriceSeries, SeriesError, StatsError};

#[test]
fn test_types_reexports() {
    let date: Date = "2018-01-02".parse().unwrap();
    let point = PricePoint::new(date, 170.0);
    let series = PriceSeries::new(vec![point]).unwrap();
    assert_eq!(series.len(), 1);

    let _: Option<DateError> = Date::parse("bad").err();
    let _: Option<SeriesError> = None;
    let _: Option<StatsError> = mean(&[]).err();
}

#[test]
fn test_math_reexports_agree() {
    let sample = [12.0, 3.0, 7.0, 9.0, 1.0, 4.0];
    let mut sorted = sample.to_vec();
    sorted.sort_by(f64::total_cmp);

    for p in [0.0, 5.0, 50.0, 95.0, 100.0] {
        assert_eq!(
            percentile_linear(&sample, p).unwrap(),
            percentile_sorted(&sorted, p).unwrap()
        );
    }

    let moments: RunningMoments = sample.iter().copied().collect();
    assert_relative_eq!(moments.mean().unwrap(), mean(&sample).unwrap(), epsilon = 1e-12);

    let histogram = Histogram::from_values(&sample, 4).unwrap();
    assert_eq!(histogram.total(), sample.len() as u64);
}

#[test]
fn test_series_window_then_moments() {
    let points: Vec<PricePoint> = (1..=10)
        .map(|day| PricePoint::new(Date::from_ymd(2024, 3, day).unwrap(), 100.0 + day as f64))
        .collect();
    let series = PriceSeries::new(points).unwrap();
    let window = series.between(
        Date::from_ymd(2024, 3, 3).unwrap(),
        Date::from_ymd(2024, 3, 6).unwrap(),
    );

    let moments: RunningMoments = window.prices().collect();
    assert_eq!(moments.count(), 3);
    assert_relative_eq!(moments.mean().unwrap(), 104.0);
}
