//! Arithmetic mean and percentiles with linear interpolation.
//!
//! Percentiles use the conventional "linear" method: for percentile `p` over
//! `n` sorted values the fractional rank is `h = p / 100 × (n - 1)`, and the
//! result interpolates between the order statistics at `floor(h)` and
//! `ceil(h)`.

use crate::types::StatsError;

/// Arithmetic mean of a sample.
///
/// Deviations are accumulated about the first value, so a constant sample
/// returns that value exactly.
///
/// # Errors
///
/// - `StatsError::EmptySample` if `values` is empty
///
/// # Examples
///
/// ```rust
/// use forecast_core::math::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 6.0]).unwrap(), 3.0);
/// assert!(mean(&[]).is_err());
/// ```
pub fn mean(values: &[f64]) -> Result<f64, StatsError> {
    if values.is_empty() {
        return Err(StatsError::EmptySample);
    }
    let origin = values[0];
    let offset = values.iter().map(|v| v - origin).sum::<f64>();
    Ok(origin + offset / values.len() as f64)
}

/// Percentile of an unsorted sample using linear interpolation.
///
/// Copies and sorts the sample. Use [`percentile_sorted`] to compute several
/// percentiles from one sort.
///
/// # Errors
///
/// - `StatsError::EmptySample` if `values` is empty
/// - `StatsError::InvalidPercentile` if `p` is outside `[0, 100]`
/// - `StatsError::NonFinite` if the sample contains NaN or infinity
///
/// # Examples
///
/// ```rust
/// use forecast_core::math::percentile_linear;
///
/// let values = [15.0, 20.0, 35.0, 40.0, 50.0];
/// assert_eq!(percentile_linear(&values, 0.0).unwrap(), 15.0);
/// assert_eq!(percentile_linear(&values, 100.0).unwrap(), 50.0);
/// // h = 0.4 × 4 = 1.6 → 20 + 0.6 × (35 - 20)
/// assert!((percentile_linear(&values, 40.0).unwrap() - 29.0).abs() < 1e-12);
/// ```
pub fn percentile_linear(values: &[f64], p: f64) -> Result<f64, StatsError> {
    if let Some(index) = values.iter().position(|v| !v.is_finite()) {
        return Err(StatsError::NonFinite(index));
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    percentile_sorted(&sorted, p)
}

/// Percentile of an already ascending-sorted sample using linear interpolation.
///
/// # Errors
///
/// - `StatsError::EmptySample` if `sorted` is empty
/// - `StatsError::InvalidPercentile` if `p` is outside `[0, 100]`
pub fn percentile_sorted(sorted: &[f64], p: f64) -> Result<f64, StatsError> {
    if sorted.is_empty() {
        return Err(StatsError::EmptySample);
    }
    if !(0.0..=100.0).contains(&p) {
        return Err(StatsError::InvalidPercentile(p));
    }
    debug_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));

    let rank = p / 100.0 * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let fraction = rank - lower as f64;

    let lo = sorted[lower];
    let hi = sorted[upper];
    Ok(lo + (hi - lo) * fraction)
}
