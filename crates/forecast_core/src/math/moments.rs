//! Online mean and variance accumulation.
//!
//! Implements Welford's algorithm, which updates the running mean and the
//! sum of squared deviations (M2) one observation at a time. Histories of
//! any length can be streamed without buffering, and the update avoids the
//! catastrophic cancellation of the naive `sum_sq - sum^2/n` formula.
//!
//! # References
//!
//! - Welford, B. P. (1962). "Note on a method for calculating corrected sums
//!   of squares and products". Technometrics 4(3).

/// Running first and second moments of a stream of observations.
///
/// # Examples
///
/// ```rust
/// use forecast_core::math::RunningMoments;
///
/// let mut moments = RunningMoments::new();
/// moments.extend([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
///
/// assert_eq!(moments.count(), 8);
/// assert_eq!(moments.mean(), Some(5.0));
/// // Bessel-corrected: 32 / 7
/// assert!((moments.sample_variance().unwrap() - 32.0 / 7.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RunningMoments {
    count: u64,
    mean: f64,
    m2: f64,
}

impl RunningMoments {
    /// Creates an empty accumulator.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one observation.
    #[inline]
    pub fn push(&mut self, value: f64) {
        self.count += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        let delta2 = value - self.mean;
        self.m2 += delta * delta2;
    }

    /// Returns the number of observations.
    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Returns `true` if no observation has been pushed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the arithmetic mean, or `None` when empty.
    #[inline]
    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then_some(self.mean)
    }

    /// Returns the Bessel-corrected variance (divisor `n - 1`).
    ///
    /// `None` when fewer than two observations have been pushed.
    #[inline]
    pub fn sample_variance(&self) -> Option<f64> {
        (self.count > 1).then(|| (self.m2 / (self.count - 1) as f64).max(0.0))
    }

    /// Returns the Bessel-corrected standard deviation.
    ///
    /// `None` when fewer than two observations have been pushed.
    #[inline]
    pub fn sample_std_dev(&self) -> Option<f64> {
        self.sample_variance().map(f64::sqrt)
    }
}

impl Extend<f64> for RunningMoments {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl FromIterator<f64> for RunningMoments {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut moments = RunningMoments::new();
        moments.extend(iter);
        moments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn naive_sample_variance(values: &[f64]) -> f64 {
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0)
    }

    #[test]
    fn test_empty() {
        let m = RunningMoments::new();
        assert!(m.is_empty());
        assert_eq!(m.mean(), None);
        assert_eq!(m.sample_variance(), None);
    }

    #[test]
    fn test_single_observation() {
        let m: RunningMoments = [-0.1].into_iter().collect();
        assert_eq!(m.count(), 1);
        assert_relative_eq!(m.mean().unwrap(), -0.1);
        assert_eq!(m.sample_variance(), None);
    }

    #[test]
    fn test_constant_stream_has_zero_variance() {
        let m: RunningMoments = std::iter::repeat(0.01).take(1000).collect();
        assert_relative_eq!(m.mean().unwrap(), 0.01, epsilon = 1e-15);
        assert_relative_eq!(m.sample_std_dev().unwrap(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_large_offset_is_stable() {
        // Naive sum-of-squares loses all precision here
        let values: Vec<f64> = [4.0, 7.0, 13.0, 16.0].iter().map(|v| v + 1e9).collect();
        let m: RunningMoments = values.iter().copied().collect();
        assert_relative_eq!(m.sample_variance().unwrap(), 30.0, epsilon = 1e-6);
    }

    proptest! {
        #[test]
        fn prop_matches_two_pass_variance(values in prop::collection::vec(-1.0e3f64..1.0e3, 2..200)) {
            let m: RunningMoments = values.iter().copied().collect();
            let expected = naive_sample_variance(&values);
            prop_assert!((m.sample_variance().unwrap() - expected).abs() <= 1e-8 * expected.max(1.0));
        }

        #[test]
        fn prop_std_dev_non_negative(values in prop::collection::vec(-1.0f64..1.0, 2..100)) {
            let m: RunningMoments = values.iter().copied().collect();
            prop_assert!(m.sample_std_dev().unwrap() >= 0.0);
        }
    }
}
