//! Terminal price distribution summary.

use forecast_core::math::{mean, percentile_sorted};
use forecast_core::types::StatsError;

/// Lower percentile reported in the summary.
pub const LOWER_PERCENTILE: f64 = 5.0;

/// Upper percentile reported in the summary.
pub const UPPER_PERCENTILE: f64 = 95.0;

/// Mean and 5th/95th percentiles of the terminal prices.
///
/// Percentiles use linear interpolation between order statistics at rank
/// `p / 100 * (n - 1)`.
///
/// # Examples
///
/// ```rust
/// use forecast_engine::mc::TerminalDistributionSummary;
///
/// let summary = TerminalDistributionSummary::from_terminal_row(&[10.0, 20.0, 30.0]).unwrap();
/// assert_eq!(summary.expected_price, 20.0);
/// assert_eq!(summary.lower_bound_5pct, 11.0);
/// assert_eq!(summary.upper_bound_95pct, 29.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TerminalDistributionSummary {
    /// Arithmetic mean of the terminal prices.
    pub expected_price: f64,
    /// 5th percentile of the terminal prices.
    pub lower_bound_5pct: f64,
    /// 95th percentile of the terminal prices.
    pub upper_bound_95pct: f64,
    /// Number of terminal prices summarised.
    pub sample_size: usize,
}

impl TerminalDistributionSummary {
    /// Summarises a terminal row.
    ///
    /// # Errors
    ///
    /// - `StatsError::EmptySample` if `terminal` is empty
    /// - `StatsError::NonFinite` if any price is NaN or infinite
    pub fn from_terminal_row(terminal: &[f64]) -> Result<Self, StatsError> {
        if let Some(index) = terminal.iter().position(|v| !v.is_finite()) {
            return Err(StatsError::NonFinite(index));
        }
        let expected_price = mean(terminal)?;

        let mut sorted = terminal.to_vec();
        sorted.sort_unstable_by(f64::total_cmp);

        Ok(Self {
            expected_price,
            lower_bound_5pct: percentile_sorted(&sorted, LOWER_PERCENTILE)?,
            upper_bound_95pct: percentile_sorted(&sorted, UPPER_PERCENTILE)?,
            sample_size: terminal.len(),
        })
    }
}
