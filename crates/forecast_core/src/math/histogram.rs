//! Equal-width histograms for distribution display.

use crate::types::StatsError;

/// Equal-width histogram over the closed range `[min, max]` of a sample.
///
/// Bins are half-open `[edge_i, edge_{i+1})` except the last, which also
/// includes `max`. When every value is equal the range is degenerate and the
/// whole sample lands in a single bin of zero width.
///
/// # Examples
///
/// ```rust
/// use forecast_core::math::Histogram;
///
/// let h = Histogram::from_values(&[1.0, 2.0, 2.5, 4.0], 3).unwrap();
/// assert_eq!(h.counts(), &[1, 2, 1]);
/// assert_eq!(h.edges().len(), 4);
/// assert_eq!(h.total(), 4);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Histogram {
    edges: Vec<f64>,
    counts: Vec<u64>,
}

impl Histogram {
    /// Builds a histogram with `bins` equal-width bins.
    ///
    /// # Errors
    ///
    /// - `StatsError::ZeroBins` if `bins == 0`
    /// - `StatsError::EmptySample` if `values` is empty
    /// - `StatsError::NonFinite` if any value is NaN or infinite
    pub fn from_values(values: &[f64], bins: usize) -> Result<Self, StatsError> {
        if bins == 0 {
            return Err(StatsError::ZeroBins);
        }
        if values.is_empty() {
            return Err(StatsError::EmptySample);
        }
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(StatsError::NonFinite(index));
        }

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        if max == min {
            return Ok(Self {
                edges: vec![min, max],
                counts: vec![values.len() as u64],
            });
        }

        let width = (max - min) / bins as f64;
        let mut edges: Vec<f64> = (0..bins).map(|i| min + width * i as f64).collect();
        edges.push(max);

        let mut counts = vec![0u64; bins];
        for &v in values {
            let slot = (((v - min) / width) as usize).min(bins - 1);
            counts[slot] += 1;
        }

        Ok(Self { edges, counts })
    }

    /// Bin edges, `counts().len() + 1` entries in ascending order.
    #[inline]
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Observation count per bin.
    #[inline]
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Number of bins.
    #[inline]
    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    /// Total number of observations.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Iterates over `(lower_edge, upper_edge, count)` triples.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64, u64)> + '_ {
        self.edges
            .windows(2)
            .zip(self.counts.iter())
            .map(|(e, &c)| (e[0], e[1], c))
    }
}
