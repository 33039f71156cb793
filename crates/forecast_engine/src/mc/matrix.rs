//! Simulated price path storage.
//!
//! # Memory Layout
//!
//! Prices are stored row-major: `data[day * num_simulations + sim]`, so a
//! row is one contiguous slice holding every path at the same day. Row 0
//! holds the starting price in every column.

use forecast_core::math::mean;

/// Matrix of simulated prices, `num_days` rows by `num_simulations` columns.
///
/// Produced only by the simulator, fully populated, and immutable
/// afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct PathMatrix {
    data: Vec<f64>,
    num_days: usize,
    num_simulations: usize,
}

impl PathMatrix {
    /// Allocates a matrix whose row 0 is `initial` and whose other rows are zero.
    pub(crate) fn with_initial_row(num_days: usize, num_simulations: usize, initial: f64) -> Self {
        let mut data = vec![0.0; num_days * num_simulations];
        data[..num_simulations].fill(initial);
        Self {
            data,
            num_days,
            num_simulations,
        }
    }

    /// Returns `(previous_row, current_row)` for advancing the recurrence.
    ///
    /// `day` must be in `1..num_days`.
    pub(crate) fn split_rows_mut(&mut self, day: usize) -> (&[f64], &mut [f64]) {
        let n = self.num_simulations;
        let (head, tail) = self.data.split_at_mut(day * n);
        (&head[(day - 1) * n..], &mut tail[..n])
    }

    /// Number of rows (days, including the starting row).
    #[inline]
    pub fn num_days(&self) -> usize {
        self.num_days
    }

    /// Number of columns (paths).
    #[inline]
    pub fn num_simulations(&self) -> usize {
        self.num_simulations
    }

    /// Returns all paths at `day`.
    ///
    /// # Panics
    ///
    /// Panics if `day >= num_days`.
    #[inline]
    pub fn row(&self, day: usize) -> &[f64] {
        assert!(day < self.num_days, "day {} out of range", day);
        let start = day * self.num_simulations;
        &self.data[start..start + self.num_simulations]
    }

    /// Returns the final row: every path's price at the horizon.
    #[inline]
    pub fn terminal_row(&self) -> &[f64] {
        self.row(self.num_days - 1)
    }

    /// Returns the price of path `sim` on `day`, or `None` if out of range.
    #[inline]
    pub fn get(&self, day: usize, sim: usize) -> Option<f64> {
        if day < self.num_days && sim < self.num_simulations {
            Some(self.data[day * self.num_simulations + sim])
        } else {
            None
        }
    }

    /// Returns path `sim` across all days.
    ///
    /// # Panics
    ///
    /// Panics if `sim >= num_simulations`.
    pub fn column(&self, sim: usize) -> Vec<f64> {
        assert!(sim < self.num_simulations, "path {} out of range", sim);
        self.data
            .iter()
            .skip(sim)
            .step_by(self.num_simulations)
            .copied()
            .collect()
    }

    /// Returns the first `min(k, num_simulations)` paths as columns.
    pub fn columns_subsample(&self, k: usize) -> Vec<Vec<f64>> {
        (0..k.min(self.num_simulations))
            .map(|sim| self.column(sim))
            .collect()
    }

    /// Returns the cross-path mean price for each day.
    ///
    /// A row holding one price in every column averages to exactly that
    /// price, so the first entry always equals the starting price.
    pub fn row_means(&self) -> Vec<f64> {
        self.data
            .chunks_exact(self.num_simulations)
            .filter_map(|row| mean(row).ok())
            .collect()
    }

    /// Returns the raw row-major storage.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}
