//! Sample statistics used by return estimation and distribution summaries.
//!
//! - [`moments`]: Welford online mean/variance accumulator
//! - [`quantile`]: Arithmetic mean and linear-interpolation percentiles
//! - [`histogram`]: Equal-width histograms

pub mod histogram;
pub mod moments;
pub mod quantile;

pub use histogram::Histogram;
pub use moments::RunningMoments;
pub use quantile::{mean, percentile_linear, percentile_sorted};
