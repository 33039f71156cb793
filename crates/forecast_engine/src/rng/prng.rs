//! Seeded pseudo-random normal source for Monte Carlo simulation.
//!
//! This module provides [`ForecastRng`], a seeded PRNG wrapper offering
//! reproducible standard-normal draws with zero-allocation batch filling.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};

use super::source::{NormalSource, SourceError};

/// Seeded random number generator for path simulation.
///
/// The seed is retained so that runs started from OS entropy can still be
/// logged and reproduced.
///
/// # Examples
///
/// ```rust
/// use forecast_engine::rng::ForecastRng;
///
/// let mut rng = ForecastRng::from_seed(42);
/// assert_eq!(rng.seed(), 42);
///
/// let mut buffer = vec![0.0; 100];
/// rng.fill_normal(&mut buffer);
/// ```
pub struct ForecastRng {
    inner: StdRng,
    seed: u64,
}

impl ForecastRng {
    /// Creates a generator initialised with the given seed.
    ///
    /// The same seed always produces the same sequence of draws.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a generator from a seed drawn from OS entropy.
    ///
    /// The drawn seed is available via [`seed`](Self::seed).
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::random())
    }

    /// Creates a generator from an optional seed, falling back to entropy.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::from_seed)
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generates a single standard normal variate (Ziggurat method).
    #[inline]
    pub fn gen_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.inner)
    }

    /// Fills the buffer with standard normal variates in index order.
    ///
    /// Zero-allocation; empty buffers are a no-op.
    #[inline]
    pub fn fill_normal(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.gen_normal();
        }
    }
}

impl NormalSource for ForecastRng {
    #[inline]
    fn fill_standard_normal(&mut self, buffer: &mut [f64]) -> Result<(), SourceError> {
        self.fill_normal(buffer);
        Ok(())
    }
}

impl std::fmt::Debug for ForecastRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForecastRng").field("seed", &self.seed).finish()
    }
}
