//! Standard-normal draw capability.

use thiserror::Error;

/// Failure of a random source to produce draws.
///
/// Any source failure is fatal to the simulation run that requested the
/// draws.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// The source has no more draws to give.
    #[error("Random source exhausted: requested {requested} draws, {available} available")]
    Exhausted {
        /// Number of draws requested
        requested: usize,
        /// Number of draws remaining in the source
        available: usize,
    },

    /// Source-specific failure.
    #[error("Random source failure: {0}")]
    Failure(String),
}

/// A source of independent standard-normal (mean 0, variance 1) draws.
///
/// Implementations must fill `buffer` in index order, consuming draws
/// sequentially, so that a deterministic source yields a deterministic
/// simulation.
///
/// # Examples
///
/// ```rust
/// use forecast_engine::rng::{NormalSource, SourceError};
///
/// /// Always draws zero: turns GBM into pure drift.
/// struct Zeros;
///
/// impl NormalSource for Zeros {
///     fn fill_standard_normal(&mut self, buffer: &mut [f64]) -> Result<(), SourceError> {
///         buffer.fill(0.0);
///         Ok(())
///     }
/// }
///
/// let mut buf = [1.0; 4];
/// Zeros.fill_standard_normal(&mut buf).unwrap();
/// assert_eq!(buf, [0.0; 4]);
/// ```
pub trait NormalSource {
    /// Fills `buffer` with standard-normal draws.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` if the source cannot supply `buffer.len()` draws.
    /// The buffer contents are unspecified on error.
    fn fill_standard_normal(&mut self, buffer: &mut [f64]) -> Result<(), SourceError>;
}

impl<S: NormalSource + ?Sized> NormalSource for &mut S {
    #[inline]
    fn fill_standard_normal(&mut self, buffer: &mut [f64]) -> Result<(), SourceError> {
        (**self).fill_standard_normal(buffer)
    }
}

impl<S: NormalSource + ?Sized> NormalSource for Box<S> {
    #[inline]
    fn fill_standard_normal(&mut self, buffer: &mut [f64]) -> Result<(), SourceError> {
        (**self).fill_standard_normal(buffer)
    }
}
