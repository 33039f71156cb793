//! Replay of a pre-recorded draw sequence.
//!
//! Useful for reproducing a run from recorded shocks and for exercising the
//! simulator with hand-picked draws.

use super::source::{NormalSource, SourceError};

/// A [`NormalSource`] that hands out a fixed sequence of draws in order.
///
/// Requesting more draws than remain fails with
/// [`SourceError::Exhausted`] without consuming anything.
///
/// # Examples
///
/// ```rust
/// use forecast_engine::rng::{NormalSource, ReplaySource};
///
/// let mut source = ReplaySource::new(vec![0.5, -0.5, 1.0]);
/// let mut buf = [0.0; 2];
/// source.fill_standard_normal(&mut buf).unwrap();
/// assert_eq!(buf, [0.5, -0.5]);
/// assert_eq!(source.remaining(), 1);
///
/// assert!(source.fill_standard_normal(&mut buf).is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ReplaySource {
    draws: Vec<f64>,
    position: usize,
}

impl ReplaySource {
    /// Creates a source replaying `draws` from the beginning.
    pub fn new(draws: Vec<f64>) -> Self {
        Self { draws, position: 0 }
    }

    /// Returns the number of draws not yet consumed.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.draws.len() - self.position
    }

    /// Returns the number of draws consumed so far.
    #[inline]
    pub fn consumed(&self) -> usize {
        self.position
    }

    /// Rewinds to the first draw.
    pub fn rewind(&mut self) {
        self.position = 0;
    }
}

impl NormalSource for ReplaySource {
    fn fill_standard_normal(&mut self, buffer: &mut [f64]) -> Result<(), SourceError> {
        let available = self.remaining();
        if buffer.len() > available {
            return Err(SourceError::Exhausted {
                requested: buffer.len(),
                available,
            });
        }
        let end = self.position + buffer.len();
        buffer.copy_from_slice(&self.draws[self.position..end]);
        self.position = end;
        Ok(())
    }
}
