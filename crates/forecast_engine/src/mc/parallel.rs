//! Column-chunked parallelism settings for the row recurrence.

/// Default number of path columns advanced per Rayon task.
pub const DEFAULT_BATCH_SIZE: usize = 1024;

/// Default minimum path count before a row is advanced in parallel.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

/// Configuration for parallel execution of a row update.
///
/// The partitioning never affects results: every column is advanced with
/// the same shock regardless of which task owns it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Columns per chunk
    pub batch_size: usize,
    /// Minimum columns before using parallelism
    pub parallel_threshold: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl ParallelConfig {
    /// Creates a new parallel configuration.
    pub fn new(batch_size: usize, parallel_threshold: usize) -> Self {
        Self {
            batch_size: batch_size.max(1),
            parallel_threshold,
        }
    }

    /// Configuration that always advances rows on the calling thread.
    pub fn sequential() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            parallel_threshold: usize::MAX,
        }
    }

    /// Returns whether to use parallel processing for the given column count.
    #[inline]
    pub fn should_parallelize(&self, n_columns: usize) -> bool {
        n_columns >= self.parallel_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallel_config_default() {
        let config = ParallelConfig::default();
        assert_eq!(config.batch_size, DEFAULT_BATCH_SIZE);
        assert!(!config.should_parallelize(100));
        assert!(config.should_parallelize(20_000));
    }

    #[test]
    fn test_batch_size_floor() {
        assert_eq!(ParallelConfig::new(0, 1).batch_size, 1);
    }

    #[test]
    fn test_sequential_never_parallelizes() {
        assert!(!ParallelConfig::sequential().should_parallelize(10_000_000));
    }
}
