//! GBM path simulator.
//!
//! Generates the full path matrix with the log-space exact scheme:
//!
//! ```text
//! S[t][i] = S[t-1][i] × exp((μ - σ²/2)·Δt + σ·√Δt·Z[t][i])
//! ```
//!
//! # Draw order
//!
//! Shocks are consumed row by row: all `num_simulations` draws for day 1,
//! then all draws for day 2, and so on. Each row's shock vector is filled
//! from the source on the calling thread, then the row is advanced over
//! disjoint column chunks with Rayon. The same source state therefore
//! yields a bit-identical matrix regardless of thread count or chunk size.

use rayon::prelude::*;
use tracing::debug;

use super::cancel::CancellationToken;
use super::config::SimulationConfig;
use super::error::SimulationError;
use super::matrix::PathMatrix;
use super::parallel::ParallelConfig;
use super::summary::TerminalDistributionSummary;
use crate::estimator::ReturnStats;
use crate::rng::{ForecastRng, NormalSource};

/// Result of a complete simulation run.
#[derive(Clone, Debug)]
pub struct SimulationOutcome {
    /// Fully populated path matrix.
    pub paths: PathMatrix,
    /// Summary of the terminal row.
    pub summary: TerminalDistributionSummary,
    /// Seed that drove the run, when known.
    pub seed: Option<u64>,
}

/// Per-step GBM coefficients.
#[derive(Clone, Copy, Debug)]
struct StepCoefficients {
    drift: f64,
    diffusion: f64,
}

impl StepCoefficients {
    fn new(stats: &ReturnStats, dt: f64) -> Self {
        let sigma = stats.daily_std_dev;
        Self {
            drift: (stats.mean_daily_return - 0.5 * sigma * sigma) * dt,
            diffusion: sigma * dt.sqrt(),
        }
    }

    /// Advances one chunk of columns; returns `false` if any result is
    /// non-positive or non-finite.
    #[inline]
    fn advance(&self, previous: &[f64], current: &mut [f64], shocks: &[f64]) -> bool {
        let mut healthy = true;
        for ((next, &prev), &z) in current.iter_mut().zip(previous).zip(shocks) {
            *next = prev * (self.drift + self.diffusion * z).exp();
            healthy &= next.is_finite() && *next > 0.0;
        }
        healthy
    }
}

/// GBM path simulator.
///
/// Stateless apart from its execution settings; one simulator can serve
/// many runs.
///
/// # Examples
///
/// ```rust
/// use forecast_engine::estimator::ReturnStats;
/// use forecast_engine::mc::{PathSimulator, SimulationConfig};
/// use forecast_engine::rng::ReplaySource;
///
/// // Two days, two paths: one row of shocks is consumed.
/// let stats = ReturnStats::new(0.0, 0.1, 100.0);
/// let config = SimulationConfig::builder().num_days(2).num_simulations(2).build().unwrap();
/// let mut source = ReplaySource::new(vec![1.0, -1.0]);
///
/// let paths = PathSimulator::new().generate(&stats, &config, &mut source).unwrap();
/// assert!(paths.row(1)[0] > 100.0);
/// assert!(paths.row(1)[1] < 100.0);
/// assert_eq!(source.remaining(), 0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PathSimulator {
    parallel: ParallelConfig,
    cancellation: Option<CancellationToken>,
}

impl PathSimulator {
    /// Creates a simulator with default parallel settings and no cancellation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the parallel execution settings.
    pub fn with_parallel(mut self, parallel: ParallelConfig) -> Self {
        self.parallel = parallel;
        self
    }

    /// Attaches a cancellation token checked before every row.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Returns the parallel execution settings.
    #[inline]
    pub fn parallel(&self) -> &ParallelConfig {
        &self.parallel
    }

    /// Generates the full path matrix.
    ///
    /// Consumes exactly `(num_days - 1) * num_simulations` draws from
    /// `source` on success.
    ///
    /// # Errors
    ///
    /// - `SimulationError::InvalidConfig` if the configuration is out of range
    /// - `SimulationError::InvalidStats` if σ is negative or non-finite, μ is
    ///   non-finite, or the starting price is not positive and finite
    /// - `SimulationError::Source` / `NonFiniteDraw` if the source misbehaves
    /// - `SimulationError::NumericalBreakdown` if a price overflows or underflows
    /// - `SimulationError::Cancelled` if the token fires mid-run
    pub fn generate<S>(
        &self,
        stats: &ReturnStats,
        config: &SimulationConfig,
        source: &mut S,
    ) -> Result<PathMatrix, SimulationError>
    where
        S: NormalSource + ?Sized,
    {
        config.validate()?;
        validate_stats(stats)?;

        let num_days = config.num_days();
        let num_simulations = config.num_simulations();
        let coefficients = StepCoefficients::new(stats, config.time_step_days());
        let parallel = self.parallel.should_parallelize(num_simulations);
        let batch_size = self.parallel.batch_size.max(1);

        debug!(
            num_days,
            num_simulations,
            drift = coefficients.drift,
            diffusion = coefficients.diffusion,
            parallel,
            "Generating GBM paths"
        );

        let mut paths = PathMatrix::with_initial_row(num_days, num_simulations, stats.last_price);
        let mut shocks = vec![0.0; num_simulations];

        for day in 1..num_days {
            if self.is_cancelled() {
                debug!(completed_rows = day, "Simulation cancelled");
                return Err(SimulationError::Cancelled {
                    completed_rows: day,
                });
            }

            source
                .fill_standard_normal(&mut shocks)
                .map_err(|err| SimulationError::Source {
                    row: day,
                    source: err,
                })?;
            if let Some(column) = shocks.iter().position(|z| !z.is_finite()) {
                return Err(SimulationError::NonFiniteDraw { row: day, column });
            }

            let (previous, current) = paths.split_rows_mut(day);
            let healthy = if parallel {
                current
                    .par_chunks_mut(batch_size)
                    .zip(previous.par_chunks(batch_size))
                    .zip(shocks.par_chunks(batch_size))
                    .map(|((cur, prev), z)| coefficients.advance(prev, cur, z))
                    .reduce(|| true, |a, b| a && b)
            } else {
                coefficients.advance(previous, current, &shocks)
            };
            if !healthy {
                return Err(SimulationError::NumericalBreakdown { row: day });
            }
        }

        Ok(paths)
    }

    /// Generates the path matrix and summarises its terminal row.
    ///
    /// The outcome records `config.seed()`; the caller is responsible for
    /// having seeded `source` accordingly.
    pub fn run<S>(
        &self,
        stats: &ReturnStats,
        config: &SimulationConfig,
        source: &mut S,
    ) -> Result<SimulationOutcome, SimulationError>
    where
        S: NormalSource + ?Sized,
    {
        let paths = self.generate(stats, config, source)?;
        let summary = TerminalDistributionSummary::from_terminal_row(paths.terminal_row())?;
        debug!(
            expected_price = summary.expected_price,
            lower = summary.lower_bound_5pct,
            upper = summary.upper_bound_95pct,
            "Terminal distribution summarised"
        );
        Ok(SimulationOutcome {
            paths,
            summary,
            seed: config.seed(),
        })
    }

    /// Runs with a [`ForecastRng`] seeded from `config.seed()`, or from OS
    /// entropy when no seed is configured.
    ///
    /// The seed actually used is always reported in the outcome.
    pub fn run_seeded(
        &self,
        stats: &ReturnStats,
        config: &SimulationConfig,
    ) -> Result<SimulationOutcome, SimulationError> {
        let mut rng = ForecastRng::from_optional_seed(config.seed());
        let seed = rng.seed();
        let mut outcome = self.run(stats, config, &mut rng)?;
        outcome.seed = Some(seed);
        Ok(outcome)
    }

    fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
    }
}

fn validate_stats(stats: &ReturnStats) -> Result<(), SimulationError> {
    if !stats.mean_daily_return.is_finite() {
        return Err(SimulationError::invalid_stats(
            "mean_daily_return",
            format!("must be finite, got {}", stats.mean_daily_return),
        ));
    }
    if !stats.daily_std_dev.is_finite() || stats.daily_std_dev < 0.0 {
        return Err(SimulationError::invalid_stats(
            "daily_std_dev",
            format!("must be non-negative and finite, got {}", stats.daily_std_dev),
        ));
    }
    if !stats.last_price.is_finite() || stats.last_price <= 0.0 {
        return Err(SimulationError::invalid_stats(
            "last_price",
            format!("must be positive and finite, got {}", stats.last_price),
        ));
    }
    Ok(())
}
