//! Analytical comparison tests for the GBM path simulator.
//!
//! Under the log-space scheme the terminal price is exactly lognormal:
//!
//! ```text
//! ln S_T ~ N(ln S_0 + (μ - σ²/2)·T, σ²·T),   T = num_days - 1
//! ```
//!
//! so the simulated mean and percentiles can be checked against closed forms.

use approx::assert_relative_eq;
use forecast_engine::estimator::ReturnStats;
use forecast_engine::mc::{ParallelConfig, PathSimulator, SimulationConfig};
use forecast_engine::rng::ForecastRng;

/// z-score of the 95th percentile of the standard normal.
const Z_95: f64 = 1.644_853_626_951_472_2;

fn lognormal_params(stats: &ReturnStats, horizon: f64) -> (f64, f64) {
    let sigma = stats.daily_std_dev;
    let m = stats.last_price.ln() + (stats.mean_daily_return - 0.5 * sigma * sigma) * horizon;
    let s = sigma * horizon.sqrt();
    (m, s)
}

fn config(num_days: usize, num_simulations: usize, seed: u64) -> SimulationConfig {
    SimulationConfig::builder()
        .num_days(num_days)
        .num_simulations(num_simulations)
        .seed(seed)
        .build()
        .unwrap()
}

// ============================================================================
// Terminal Distribution Tests
// ============================================================================

#[test]
fn test_terminal_mean_matches_lognormal_expectation() {
    let stats = ReturnStats::new(0.0008, 0.02, 100.0);
    let outcome = PathSimulator::new()
        .run_seeded(&stats, &config(61, 100_000, 42))
        .unwrap();

    let expected = 100.0 * (0.0008_f64 * 60.0).exp();
    assert_relative_eq!(outcome.summary.expected_price, expected, max_relative = 0.005);
}

#[test]
fn test_terminal_percentiles_match_lognormal_quantiles() {
    let stats = ReturnStats::new(0.0005, 0.015, 250.0);
    let outcome = PathSimulator::new()
        .run_seeded(&stats, &config(121, 100_000, 7))
        .unwrap();

    let (m, s) = lognormal_params(&stats, 120.0);
    assert_relative_eq!(
        outcome.summary.lower_bound_5pct,
        (m - Z_95 * s).exp(),
        max_relative = 0.01
    );
    assert_relative_eq!(
        outcome.summary.upper_bound_95pct,
        (m + Z_95 * s).exp(),
        max_relative = 0.01
    );
}

#[test]
fn test_mean_path_tracks_exponential_drift() {
    let stats = ReturnStats::new(-0.001, 0.01, 40.0);
    let outcome = PathSimulator::new()
        .run_seeded(&stats, &config(31, 50_000, 2024))
        .unwrap();

    let means = outcome.paths.row_means();
    assert_eq!(means.len(), 31);
    assert_eq!(means[0], 40.0);
    for (t, &mean) in means.iter().enumerate() {
        let expected = 40.0 * (-0.001 * t as f64).exp();
        assert_relative_eq!(mean, expected, max_relative = 0.003);
    }
}

// ============================================================================
// Reproducibility Tests
// ============================================================================

#[test]
fn test_thread_count_does_not_change_results() {
    let stats = ReturnStats::new(0.0003, 0.025, 99.0);
    let cfg = config(40, 20_000, 42);

    let reference = PathSimulator::new()
        .with_parallel(ParallelConfig::sequential())
        .run(&stats, &cfg, &mut ForecastRng::from_seed(42))
        .unwrap();

    for threads in [1, 2, 4] {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .unwrap();
        let outcome = pool.install(|| {
            PathSimulator::new()
                .with_parallel(ParallelConfig::new(256, 1))
                .run(&stats, &cfg, &mut ForecastRng::from_seed(42))
                .unwrap()
        });
        assert_eq!(outcome.paths, reference.paths, "threads = {}", threads);
        assert_eq!(outcome.summary, reference.summary);
    }
}

#[test]
fn test_different_seeds_differ() {
    let stats = ReturnStats::new(0.0003, 0.025, 99.0);
    let a = PathSimulator::new()
        .run_seeded(&stats, &config(10, 1_000, 1))
        .unwrap();
    let b = PathSimulator::new()
        .run_seeded(&stats, &config(10, 1_000, 2))
        .unwrap();
    assert_ne!(a.paths.terminal_row(), b.paths.terminal_row());
}
