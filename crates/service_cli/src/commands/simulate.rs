//! Simulate command implementation
//!
//! Fetches history, estimates return statistics, simulates GBM paths and
//! renders the forecast report.

use adapter_feeds::MarketDataProvider;
use forecast_engine::{PathSimulator, SimulationConfig, SimulationError};
use tracing::info;

use super::estimate;
use crate::config::ForecastConfig;
use crate::report::ForecastReport;
use crate::Result;

/// Runs the full forecast pipeline with the given simulator.
pub fn execute(
    config: &ForecastConfig,
    provider: &dyn MarketDataProvider,
    simulator: &PathSimulator,
) -> Result<ForecastReport> {
    let estimate = estimate::execute(config, provider)?;

    let sim_config = SimulationConfig::builder()
        .num_days(config.num_days)
        .num_simulations(config.num_simulations)
        .maybe_seed(config.seed)
        .build()
        .map_err(SimulationError::from)?;

    info!(
        num_days = sim_config.num_days(),
        num_simulations = sim_config.num_simulations(),
        "Running simulation"
    );
    let outcome = simulator.run_seeded(&estimate.stats, &sim_config)?;
    if config.seed.is_none() {
        if let Some(seed) = outcome.seed {
            info!(seed, "No seed configured; drew one from OS entropy");
        }
    }
    info!(
        expected_price = outcome.summary.expected_price,
        lower_bound_5pct = outcome.summary.lower_bound_5pct,
        upper_bound_95pct = outcome.summary.upper_bound_95pct,
        "Simulation complete"
    );

    Ok(ForecastReport::build(
        estimate,
        &outcome,
        config.display_paths,
        config.histogram_bins,
    )?)
}

/// Run the simulate command
pub fn run(config: &ForecastConfig) -> Result<()> {
    let provider = super::provider_for(config)?;
    let report = execute(config, provider.as_ref(), &PathSimulator::new())?;
    println!("{}", report.render(config.output)?);
    Ok(())
}
