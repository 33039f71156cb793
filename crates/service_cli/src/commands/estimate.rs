//! Estimate command implementation
//!
//! Prints the historical return statistics without simulating.

use adapter_feeds::MarketDataProvider;
use forecast_engine::estimate_returns;
use tracing::info;

use super::load_history;
use crate::config::ForecastConfig;
use crate::report::EstimateReport;
use crate::Result;

/// Fetches history and estimates return statistics.
pub fn execute(config: &ForecastConfig, provider: &dyn MarketDataProvider) -> Result<EstimateReport> {
    let (request, series) = load_history(config, provider)?;
    let stats = estimate_returns(&series)?;
    info!(
        mean_daily_return = stats.mean_daily_return,
        daily_std_dev = stats.daily_std_dev,
        last_price = stats.last_price,
        "Return statistics estimated"
    );

    Ok(EstimateReport {
        instrument: request.instrument,
        start_date: request.start,
        end_date: request.end,
        observations: series.len(),
        stats,
    })
}

/// Run the estimate command
pub fn run(config: &ForecastConfig) -> Result<()> {
    let provider = super::provider_for(config)?;
    let report = execute(config, provider.as_ref())?;
    println!("{}", report.render(config.output)?);
    Ok(())
}
