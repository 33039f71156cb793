//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Both commands share the
//! history loading step below.

pub mod estimate;
pub mod simulate;

use adapter_feeds::{CsvPriceFeed, MarketDataProvider, PriceRequest};
use forecast_core::types::PriceSeries;
use tracing::info;

use crate::config::ForecastConfig;
use crate::{CliError, Result};

/// Builds the market data provider described by the configuration.
pub fn provider_for(config: &ForecastConfig) -> Result<Box<dyn MarketDataProvider>> {
    let path = config.data_file.as_ref().ok_or_else(|| {
        CliError::InvalidArgument(
            "no market data source configured: pass --data-file or set FORECAST_DATA_FILE"
                .to_string(),
        )
    })?;

    let feed = if path.is_dir() {
        CsvPriceFeed::from_directory(path)
    } else {
        CsvPriceFeed::from_file(path)
    };
    Ok(Box::new(feed.with_price_column(config.price_column.clone())))
}

/// Builds the history request for the configured instrument and window.
pub fn request_for(config: &ForecastConfig) -> PriceRequest {
    PriceRequest::new(
        config.instrument.clone(),
        config.start_date,
        config.resolved_end_date(),
    )
}

/// Fetches the configured price history.
pub fn load_history(
    config: &ForecastConfig,
    provider: &dyn MarketDataProvider,
) -> Result<(PriceRequest, PriceSeries)> {
    let request = request_for(config);
    info!(
        provider = provider.name(),
        instrument = %request.instrument,
        start = %request.start,
        end = %request.end,
        "Fetching price history"
    );
    let series = provider.fetch(&request)?;
    info!(observations = series.len(), "Price history loaded");
    Ok((request, series))
}
