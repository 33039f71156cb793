//! # adapter_feeds: Historical Price Feeds (Adapter Layer)
//!
//! Retrieves daily price histories for the forecaster:
//! - [`MarketDataProvider`]: the provider abstraction over a
//!   [`PriceRequest`] (instrument plus half-open date range)
//! - [`CsvPriceFeed`]: files in the common `Date,...,Close,Adj Close,...`
//!   download layout
//! - [`InMemoryFeed`]: pre-loaded series
//!
//! Providers never return an empty series: an empty selection is reported
//! as [`FeedError::NoDataAvailable`].

#![deny(missing_docs)]

pub mod csv_file;
pub mod error;
pub mod memory;
pub mod provider;

pub use csv_file::{read_prices, read_prices_from_path, CsvPriceFeed, LoadReport, PriceColumn};
pub use error::FeedError;
pub use memory::InMemoryFeed;
pub use provider::{MarketDataProvider, PriceRequest};
