//! CSV price history source.
//!
//! Reads daily price files with a `Date` column and one or more price
//! columns, in the layout produced by common market-data downloads:
//!
//! ```text
//! Date,Open,High,Low,Close,Adj Close,Volume
//! 2018-01-02,42.54,43.07,42.31,43.06,40.78,102223600
//! ```
//!
//! The adjusted close is preferred when present, falling back to `Close`.
//! Rows with an empty or `null` price are skipped with a warning. Rows may
//! appear in any date order; duplicate dates are rejected.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use forecast_core::types::{Date, PricePoint, PriceSeries};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::FeedError;
use crate::provider::{select_range, MarketDataProvider, PriceRequest};

/// Header of the date column (matched case-insensitively).
pub const DATE_COLUMN: &str = "Date";

/// Preferred price column.
pub const ADJ_CLOSE_COLUMN: &str = "Adj Close";

/// Fallback price column.
pub const CLOSE_COLUMN: &str = "Close";

/// Which column supplies the price.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceColumn {
    /// `Adj Close` if present, otherwise `Close`.
    #[default]
    Auto,
    /// An explicitly named column.
    Named(String),
}

impl PriceColumn {
    /// Resolves the column index within `headers`.
    fn resolve(&self, headers: &StringRecord) -> Result<(usize, String), FeedError> {
        let candidates: Vec<&str> = match self {
            PriceColumn::Auto => vec![ADJ_CLOSE_COLUMN, CLOSE_COLUMN],
            PriceColumn::Named(name) => vec![name.as_str()],
        };
        candidates
            .iter()
            .find_map(|wanted| {
                find_column(headers, wanted).map(|idx| (idx, headers[idx].to_string()))
            })
            .ok_or_else(|| missing_column(headers, &candidates.join("' or '")))
    }
}

impl std::str::FromStr for PriceColumn {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("auto") {
            Ok(PriceColumn::Auto)
        } else {
            Ok(PriceColumn::Named(s.trim().to_string()))
        }
    }
}

/// Statistics from parsing one CSV source.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Header of the price column actually used.
    pub price_column: String,
    /// Rows accepted.
    pub rows_loaded: usize,
    /// Rows skipped for a missing price.
    pub rows_skipped: usize,
}

/// Where CSV files are found.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Location {
    /// One file, whatever instrument is requested.
    File(PathBuf),
    /// One `<instrument>.csv` file per instrument.
    Directory(PathBuf),
}

/// CSV-backed price history provider.
///
/// # Examples
///
/// ```rust,no_run
/// use adapter_feeds::{CsvPriceFeed, MarketDataProvider, PriceRequest};
/// use forecast_core::types::Date;
///
/// let feed = CsvPriceFeed::from_file("data/AAPL.csv");
/// let request = PriceRequest::new(
///     "AAPL",
///     Date::from_ymd(2018, 1, 1).unwrap(),
///     Date::from_ymd(2024, 1, 1).unwrap(),
/// );
/// let series = feed.fetch(&request).unwrap();
/// println!("{} observations", series.len());
/// ```
#[derive(Clone, Debug)]
pub struct CsvPriceFeed {
    location: Location,
    column: PriceColumn,
}

impl CsvPriceFeed {
    /// Feed reading a single file for every request.
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            location: Location::File(path.into()),
            column: PriceColumn::Auto,
        }
    }

    /// Feed reading `<dir>/<instrument>.csv`.
    pub fn from_directory(dir: impl Into<PathBuf>) -> Self {
        Self {
            location: Location::Directory(dir.into()),
            column: PriceColumn::Auto,
        }
    }

    /// Overrides the price column preference.
    pub fn with_price_column(mut self, column: PriceColumn) -> Self {
        self.column = column;
        self
    }

    /// Returns the file path used for `instrument`.
    pub fn path_for(&self, instrument: &str) -> PathBuf {
        match &self.location {
            Location::File(path) => path.clone(),
            Location::Directory(dir) => dir.join(format!("{}.csv", instrument)),
        }
    }

    /// Loads the full history for `instrument`, ignoring any date range.
    pub fn load(&self, instrument: &str) -> Result<(PriceSeries, LoadReport), FeedError> {
        let path = self.path_for(instrument);
        let (series, report) = read_prices_from_path(&path, &self.column)?;
        info!(
            instrument,
            path = %path.display(),
            column = %report.price_column,
            rows = report.rows_loaded,
            skipped = report.rows_skipped,
            "Loaded price history"
        );
        Ok((series, report))
    }
}

impl MarketDataProvider for CsvPriceFeed {
    fn name(&self) -> &str {
        "csv"
    }

    fn fetch(&self, request: &PriceRequest) -> Result<PriceSeries, FeedError> {
        request.validate()?;
        let (history, _) = self.load(&request.instrument)?;
        select_range(&history, request)
    }
}

/// Parses a price history from any CSV reader.
///
/// # Errors
///
/// - `FeedError::Csv` for malformed CSV
/// - `FeedError::MissingColumn` if the date or price column is absent
/// - `FeedError::Date` / `FeedError::Parse` for unparseable cells
/// - `FeedError::UnsortedSeries` if two rows share a date
pub fn read_prices<R: Read>(
    reader: R,
    column: &PriceColumn,
) -> Result<(PriceSeries, LoadReport), FeedError> {
    let mut csv = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let headers = csv.headers()?.clone();

    let date_idx =
        find_column(&headers, DATE_COLUMN).ok_or_else(|| missing_column(&headers, DATE_COLUMN))?;
    let (price_idx, price_column) = column.resolve(&headers)?;

    let mut points = Vec::new();
    let mut rows_skipped = 0;
    for record in csv.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());

        let raw_price = record.get(price_idx).unwrap_or("");
        if is_missing(raw_price) {
            warn!(line, column = %price_column, "Skipping row with missing price");
            rows_skipped += 1;
            continue;
        }
        let price: f64 = raw_price.parse().map_err(|_| FeedError::Parse {
            field: "price",
            value: raw_price.to_string(),
            line,
        })?;

        let raw_date = record.get(date_idx).unwrap_or("");
        let date = Date::parse(date_part(raw_date))
            .map_err(|source| FeedError::Date { line, source })?;

        points.push(PricePoint::new(date, price));
    }

    points.sort_by_key(|p| p.date);
    let rows_loaded = points.len();
    let series = PriceSeries::new(points)?;

    Ok((
        series,
        LoadReport {
            price_column,
            rows_loaded,
            rows_skipped,
        },
    ))
}

/// Convenience wrapper around [`read_prices`] for a file path.
pub fn read_prices_from_path(
    path: impl AsRef<Path>,
    column: &PriceColumn,
) -> Result<(PriceSeries, LoadReport), FeedError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| FeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_prices(file, column)
}

fn find_column(headers: &StringRecord, wanted: &str) -> Option<usize> {
    headers.iter().position(|h| h.eq_ignore_ascii_case(wanted))
}

fn missing_column(headers: &StringRecord, wanted: &str) -> FeedError {
    FeedError::MissingColumn {
        column: wanted.to_string(),
        available: headers.iter().collect::<Vec<_>>().join(", "),
    }
}

fn is_missing(cell: &str) -> bool {
    cell.is_empty() || cell.eq_ignore_ascii_case("null") || cell.eq_ignore_ascii_case("nan")
}

/// Strips a time-of-day suffix (`2018-01-02 00:00:00-05:00`, `2018-01-02T00:00`).
fn date_part(cell: &str) -> &str {
    cell.split([' ', 'T']).next().unwrap_or(cell)
}

#[cfg(test)]
mod tests {
    use super::*;

    const YAHOO: &str = "\
Date,Open,High,Low,Close,Adj Close,Volume
2018-01-02,42.54,43.07,42.31,43.06,40.78,102223600
2018-01-03,43.13,43.63,42.99,43.05,40.77,118071600
2018-01-04,43.13,43.36,43.02,43.25,40.96,89738400
";

    #[test]
    fn test_prefers_adj_close() {
        let (series, report) = read_prices(YAHOO.as_bytes(), &PriceColumn::Auto).unwrap();
        assert_eq!(report.price_column, "Adj Close");
        assert_eq!(report.rows_loaded, 3);
        assert_eq!(series.prices().collect::<Vec<_>>(), vec![40.78, 40.77, 40.96]);
    }

    #[test]
    fn test_falls_back_to_close() {
        let csv = "Date,Close\n2018-01-02,43.06\n2018-01-03,43.05\n";
        let (series, report) = read_prices(csv.as_bytes(), &PriceColumn::Auto).unwrap();
        assert_eq!(report.price_column, "Close");
        assert_eq!(series.last_price(), Some(43.05));
    }

    #[test]
    fn test_named_column_override() {
        let column = PriceColumn::Named("open".into());
        let (series, report) = read_prices(YAHOO.as_bytes(), &column).unwrap();
        assert_eq!(report.price_column, "Open");
        assert_eq!(series.first().map(|p| p.price), Some(42.54));
    }

    #[test]
    fn test_missing_price_column() {
        let csv = "Date,Open\n2018-01-02,1.0\n";
        let err = read_prices(csv.as_bytes(), &PriceColumn::Auto).unwrap_err();
        match err {
            FeedError::MissingColumn { column, available } => {
                assert!(column.contains("Adj Close"));
                assert!(column.contains("Close"));
                assert_eq!(available, "Date, Open");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_missing_date_column() {
        let csv = "Day,Close\n2018-01-02,1.0\n";
        let err = read_prices(csv.as_bytes(), &PriceColumn::Auto).unwrap_err();
        assert!(matches!(err, FeedError::MissingColumn { ref column, .. } if column == "Date"));
    }

    #[test]
    fn test_skips_null_prices() {
        let csv = "Date,Close\n2018-01-02,10\n2018-01-03,null\n2018-01-04,\n2018-01-05,11\n";
        let (series, report) = read_prices(csv.as_bytes(), &PriceColumn::Auto).unwrap();
        assert_eq!(report.rows_loaded, 2);
        assert_eq!(report.rows_skipped, 2);
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn test_bad_price_reports_line() {
        let csv = "Date,Close\n2018-01-02,10\n2018-01-03,abc\n";
        let err = read_prices(csv.as_bytes(), &PriceColumn::Auto).unwrap_err();
        assert!(matches!(
            err,
            FeedError::Parse { field: "price", line: 3, .. }
        ));
    }

    #[test]
    fn test_bad_date() {
        let csv = "Date,Close\n01/02/2018,10\n";
        let err = read_prices(csv.as_bytes(), &PriceColumn::Auto).unwrap_err();
        assert!(matches!(err, FeedError::Date { line: 2, .. }));
    }

    #[test]
    fn test_descending_rows_are_sorted() {
        let csv = "Date,Close\n2018-01-04,3\n2018-01-03,2\n2018-01-02,1\n";
        let (series, _) = read_prices(csv.as_bytes(), &PriceColumn::Auto).unwrap();
        assert_eq!(series.prices().collect::<Vec<_>>(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_duplicate_dates_rejected() {
        let csv = "Date,Close\n2018-01-02,1\n2018-01-02,2\n";
        let err = read_prices(csv.as_bytes(), &PriceColumn::Auto).unwrap_err();
        assert!(matches!(err, FeedError::UnsortedSeries(_)));
    }

    #[test]
    fn test_timestamp_dates() {
        let csv = "Date,Close\n2018-01-02 00:00:00-05:00,1\n2018-01-03T00:00:00,2\n";
        let (series, _) = read_prices(csv.as_bytes(), &PriceColumn::Auto).unwrap();
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn test_price_column_from_str() {
        assert_eq!("auto".parse::<PriceColumn>().unwrap(), PriceColumn::Auto);
        assert_eq!(
            "Close".parse::<PriceColumn>().unwrap(),
            PriceColumn::Named("Close".into())
        );
    }

    #[test]
    fn test_directory_path() {
        let feed = CsvPriceFeed::from_directory("/data");
        assert_eq!(feed.path_for("MSFT"), PathBuf::from("/data/MSFT.csv"));
        let feed = CsvPriceFeed::from_file("/x.csv");
        assert_eq!(feed.path_for("MSFT"), PathBuf::from("/x.csv"));
    }
}
