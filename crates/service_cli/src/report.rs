//! Forecast report assembly and rendering
//!
//! Reports are plain serde views over engine results, rendered either as a
//! box-drawn text table or as pretty-printed JSON.

use forecast_core::math::Histogram;
use forecast_core::types::{Date, StatsError};
use forecast_engine::{ReturnStats, SimulationOutcome, TerminalDistributionSummary};
use serde::Serialize;

use crate::config::OutputFormat;

/// Width of the longest histogram bar in table output.
const HISTOGRAM_BAR_WIDTH: usize = 40;

/// Number of mean-path checkpoints shown in table output.
const MEAN_PATH_CHECKPOINTS: usize = 7;

/// One histogram bin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistogramBin {
    /// Inclusive lower edge
    pub lower: f64,
    /// Upper edge (inclusive for the last bin)
    pub upper: f64,
    /// Number of terminal prices in the bin
    pub count: u64,
}

/// Historical window and the statistics estimated from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateReport {
    /// Instrument (ticker symbol)
    pub instrument: String,
    /// Inclusive history start
    pub start_date: Date,
    /// Exclusive history end
    pub end_date: Date,
    /// Price observations used
    pub observations: usize,
    /// Estimated return statistics
    pub stats: ReturnStats,
}

impl EstimateReport {
    /// Renders in the requested format.
    pub fn render(&self, format: OutputFormat) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Table => Ok(self.to_table()),
            OutputFormat::Json => serde_json::to_string_pretty(self),
        }
    }

    /// Renders as a text table.
    pub fn to_table(&self) -> String {
        let mut rows = self.header_rows();
        rows.extend(stats_rows(&self.stats));
        boxed_table(&rows)
    }

    fn header_rows(&self) -> Vec<(String, String)> {
        vec![
            ("Instrument".into(), self.instrument.clone()),
            (
                "History".into(),
                format!("{} to {}", self.start_date, self.end_date),
            ),
            ("Observations".into(), self.observations.to_string()),
        ]
    }
}

/// Complete simulation report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastReport {
    /// Historical window and estimated statistics
    #[serde(flatten)]
    pub estimate: EstimateReport,
    /// Forecast horizon in days
    pub num_days: usize,
    /// Number of simulated paths
    pub num_simulations: usize,
    /// Seed that drove the run
    pub seed: Option<u64>,
    /// Terminal price summary
    pub summary: TerminalDistributionSummary,
    /// Cross-path mean price per day
    pub mean_path: Vec<f64>,
    /// First paths of the matrix, each indexed by day
    pub sample_paths: Vec<Vec<f64>>,
    /// Terminal price histogram
    pub histogram: Vec<HistogramBin>,
}

impl ForecastReport {
    /// Assembles a report from a completed run.
    ///
    /// # Errors
    ///
    /// Returns `StatsError` if the terminal histogram cannot be built.
    pub fn build(
        estimate: EstimateReport,
        outcome: &SimulationOutcome,
        display_paths: usize,
        histogram_bins: usize,
    ) -> Result<Self, StatsError> {
        let paths = &outcome.paths;
        let histogram = Histogram::from_values(paths.terminal_row(), histogram_bins)?
            .iter()
            .map(|(lower, upper, count)| HistogramBin {
                lower,
                upper,
                count,
            })
            .collect();

        Ok(Self {
            estimate,
            num_days: paths.num_days(),
            num_simulations: paths.num_simulations(),
            seed: outcome.seed,
            summary: outcome.summary,
            mean_path: paths.row_means(),
            sample_paths: paths.columns_subsample(display_paths),
            histogram,
        })
    }

    /// Renders in the requested format.
    pub fn render(&self, format: OutputFormat) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Table => Ok(self.to_table()),
            OutputFormat::Json => serde_json::to_string_pretty(self),
        }
    }

    /// Renders as text tables followed by the mean path and histogram.
    pub fn to_table(&self) -> String {
        let mut rows = self.estimate.header_rows();
        rows.extend(stats_rows(&self.estimate.stats));
        rows.push(("Horizon (days)".into(), self.num_days.to_string()));
        rows.push(("Simulations".into(), self.num_simulations.to_string()));
        rows.push((
            "Seed".into(),
            self.seed.map_or_else(|| "entropy".to_string(), |s| s.to_string()),
        ));
        rows.push((
            "Expected price".into(),
            format!("{:.2}", self.summary.expected_price),
        ));
        rows.push((
            "5% lower bound".into(),
            format!("{:.2}", self.summary.lower_bound_5pct),
        ));
        rows.push((
            "95% upper bound".into(),
            format!("{:.2}", self.summary.upper_bound_95pct),
        ));

        let mut out = boxed_table(&rows);
        out.push_str("\nAverage simulated path\n");
        for day in checkpoints(self.mean_path.len(), MEAN_PATH_CHECKPOINTS) {
            out.push_str(&format!("  day {:>4}  {:>12.2}\n", day, self.mean_path[day]));
        }

        out.push_str("\nTerminal price distribution\n");
        let max_count = self.histogram.iter().map(|b| b.count).max().unwrap_or(0).max(1);
        for bin in &self.histogram {
            let width = (bin.count as usize * HISTOGRAM_BAR_WIDTH) / max_count as usize;
            out.push_str(&format!(
                "  {:>10.2} - {:>10.2} │{:<bar$}│ {}\n",
                bin.lower,
                bin.upper,
                "█".repeat(width),
                bin.count,
                bar = HISTOGRAM_BAR_WIDTH
            ));
        }
        out
    }
}

fn stats_rows(stats: &ReturnStats) -> Vec<(String, String)> {
    vec![
        (
            "Mean daily return".into(),
            format!("{:.5}", stats.mean_daily_return),
        ),
        (
            "Daily std deviation".into(),
            format!("{:.5}", stats.daily_std_dev),
        ),
        ("Last price".into(), format!("{:.2}", stats.last_price)),
    ]
}

/// Evenly spaced row indices including the first and last.
fn checkpoints(len: usize, count: usize) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }
    let last = len - 1;
    if last == 0 || count < 2 {
        return vec![0];
    }
    let mut days: Vec<usize> = (0..count).map(|i| i * last / (count - 1)).collect();
    days.dedup();
    days
}

fn boxed_table(rows: &[(String, String)]) -> String {
    let key_width = rows.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
    let value_width = rows.iter().map(|(_, v)| v.chars().count()).max().unwrap_or(0);
    let rule = |left: &str, mid: &str, right: &str| {
        format!(
            "{}{}{}{}{}\n",
            left,
            "─".repeat(key_width + 2),
            mid,
            "─".repeat(value_width + 2),
            right
        )
    };

    let body: String = rows
        .iter()
        .map(|(key, value)| {
            format!(
                "│ {:<kw$} │ {:>vw$} │\n",
                key,
                value,
                kw = key_width,
                vw = value_width
            )
        })
        .collect();

    [rule("┌", "┬", "┐"), body, rule("└", "┴", "┘")].concat()
}
