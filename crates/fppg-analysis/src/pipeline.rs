//! Load, filter and summarize in one pass
//!
//! Each stage hands an immutable value to the next:
//!
//! ```text
//! fetch ──► Vec<PlayerSeason> ──► FilteredDataset ──► SummaryResult
//! ```

use tracing::{info, instrument};

use crate::config::Config;
use crate::data::{PlayerSeason, PlayerStatsSource};
use crate::error::Result;
use crate::filter::{FilterCriteria, FilteredDataset};
use crate::reporter::SummaryReport;
use crate::stats::{SummaryResult, TTestConfig};

/// Output of one analysis run
#[derive(Debug, Clone)]
pub struct Analysis {
    pub criteria: FilterCriteria,
    pub dataset: FilteredDataset,
    pub summary: SummaryResult,
}

impl Analysis {
    /// The rate series the summary was computed from
    pub fn rates(&self) -> Vec<f64> {
        self.dataset.rates()
    }

    /// Timestamped report for the reporters
    pub fn report(&self) -> SummaryReport {
        SummaryReport::new(self.criteria.clone(), self.summary.clone())
    }
}

/// Fetch rows from `source` and summarize them as configured.
#[instrument(skip_all, fields(seasons = ?config.source.seasons, level = %config.source.summary_level))]
pub fn analyze<S>(source: &S, config: &Config) -> Result<Analysis>
where
    S: PlayerStatsSource + ?Sized,
{
    let rows = source.fetch(&config.source.seasons, config.source.summary_level)?;
    info!(rows = rows.len(), "Loaded player seasons");
    summarize(rows, &config.filter, &config.t_test)
}

/// Filter already loaded rows and summarize their rates.
pub fn summarize(
    rows: Vec<PlayerSeason>,
    criteria: &FilterCriteria,
    t_test: &TTestConfig,
) -> Result<Analysis> {
    let dataset = FilteredDataset::from_rows(rows, criteria)?;
    info!(
        kept = dataset.len(),
        pattern = %criteria.position_pattern,
        min_carries = criteria.min_carries,
        "Filtered to qualifying rows"
    );

    let summary = SummaryResult::compute(&dataset.rates(), t_test)?;

    Ok(Analysis {
        criteria: criteria.clone(),
        dataset,
        summary,
    })
}
