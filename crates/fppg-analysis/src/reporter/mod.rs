//! Summary reporting
//!
//! This module handles formatting and outputting the FP/G summary in
//! various formats.
//!
//! # Output Formats
//!
//! - **Console**: The fixed-format labeled block printed after loading data
//! - **JSON**: Machine-readable format, compact or pretty-printed
//!
//! # Example
//!
//! ```no_run
//! use fppg_analysis::reporter::{OutputFormat, Reporter, SummaryReport};
//! use fppg_analysis::{FilterCriteria, SummaryResult};
//!
//! # fn example(summary: SummaryResult) -> anyhow::Result<()> {
//! let report = SummaryReport::new(FilterCriteria::default(), summary);
//! Reporter::new(OutputFormat::Console).report(&report)?;
//!
//! // Or write to a file
//! Reporter::new(OutputFormat::Json).write_to_file(&report, "summary.json")?;
//! # Ok(())
//! # }
//! ```

mod console;
mod json;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::filter::FilterCriteria;
use crate::stats::SummaryResult;

pub use console::{format_decimal, format_scientific, ConsoleReporter};
pub use json::JsonReporter;

/// Output format for the summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Labeled text block
    #[default]
    Console,
    /// JSON format for machine parsing
    Json,
    /// Pretty-printed JSON
    JsonPretty,
}

/// A summary with the context it was computed in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryReport {
    /// RFC 3339 timestamp of the run
    pub generated_at: String,
    /// Row predicates that produced the series
    pub criteria: FilterCriteria,
    pub summary: SummaryResult,
}

impl SummaryReport {
    pub fn new(criteria: FilterCriteria, summary: SummaryResult) -> Self {
        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            criteria,
            summary,
        }
    }
}

/// Reporter for summary results
pub struct Reporter {
    format: OutputFormat,
}

impl Reporter {
    /// Create a new reporter with the specified output format
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Report to stdout
    pub fn report(&self, report: &SummaryReport) -> Result<()> {
        let output = self.format_report(report)?;
        print!("{}", output);
        io::stdout().flush()?;
        Ok(())
    }

    /// Write the report to a file
    pub fn write_to_file<P: AsRef<Path>>(&self, report: &SummaryReport, path: P) -> Result<()> {
        let output = self.format_report(report)?;
        fs::write(path, output)?;
        Ok(())
    }

    /// Format the report as a string
    pub fn format_report(&self, report: &SummaryReport) -> Result<String> {
        match self.format {
            OutputFormat::Console => ConsoleReporter::format(&report.summary),
            OutputFormat::Json => JsonReporter::format(report, false),
            OutputFormat::JsonPretty => JsonReporter::format(report, true),
        }
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(OutputFormat::default())
    }
}

#[cfg(test)]
pub(crate) fn sample_summary() -> SummaryResult {
    SummaryResult {
        median: 11.4375,
        mean: 12.0125,
        min: 4.2,
        max: 28.9,
        q1: 9.1,
        q3: 14.655,
        iqr: 5.555,
        lower_fence: 0.7675,
        upper_fence: 22.9875,
        outlier_count: 12,
        outlier_percentage: 2.6966292134831464,
        std_dev: 4.321,
        t_statistic: 19.6,
        degrees_of_freedom: 444,
        p_value: 1.234567e-61,
        sample_size: 445,
        outliers: vec![28.9, 25.1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> SummaryReport {
        SummaryReport::new(FilterCriteria::default(), sample_summary())
    }

    #[test]
    fn test_reporter_console_format() {
        let output = Reporter::new(OutputFormat::Console)
            .format_report(&sample_report())
            .unwrap();

        assert!(output.contains("| Summary Statistics |"));
        assert!(output.contains("Median FP/G: 11.44"));
    }

    #[test]
    fn test_reporter_json_format() {
        let output = Reporter::new(OutputFormat::Json)
            .format_report(&sample_report())
            .unwrap();

        assert!(output.contains("\"position_pattern\":\"RB\""));
        assert!(output.contains("\"sample_size\":445"));
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.json");

        Reporter::new(OutputFormat::JsonPretty)
            .write_to_file(&sample_report(), &path)
            .unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"generated_at\""));
    }

    #[test]
    fn test_default_format() {
        let reporter = Reporter::default();
        assert_eq!(reporter.format, OutputFormat::Console);
    }
}
