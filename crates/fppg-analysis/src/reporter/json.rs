//! JSON reporter for the FP/G summary
//!
//! Non-finite statistics (an undefined t-statistic, say) serialize as `null`.

use super::SummaryReport;
use anyhow::Result;

/// JSON format reporter
pub struct JsonReporter;

impl JsonReporter {
    /// Format the report as JSON, optionally pretty-printed
    pub fn format(report: &SummaryReport, pretty: bool) -> Result<String> {
        let output = if pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(output)
    }
}
