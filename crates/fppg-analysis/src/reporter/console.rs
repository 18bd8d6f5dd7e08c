//! Console reporter for the FP/G summary
//!
//! Produces the labeled statistics block. Reals use two decimals and the
//! p-value uses four-digit scientific notation with a signed two-digit
//! exponent (`1.2346e-05`).

use anyhow::Result;
use std::fmt::Write;

use crate::stats::SummaryResult;

const RULE: &str = "----------------------";

/// Console format reporter
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// Format the summary block
    pub fn format(summary: &SummaryResult) -> Result<String> {
        let mut output = String::new();

        writeln!(output)?;
        writeln!(output, "{}", RULE)?;
        writeln!(output)?;
        writeln!(output, "| Summary Statistics |")?;
        writeln!(output)?;
        writeln!(output, "{}", RULE)?;
        writeln!(output)?;

        writeln!(output, "Median FP/G: {}", format_decimal(summary.median, 2))?;
        writeln!(output, "Mean FP/G: {}", format_decimal(summary.mean, 2))?;
        writeln!(output, "Min: {}", format_decimal(summary.min, 2))?;
        writeln!(output, "Max: {}", format_decimal(summary.max, 2))?;
        writeln!(output, "Q1 (25th Pctl): {}", format_decimal(summary.q1, 2))?;
        writeln!(output, "Q3 (75th Pctl): {}", format_decimal(summary.q3, 2))?;
        writeln!(output, "IQR: {}", format_decimal(summary.iqr, 2))?;
        writeln!(
            output,
            "Lower Outlier Fence: {}",
            format_decimal(summary.lower_fence, 2)
        )?;
        writeln!(
            output,
            "Upper Outlier Fence: {}",
            format_decimal(summary.upper_fence, 2)
        )?;
        writeln!(output, "Outliers Found (#): {}", summary.outlier_count)?;
        writeln!(
            output,
            "Outliers Found (%): {}%",
            format_decimal(summary.outlier_percentage, 2)
        )?;
        writeln!(output, "Data Points: {}", summary.sample_size)?;
        writeln!(
            output,
            "Standard Deviation: {}",
            format_decimal(summary.std_dev, 2)
        )?;
        writeln!(output, "T Statistic: {}", format_decimal(summary.t_statistic, 2))?;
        writeln!(output, "P-value: {}", format_scientific(summary.p_value, 4))?;

        Ok(output)
    }
}

fn non_finite(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("nan")
    } else if value == f64::INFINITY {
        Some("inf")
    } else if value == f64::NEG_INFINITY {
        Some("-inf")
    } else {
        None
    }
}

/// Fixed-point with `places` decimals; non-finite values print as `nan`, `inf`, `-inf`.
pub fn format_decimal(value: f64, places: usize) -> String {
    match non_finite(value) {
        Some(text) => text.to_string(),
        None => format!("{:.*}", places, value),
    }
}

/// Scientific notation with `places` mantissa decimals and an exponent of
/// the form `e+05` / `e-12`.
///
/// ```
/// use fppg_analysis::reporter::format_scientific;
///
/// assert_eq!(format_scientific(0.000012345678, 4), "1.2346e-05");
/// assert_eq!(format_scientific(0.0, 4), "0.0000e+00");
/// ```
pub fn format_scientific(value: f64, places: usize) -> String {
    if let Some(text) = non_finite(value) {
        return text.to_string();
    }

    let raw = format!("{:.*e}", places, value);
    match raw.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exponent.abs())
        }
        None => raw,
    }
}
