//! Diagnostic figures for the FP/G series
//!
//! Both figures are written as SVG files:
//!
//! - `fppg_histogram.svg`: bin counts with median and mean lines
//! - `fppg_boxplot.svg`: quartile box, whiskers, outliers and a mean marker

mod boxplot;
mod histogram;

use plotters::style::RGBColor;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::PlotConfig;
use crate::error::{AnalysisError, Result};
use crate::stats::SummaryResult;

pub use boxplot::annotation_lines;
pub use histogram::Histogram;

pub const HISTOGRAM_FILE: &str = "fppg_histogram.svg";
pub const BOX_PLOT_FILE: &str = "fppg_boxplot.svg";

const BAR_COLOR: RGBColor = RGBColor(0x81, 0x6E, 0xC7);
const MEAN_COLOR: RGBColor = RGBColor(0xFF, 0x8C, 0x00);

/// Paths of the rendered figures
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotFiles {
    pub histogram: PathBuf,
    pub box_plot: PathBuf,
}

/// Render the histogram and the box plot into `dir`, creating it if needed.
pub fn render(
    series: &[f64],
    summary: &SummaryResult,
    config: &PlotConfig,
    dir: &Path,
) -> Result<PlotFiles> {
    let histogram = Histogram::from_series(series, config.bins).ok_or_else(|| {
        AnalysisError::Plot(format!(
            "cannot bin {} values into {} bins",
            series.len(),
            config.bins
        ))
    })?;

    fs::create_dir_all(dir)?;
    let files = PlotFiles {
        histogram: dir.join(HISTOGRAM_FILE),
        box_plot: dir.join(BOX_PLOT_FILE),
    };

    histogram::draw(&files.histogram, &histogram, summary, config)
        .map_err(|e| AnalysisError::Plot(e.to_string()))?;
    info!(path = %files.histogram.display(), "Wrote histogram");

    boxplot::draw(&files.box_plot, series, summary, config)
        .map_err(|e| AnalysisError::Plot(e.to_string()))?;
    info!(path = %files.box_plot.display(), "Wrote box plot");

    Ok(files)
}

/// Minimum and maximum of the finite values
fn finite_range(series: &[f64]) -> Option<(f64, f64)> {
    series
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::TTestConfig;

    #[test]
    fn test_finite_range() {
        assert_eq!(finite_range(&[3.0, f64::NAN, -1.0, f64::INFINITY]), Some((-1.0, 3.0)));
        assert_eq!(finite_range(&[f64::NAN]), None);
    }

    #[test]
    fn test_render_writes_both_figures() {
        let series = vec![22.1, 18.4, 15.0, 13.3, 12.8, 11.9, 10.2, 9.7, 8.8, 7.1, 6.0, 3.2];
        let summary = SummaryResult::compute(&series, &TTestConfig::default()).unwrap();
        let dir = tempfile::tempdir().unwrap();

        let files = render(&series, &summary, &PlotConfig::default(), dir.path()).unwrap();

        for path in [&files.histogram, &files.box_plot] {
            let svg = fs::read_to_string(path).unwrap();
            assert!(svg.contains("<svg"));
        }
        let histogram = fs::read_to_string(&files.histogram).unwrap();
        assert!(histogram.contains("Median: 11.05"));
    }

    #[test]
    fn test_render_rejects_zero_bins() {
        let series = vec![1.0, 2.0];
        let summary = SummaryResult::compute(&series, &TTestConfig::default()).unwrap();
        let config = PlotConfig {
            bins: 0,
            ..PlotConfig::default()
        };
        let dir = tempfile::tempdir().unwrap();

        let err = render(&series, &summary, &config, dir.path()).unwrap_err();
        assert!(matches!(err, AnalysisError::Plot(_)));
    }
}
