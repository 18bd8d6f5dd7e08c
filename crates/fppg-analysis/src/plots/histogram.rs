//! FP/G histogram with median and mean reference lines

use plotters::prelude::*;
use std::error::Error;
use std::path::Path;

use super::{finite_range, BAR_COLOR, MEAN_COLOR};
use crate::config::PlotConfig;
use crate::stats::SummaryResult;

/// Equal-width bin counts over the finite values of a series.
///
/// Bins span [min, max]; every bin is half-open except the last, which also
/// holds the maximum. A series whose values are all equal is given a range of
/// one unit centered on that value.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    edges: Vec<f64>,
    counts: Vec<usize>,
}

impl Histogram {
    /// Returns `None` when `bins` is zero or no value is finite.
    pub fn from_series(series: &[f64], bins: usize) -> Option<Self> {
        if bins == 0 {
            return None;
        }
        let (mut lo, mut hi) = finite_range(series)?;
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let width = (hi - lo) / bins as f64;
        let mut edges: Vec<f64> = (0..bins).map(|i| lo + width * i as f64).collect();
        edges.push(hi);

        let mut counts = vec![0usize; bins];
        for &value in series.iter().filter(|v| v.is_finite()) {
            let index = (((value - lo) / width).floor() as usize).min(bins - 1);
            counts[index] += 1;
        }

        Some(Self { edges, counts })
    }

    /// `(start, end, count)` for each bin
    pub fn bins(&self) -> impl Iterator<Item = (f64, f64, usize)> + '_ {
        self.edges
            .windows(2)
            .zip(&self.counts)
            .map(|(edge, &count)| (edge[0], edge[1], count))
    }

    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

pub(super) fn draw(
    path: &Path,
    histogram: &Histogram,
    summary: &SummaryResult,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>> {
    let root = SVGBackend::new(path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let edges = histogram.edges();
    let x_range = edges[0]..edges[edges.len() - 1];
    let y_max = (histogram.max_count() as f64 * 1.1).max(1.0);

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Distribution of Fantasy Points Per Game (Min 75 Carries)",
            ("sans-serif", 24),
        )
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, 0f64..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Fantasy Points Per Game")
        .y_desc("Frequency (Players)")
        .draw()?;

    chart.draw_series(histogram.bins().map(|(start, end, count)| {
        Rectangle::new([(start, 0.0), (end, count as f64)], BAR_COLOR.filled())
    }))?;
    chart.draw_series(histogram.bins().map(|(start, end, count)| {
        Rectangle::new([(start, 0.0), (end, count as f64)], WHITE.stroke_width(1))
    }))?;

    chart
        .draw_series(DashedLineSeries::new(
            vec![(summary.median, 0.0), (summary.median, y_max)],
            8,
            5,
            RED.stroke_width(2),
        ))?
        .label(format!("Median: {:.2}", summary.median))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));

    chart
        .draw_series(LineSeries::new(
            vec![(summary.mean, 0.0), (summary.mean, y_max)],
            MEAN_COLOR.stroke_width(2),
        ))?
        .label(format!("Mean: {:.2}", summary.mean))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], MEAN_COLOR.stroke_width(2)));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
