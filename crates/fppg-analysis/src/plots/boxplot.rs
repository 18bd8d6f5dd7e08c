//! Horizontal FP/G box plot with a mean marker and a quartile annotation box

use plotters::prelude::*;
use std::error::Error;
use std::path::Path;

use super::{finite_range, BAR_COLOR, MEAN_COLOR};
use crate::config::PlotConfig;
use crate::stats::SummaryResult;

const BOX_LOW: f64 = 0.35;
const BOX_HIGH: f64 = 0.65;
const CENTER: f64 = 0.5;

/// Lines of the annotation box, top to bottom
pub fn annotation_lines(summary: &SummaryResult) -> Vec<String> {
    vec![
        format!("Q1: {:.2}", summary.q1),
        format!("Q3: {:.2}", summary.q3),
        format!("IQR: {:.2}", summary.iqr),
        format!("Lower Fence: {:.2}", summary.lower_fence),
        format!("Upper Fence: {:.2}", summary.upper_fence),
        format!("Outliers in Data: {:.2}%", summary.outlier_percentage),
    ]
}

pub(super) fn draw(
    path: &Path,
    series: &[f64],
    summary: &SummaryResult,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>> {
    let (lo, hi) = finite_range(series).ok_or("no finite values to plot")?;
    let span = if hi > lo { hi - lo } else { 1.0 };
    let x_range = (lo - span * 0.05)..(hi + span * 0.05);

    let fences = summary.fences();
    let (whisker_lo, whisker_hi) = fences
        .whiskers(series)
        .unwrap_or((summary.q1, summary.q3));

    let root = SVGBackend::new(path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Fantasy Points Per Game (Min 75 Carries)", ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(10)
        .build_cartesian_2d(x_range, 0f64..1f64)?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(0)
        .x_desc("Fantasy Points Per Game")
        .draw()?;

    // whiskers and caps
    let cap_low = CENTER - 0.08;
    let cap_high = CENTER + 0.08;
    chart.draw_series(
        [
            vec![(whisker_lo, CENTER), (summary.q1, CENTER)],
            vec![(summary.q3, CENTER), (whisker_hi, CENTER)],
            vec![(whisker_lo, cap_low), (whisker_lo, cap_high)],
            vec![(whisker_hi, cap_low), (whisker_hi, cap_high)],
        ]
        .into_iter()
        .map(|points| PathElement::new(points, BLACK.stroke_width(1))),
    )?;

    chart.draw_series(std::iter::once(Rectangle::new(
        [(summary.q1, BOX_LOW), (summary.q3, BOX_HIGH)],
        BAR_COLOR.filled(),
    )))?;
    chart.draw_series(std::iter::once(Rectangle::new(
        [(summary.q1, BOX_LOW), (summary.q3, BOX_HIGH)],
        BLACK.stroke_width(1),
    )))?;
    chart.draw_series(std::iter::once(PathElement::new(
        vec![(summary.median, BOX_LOW), (summary.median, BOX_HIGH)],
        BLACK.stroke_width(2),
    )))?;

    chart.draw_series(
        summary
            .outliers
            .iter()
            .filter(|v| v.is_finite())
            .map(|&v| Circle::new((v, CENTER), 4, BLACK.stroke_width(1))),
    )?;

    // mean diamond
    let dx = span * 0.008;
    let dy = 0.04;
    let m = summary.mean;
    if m.is_finite() {
        let diamond = vec![(m, CENTER + dy), (m + dx, CENTER), (m, CENTER - dy), (m - dx, CENTER)];
        let mut outline = diamond.clone();
        outline.push(diamond[0]);
        chart.draw_series(std::iter::once(Polygon::new(diamond, YELLOW.filled())))?;
        chart.draw_series(std::iter::once(PathElement::new(
            outline,
            MEAN_COLOR.stroke_width(2),
        )))?;
    }

    // annotation box, upper right
    let lines = annotation_lines(summary);
    let x_max = hi + span * 0.05;
    let box_left = x_max - span * 0.3;
    let box_right = x_max - span * 0.02;
    let box_top = 0.97;
    let line_height = 0.05;
    let box_bottom = box_top - line_height * lines.len() as f64 - 0.03;
    chart.draw_series(std::iter::once(Rectangle::new(
        [(box_left, box_bottom), (box_right, box_top)],
        WHITE.mix(0.7).filled(),
    )))?;
    chart.draw_series(std::iter::once(Rectangle::new(
        [(box_left, box_bottom), (box_right, box_top)],
        BLACK.stroke_width(1),
    )))?;
    chart.draw_series(lines.into_iter().enumerate().map(|(i, line)| {
        Text::new(
            line,
            (box_left + span * 0.015, box_top - 0.015 - line_height * i as f64),
            ("sans-serif", 14),
        )
    }))?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::TTestConfig;

    #[test]
    fn test_annotation_lines() {
        let series = vec![1.0, 2.0, 3.0, 4.0, 5.0, 100.0];
        let summary = SummaryResult::compute(&series, &TTestConfig::default()).unwrap();

        assert_eq!(
            annotation_lines(&summary),
            vec![
                "Q1: 2.25",
                "Q3: 4.75",
                "IQR: 2.50",
                "Lower Fence: -1.50",
                "Upper Fence: 8.50",
                "Outliers in Data: 16.67%",
            ]
        );
    }
}
