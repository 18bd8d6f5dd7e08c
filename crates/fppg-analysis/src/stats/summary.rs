//! The FP/G summary consumed by the reporters and the plots.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::outliers::OutlierFences;
use super::percentiles::{mean, median_sorted, percentile_sorted, sample_std_dev, sorted};
use super::ttest::TTestConfig;
use crate::error::{AnalysisError, Result};

/// Descriptive and inferential statistics of a rate series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub median: f64,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    pub lower_fence: f64,
    pub upper_fence: f64,
    pub outlier_count: usize,
    pub outlier_percentage: f64,
    /// Sample standard deviation (n - 1)
    pub std_dev: f64,
    pub t_statistic: f64,
    pub degrees_of_freedom: usize,
    pub p_value: f64,
    pub sample_size: usize,
    /// Values outside the fences, in series order
    pub outliers: Vec<f64>,
}

impl SummaryResult {
    /// Summarize a rate series.
    ///
    /// NaN rates (zero points over zero games) are skipped by the order
    /// statistics and moments but still count towards `sample_size`, the
    /// outlier percentage and the degrees of freedom. A series with no
    /// defined rate at all reports NaN for every statistic.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::EmptySeries`] when `series` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use fppg_analysis::stats::{SummaryResult, TTestConfig};
    ///
    /// let summary = SummaryResult::compute(&[6.0, 9.5, 12.0, 14.5], &TTestConfig::default()).unwrap();
    /// assert_eq!(summary.median, 10.75);
    /// assert_eq!(summary.sample_size, 4);
    /// ```
    pub fn compute(series: &[f64], t_test: &TTestConfig) -> Result<Self> {
        if series.is_empty() {
            return Err(AnalysisError::EmptySeries);
        }
        let sample_size = series.len();

        let defined: Vec<f64> = series.iter().copied().filter(|v| !v.is_nan()).collect();
        let undefined = sample_size - defined.len();
        if undefined > 0 {
            warn!(undefined, sample_size, "Skipping undefined rates in the summary");
        }

        let sorted = sorted(&defined);
        let median = median_sorted(&sorted).unwrap_or(f64::NAN);
        let mean = mean(&defined).unwrap_or(f64::NAN);
        let q1 = percentile_sorted(&sorted, 25.0).unwrap_or(f64::NAN);
        let q3 = percentile_sorted(&sorted, 75.0).unwrap_or(f64::NAN);
        let min = sorted.first().copied().unwrap_or(f64::NAN);
        let max = sorted.last().copied().unwrap_or(f64::NAN);
        let fences = OutlierFences::from_quartiles(q1, q3);

        // NaN compares false against both fences, so it is never an outlier
        let outliers = fences.outliers(series);
        let outlier_count = outliers.len();
        let outlier_percentage = 100.0 * outlier_count as f64 / sample_size as f64;

        let std_dev = sample_std_dev(&defined).unwrap_or(f64::NAN);
        let test = t_test.run(mean, std_dev, sample_size);

        debug!(
            sample_size,
            outlier_count,
            t = test.t_statistic,
            "Computed FP/G summary"
        );

        Ok(Self {
            median,
            mean,
            min,
            max,
            q1,
            q3,
            iqr: fences.iqr,
            lower_fence: fences.lower_fence,
            upper_fence: fences.upper_fence,
            outlier_count,
            outlier_percentage,
            std_dev,
            t_statistic: test.t_statistic,
            degrees_of_freedom: test.degrees_of_freedom,
            p_value: test.p_value,
            sample_size,
            outliers,
        })
    }

    /// Fences as reported, for recomputing the outlier set
    pub fn fences(&self) -> OutlierFences {
        OutlierFences {
            q1: self.q1,
            q3: self.q3,
            iqr: self.iqr,
            lower_fence: self.lower_fence,
            upper_fence: self.upper_fence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summarize(series: &[f64]) -> SummaryResult {
        SummaryResult::compute(series, &TTestConfig::default()).unwrap()
    }

    #[test]
    fn test_empty_series_fails_fast() {
        let err = SummaryResult::compute(&[], &TTestConfig::default()).unwrap_err();
        assert!(matches!(err, AnalysisError::EmptySeries));
    }

    #[test]
    fn test_single_value_series() {
        let summary = summarize(&[11.2]);

        assert_eq!(summary.sample_size, 1);
        assert_eq!(summary.median, 11.2);
        assert_eq!(summary.mean, 11.2);
        assert_eq!(summary.min, 11.2);
        assert_eq!(summary.max, 11.2);
        assert_eq!(summary.iqr, 0.0);
        assert_eq!(summary.outlier_count, 0);
        assert!(summary.std_dev.is_nan());
        assert!(summary.t_statistic.is_nan());
        assert!(summary.p_value.is_nan());
        assert_eq!(summary.degrees_of_freedom, 0);
    }

    #[test]
    fn test_descriptive_fields() {
        // descending, as the filter hands it over
        let series = vec![20.0, 15.0, 12.0, 10.0, 9.0, 8.0, 7.5, 6.0, 5.0, 4.0];
        let summary = summarize(&series);

        assert_eq!(summary.sample_size, 10);
        assert_eq!(summary.min, 4.0);
        assert_eq!(summary.max, 20.0);
        assert_eq!(summary.median, 8.5);
        assert!((summary.mean - 9.65).abs() < 1e-12);
        // sorted: 4 5 6 7.5 8 9 10 12 15 20; rank 2.25 and 6.75
        assert!((summary.q1 - 6.375).abs() < 1e-12);
        assert!((summary.q3 - 11.5).abs() < 1e-12);
        assert!((summary.iqr - 5.125).abs() < 1e-12);
        assert_eq!(summary.degrees_of_freedom, 9);
    }

    #[test]
    fn test_outlier_fields() {
        let series = vec![30.0, 12.0, 11.0, 10.5, 10.0, 9.5, 9.0, 1.0];
        let summary = summarize(&series);

        assert_eq!(summary.outliers, vec![30.0, 1.0]);
        assert_eq!(summary.outlier_count, 2);
        assert_eq!(summary.outlier_percentage, 25.0);
    }

    #[test]
    fn test_zero_variance_series() {
        let summary = summarize(&[10.0; 10]);

        assert_eq!(summary.std_dev, 0.0);
        assert!(summary.t_statistic.is_infinite());
        assert_eq!(summary.p_value, 0.0);
        assert_eq!(summary.degrees_of_freedom, 9);
        assert_eq!(summary.outlier_count, 0);
    }

    #[test]
    fn test_t_statistic_uses_fixed_445() {
        let series = vec![6.0, 8.0, 10.0, 12.0];
        let summary = summarize(&series);

        let std_dev = (20.0_f64 / 3.0).sqrt();
        let expected = (9.0 - 8.0) / (std_dev / 445f64.sqrt());
        assert!((summary.t_statistic - expected).abs() < 1e-10);
        assert_eq!(summary.degrees_of_freedom, 3);
        assert!(summary.p_value > 0.0 && summary.p_value < 0.05);
    }

    #[test]
    fn test_undefined_rate_is_skipped() {
        // one 0 / 0 row next to 12 and 10 FP/G; either NaN sign bit
        for nan in [f64::NAN, -f64::NAN] {
            let summary = summarize(&[12.0, 10.0, nan]);

            assert_eq!(summary.median, 11.0);
            assert_eq!(summary.min, 10.0);
            assert_eq!(summary.max, 12.0);
            assert_eq!(summary.q1, 10.5);
            assert_eq!(summary.q3, 11.5);
            assert_eq!(summary.mean, 11.0);
            assert!((summary.std_dev - 2f64.sqrt()).abs() < 1e-12);
            assert_eq!(summary.sample_size, 3);
            assert_eq!(summary.degrees_of_freedom, 2);
            assert_eq!(summary.outlier_count, 0);
            assert_eq!(summary.outlier_percentage, 0.0);
        }
    }

    #[test]
    fn test_all_rates_undefined() {
        let summary = summarize(&[f64::NAN, f64::NAN]);

        assert!(summary.median.is_nan());
        assert!(summary.min.is_nan());
        assert!(summary.q3.is_nan());
        assert!(summary.mean.is_nan());
        assert!(summary.p_value.is_nan());
        assert_eq!(summary.sample_size, 2);
        assert!(summary.outliers.is_empty());
    }

    #[test]
    fn test_infinite_rate_propagates() {
        let summary = summarize(&[f64::INFINITY, 10.0, 9.0, 8.0]);
        assert_eq!(summary.max, f64::INFINITY);
        assert_eq!(summary.mean, f64::INFINITY);
    }

    #[test]
    fn test_fences_roundtrip() {
        let summary = summarize(&[1.0, 2.0, 3.0, 4.0, 5.0, 100.0]);
        let fences = summary.fences();
        assert_eq!(fences.outliers(&[1.0, 2.0, 3.0, 4.0, 5.0, 100.0]), summary.outliers);
    }
}
