//! Outlier classification with the Interquartile Range (IQR) rule.

use serde::{Deserialize, Serialize};

use super::percentiles::{percentile_sorted, sorted};

/// Multiplier applied to the IQR to place the fences
pub const FENCE_MULTIPLIER: f64 = 1.5;

/// Outlier fences and the values that fall outside them.
///
/// Outliers are points strictly outside [Q1 - 1.5*IQR, Q3 + 1.5*IQR], where
/// IQR = Q3 - Q1. A value sitting exactly on a fence is not an outlier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlierFences {
    /// First quartile (25th percentile)
    pub q1: f64,
    /// Third quartile (75th percentile)
    pub q3: f64,
    /// Interquartile range (Q3 - Q1)
    pub iqr: f64,
    /// Lower fence (Q1 - 1.5*IQR)
    pub lower_fence: f64,
    /// Upper fence (Q3 + 1.5*IQR)
    pub upper_fence: f64,
}

impl OutlierFences {
    /// Build fences from quartiles.
    pub fn from_quartiles(q1: f64, q3: f64) -> Self {
        let iqr = q3 - q1;
        Self {
            q1,
            q3,
            iqr,
            lower_fence: q1 - FENCE_MULTIPLIER * iqr,
            upper_fence: q3 + FENCE_MULTIPLIER * iqr,
        }
    }

    /// Compute fences for a series.
    ///
    /// Returns `None` if samples is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use fppg_analysis::stats::outliers::OutlierFences;
    ///
    /// let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 100.0];
    /// let fences = OutlierFences::detect(&data).unwrap();
    /// assert_eq!(fences.outliers(&data), vec![100.0]);
    /// ```
    pub fn detect(samples: &[f64]) -> Option<Self> {
        let sorted = sorted(samples);
        Self::from_sorted(&sorted)
    }

    pub(crate) fn from_sorted(sorted: &[f64]) -> Option<Self> {
        let q1 = percentile_sorted(sorted, 25.0)?;
        let q3 = percentile_sorted(sorted, 75.0)?;
        Some(Self::from_quartiles(q1, q3))
    }

    pub fn is_outlier(&self, value: f64) -> bool {
        value < self.lower_fence || value > self.upper_fence
    }

    /// Values outside the fences, in input order.
    pub fn outliers(&self, samples: &[f64]) -> Vec<f64> {
        samples
            .iter()
            .copied()
            .filter(|&value| self.is_outlier(value))
            .collect()
    }

    /// Most extreme values still inside the fences, the box plot whisker ends.
    pub fn whiskers(&self, samples: &[f64]) -> Option<(f64, f64)> {
        let inside = samples
            .iter()
            .copied()
            .filter(|&v| !v.is_nan() && !self.is_outlier(v));
        inside.fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }
}
