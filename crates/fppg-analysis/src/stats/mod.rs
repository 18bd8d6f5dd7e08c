//! Statistical summary of the FP/G series
//!
//! This module provides percentile calculations, IQR outlier fences and a
//! one-sample t-test, combined into a single [`SummaryResult`].
//!
//! # Examples
//!
//! ```
//! use fppg_analysis::stats::{SummaryResult, TTestConfig};
//!
//! let rates = vec![21.4, 17.9, 15.2, 14.8, 12.1, 11.0, 10.4, 9.9, 8.7, 7.3];
//! let summary = SummaryResult::compute(&rates, &TTestConfig::default()).unwrap();
//!
//! assert!(summary.q1 <= summary.median && summary.median <= summary.q3);
//! println!("Median: {:.2}, p-value: {:.4e}", summary.median, summary.p_value);
//! ```

pub mod outliers;
pub mod percentiles;
pub mod summary;
pub mod ttest;

// Re-export main types and functions
pub use outliers::OutlierFences;
pub use percentiles::{percentile, sample_std_dev};
pub use summary::SummaryResult;
pub use ttest::{StandardErrorN, TTestConfig, TTestResult};
