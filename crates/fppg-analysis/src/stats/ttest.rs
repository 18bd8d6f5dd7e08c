//! One-sample t-test against a reference mean.

use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Reference FP/G the series mean is compared against
pub const DEFAULT_REFERENCE_MEAN: f64 = 8.0;

/// Sample size used in the standard error when [`StandardErrorN::Fixed`] is selected
pub const DEFAULT_FIXED_N: usize = 445;

/// Which n goes under the square root of the standard error
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StandardErrorN {
    /// A configured constant, independent of the series length
    #[default]
    Fixed,
    /// The length of the series under test
    Observed,
}

/// Parameters of the one-sample t-test
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TTestConfig {
    #[serde(default = "default_reference_mean")]
    pub reference_mean: f64,
    #[serde(default)]
    pub standard_error_n: StandardErrorN,
    #[serde(default = "default_fixed_n")]
    pub fixed_n: usize,
}

fn default_reference_mean() -> f64 {
    DEFAULT_REFERENCE_MEAN
}

fn default_fixed_n() -> usize {
    DEFAULT_FIXED_N
}

impl Default for TTestConfig {
    fn default() -> Self {
        Self {
            reference_mean: DEFAULT_REFERENCE_MEAN,
            standard_error_n: StandardErrorN::Fixed,
            fixed_n: DEFAULT_FIXED_N,
        }
    }
}

/// Outcome of the test
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TTestResult {
    pub t_statistic: f64,
    pub degrees_of_freedom: usize,
    /// Two-tailed p-value
    pub p_value: f64,
}

impl TTestConfig {
    /// Test a series summarized by its mean, sample standard deviation and length.
    ///
    /// A zero standard deviation gives an infinite statistic (p = 0) unless the
    /// mean equals the reference, which gives NaN.
    pub fn run(&self, mean: f64, std_dev: f64, sample_size: usize) -> TTestResult {
        let n = match self.standard_error_n {
            StandardErrorN::Fixed => self.fixed_n,
            StandardErrorN::Observed => sample_size,
        };
        let standard_error = std_dev / (n as f64).sqrt();
        let t_statistic = (mean - self.reference_mean) / standard_error;
        let degrees_of_freedom = sample_size.saturating_sub(1);

        TTestResult {
            t_statistic,
            degrees_of_freedom,
            p_value: two_tailed_p_value(t_statistic, degrees_of_freedom),
        }
    }
}

/// `2 * sf(|t|)` of Student's t distribution with `df` degrees of freedom.
pub fn two_tailed_p_value(t_statistic: f64, degrees_of_freedom: usize) -> f64 {
    if t_statistic.is_nan() || degrees_of_freedom == 0 {
        return f64::NAN;
    }
    if t_statistic.is_infinite() {
        return 0.0;
    }
    match StudentsT::new(0.0, 1.0, degrees_of_freedom as f64) {
        Ok(dist) => 2.0 * dist.sf(t_statistic.abs()),
        Err(_) => f64::NAN,
    }
}
