//! Location and spread of a rate series.
//!
//! Every function sorts with IEEE total ordering, so infinite rates sit at the
//! ends of the series and NaN rates never panic a comparison.

/// Sorted copy of a series.
pub fn sorted(samples: &[f64]) -> Vec<f64> {
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Calculate a percentile of already sorted samples.
///
/// Uses linear interpolation between the two order statistics bracketing
/// rank `(n - 1) * p / 100`.
///
/// # Returns
///
/// * `Some(value)` - The percentile value
/// * `None` - If samples is empty or p is outside 0..=100
///
/// # Examples
///
/// ```
/// use fppg_analysis::stats::percentiles::percentile_sorted;
///
/// let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
/// assert_eq!(percentile_sorted(&data, 25.0), Some(3.25));
/// ```
pub fn percentile_sorted(sorted: &[f64], p: f64) -> Option<f64> {
    if sorted.is_empty() || !(0.0..=100.0).contains(&p) {
        return None;
    }

    if sorted.len() == 1 {
        return Some(sorted[0]);
    }

    let rank = (p / 100.0) * (sorted.len() - 1) as f64;
    let lower_index = rank.floor() as usize;
    let upper_index = rank.ceil() as usize;

    let lower_value = sorted[lower_index];
    let upper_value = sorted[upper_index];
    // equal neighbours need no interpolation, and inf - inf would be NaN
    if lower_index == upper_index || lower_value == upper_value {
        Some(lower_value)
    } else {
        let fraction = rank - lower_index as f64;
        Some(lower_value + fraction * (upper_value - lower_value))
    }
}

/// Calculate a percentile of unsorted samples.
///
/// ```
/// use fppg_analysis::stats::percentiles::percentile;
///
/// assert_eq!(percentile(&[5.0, 1.0, 3.0, 2.0, 4.0], 50.0), Some(3.0));
/// ```
pub fn percentile(samples: &[f64], p: f64) -> Option<f64> {
    percentile_sorted(&sorted(samples), p)
}

/// Midpoint of already sorted samples.
///
/// Even-length series average the two middle values.
pub fn median_sorted(sorted: &[f64]) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

pub fn mean(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    Some(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Sample standard deviation (divides by n - 1).
///
/// A single sample has no spread estimate and yields NaN.
pub fn sample_std_dev(samples: &[f64]) -> Option<f64> {
    let mean = mean(samples)?;
    if samples.len() < 2 {
        return Some(f64::NAN);
    }
    let squared_diffs: f64 = samples.iter().map(|&x| (x - mean).powi(2)).sum();
    Some((squared_diffs / (samples.len() - 1) as f64).sqrt())
}
