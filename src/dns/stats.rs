//! Descriptive statistics over latency samples.

use std::cmp::Ordering;

/// Summary of a non-empty set of latency samples in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatencyStats {
    /// Smallest sample
    pub min: f64,
    /// Largest sample
    pub max: f64,
    /// Arithmetic mean
    pub mean: f64,
    /// Median, averaging the two central values for even counts
    pub median: f64,
}

impl LatencyStats {
    /// Compute min, max, mean and median.
    ///
    /// Returns `None` for an empty slice.
    #[must_use]
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let mut sorted = samples.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

        Some(Self {
            min: sorted[0],
            max: sorted[sorted.len() - 1],
            mean: mean(&sorted)?,
            median: median(&sorted)?,
        })
    }
}

/// Arithmetic mean, `None` when empty.
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Median of an already sorted slice.
///
/// For an even number of values this is the mean of the two central ones.
#[must_use]
pub fn median(sorted: &[f64]) -> Option<f64> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }
    let mid = n / 2;
    if n % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert!(LatencyStats::from_samples(&[]).is_none());
        assert!(mean(&[]).is_none());
        assert!(median(&[]).is_none());
    }

    #[test]
    fn test_single_sample() {
        let stats = LatencyStats::from_samples(&[10.0]).unwrap();
        assert_eq!(stats.min, 10.0);
        assert_eq!(stats.max, 10.0);
        assert_eq!(stats.mean, 10.0);
        assert_eq!(stats.median, 10.0);
    }

    #[test]
    fn test_odd_median_is_middle_value() {
        let stats = LatencyStats::from_samples(&[30.0, 10.0, 200.0]).unwrap();
        assert_eq!(stats.median, 30.0);
        assert_eq!(stats.min, 10.0);
        assert_eq!(stats.max, 200.0);
        assert_eq!(stats.mean, 80.0);
    }

    #[test]
    fn test_even_median_averages_central_values() {
        let stats = LatencyStats::from_samples(&[40.0, 20.0]).unwrap();
        assert_eq!(stats.median, 30.0);

        let stats = LatencyStats::from_samples(&[1.0, 4.0, 2.0, 100.0]).unwrap();
        assert_eq!(stats.median, 3.0);
    }

    #[test]
    fn test_ordering_bounds() {
        let samples = [12.3, 5.1, 99.9, 42.0, 7.7, 7.7];
        let s = LatencyStats::from_samples(&samples).unwrap();
        assert!(s.min <= s.median && s.median <= s.max);
        assert!(s.min <= s.mean && s.mean <= s.max);
    }
}
