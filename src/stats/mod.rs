//! Latency statistics aggregation.
//!
//! Reduces a sequence of timing samples to summary statistics. Population
//! standard deviation (divide by the sample count), matching the reference
//! computation used by the report consumers.

use crate::core::{BenchError, BenchResult};

/// Summary statistics over a sequence of samples, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsSummary {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
    pub std: f64,
}

/// Summarize a non-empty sample sequence.
///
/// Fails with `EmptyInput` on an empty slice. Pure function.
pub fn summarize(samples: &[f64]) -> BenchResult<StatsSummary> {
    if samples.is_empty() {
        return Err(BenchError::EmptyInput);
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    for &sample in samples {
        min = min.min(sample);
        max = max.max(sample);
        sum += sample;
    }
    let avg = sum / samples.len() as f64;

    let variance = samples
        .iter()
        .map(|&sample| (sample - avg) * (sample - avg))
        .sum::<f64>()
        / samples.len() as f64;

    Ok(StatsSummary {
        min,
        max,
        avg,
        std: variance.sqrt(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singleton() {
        let summary = summarize(&[3.5]).expect("Singleton should summarize");
        assert_eq!(
            summary,
            StatsSummary {
                min: 3.5,
                max: 3.5,
                avg: 3.5,
                std: 0.0
            }
        );
    }

    #[test]
    fn test_known_values() {
        let summary = summarize(&[1.0, 2.0, 3.0, 4.0]).expect("Samples should summarize");
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 4.0);
        assert_eq!(summary.avg, 2.5);
        // population variance = 5/4
        assert!((summary.std - 1.25_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_reorder_invariance() {
        let a = summarize(&[0.25, 1.75, 0.5, 4.0]).expect("Samples should summarize");
        let b = summarize(&[4.0, 0.5, 1.75, 0.25]).expect("Samples should summarize");
        assert_eq!(a, b);
    }

    #[test]
    fn test_equal_samples_zero_std() {
        let summary = summarize(&[2.0, 2.0, 2.0]).expect("Samples should summarize");
        assert_eq!(summary.std, 0.0);
    }

    #[test]
    fn test_unequal_samples_positive_std() {
        let summary = summarize(&[1.0, 2.0]).expect("Samples should summarize");
        assert!(summary.std > 0.0);
    }

    #[test]
    fn test_empty_input() {
        let err = summarize(&[]).expect_err("Empty input should fail");
        assert!(matches!(err, BenchError::EmptyInput));
    }
}
