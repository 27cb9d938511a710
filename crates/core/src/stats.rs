//! Paired-sample statistics for cross-case comparison.
//!
//! Provides the Wilcoxon signed-rank test on paired per-fold differences.
//! Zero differences are handled with the Pratt convention: they take part in
//! ranking but contribute to neither signed rank sum, and the moments of the
//! null distribution are adjusted accordingly. The p-value comes from the
//! normal approximation with a tie correction over the non-zero ranks.

use crate::error::{EvalError, Result};
use serde::{Deserialize, Serialize};

/// Result of a paired Wilcoxon signed-rank test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankTest {
    /// One-sided p-value, folded into `[0.5, 1.0]`.
    pub p_value: f64,
    /// The signed-rank statistic `min(r_plus, r_minus)`.
    pub statistic: f64,
}

/// Runs the Wilcoxon signed-rank test on paired samples.
///
/// Differences are taken as `baseline - test`. The two-sided p-value is
/// folded into a one-sided "baseline beats test" framing: values below 0.5
/// are mapped to `1 - p`, so the result always lies in `[0.5, 1.0]`.
///
/// # Errors
/// Returns `InvalidInput` for empty samples, mismatched lengths, or when
/// every paired difference is zero (the test is undefined there).
pub fn paired_rank_test(baseline: &[f64], test: &[f64]) -> Result<RankTest> {
    if baseline.is_empty() || test.is_empty() {
        return Err(EvalError::invalid("paired rank test needs non-empty samples"));
    }
    if baseline.len() != test.len() {
        return Err(EvalError::invalid(format!(
            "paired rank test needs samples of equal length, got {} and {}",
            baseline.len(),
            test.len()
        )));
    }

    let diffs: Vec<f64> = baseline.iter().zip(test).map(|(b, t)| b - t).collect();
    let n_zero = diffs.iter().filter(|d| **d == 0.0).count();
    let count = diffs.len();
    if n_zero == count {
        return Err(EvalError::invalid(
            "paired rank test is undefined when all paired differences are zero",
        ));
    }
    if count - n_zero < 10 {
        tracing::warn!(
            non_zero_pairs = count - n_zero,
            "normal approximation of the signed-rank test is rough below 10 non-zero pairs"
        );
    }

    let abs_diffs: Vec<f64> = diffs.iter().map(|d| d.abs()).collect();
    let ranks = average_ranks(&abs_diffs);

    let mut r_plus = 0.0;
    let mut r_minus = 0.0;
    for (d, r) in diffs.iter().zip(&ranks) {
        if *d > 0.0 {
            r_plus += r;
        } else if *d < 0.0 {
            r_minus += r;
        }
    }
    let statistic = r_plus.min(r_minus);

    let n = count as f64;
    let nz = n_zero as f64;
    // Null moments over all ranked pairs, minus the zero block that carries
    // no sign information.
    let mean = n * (n + 1.0) * 0.25 - nz * (nz + 1.0) * 0.25;
    let mut scaled_variance = n * (n + 1.0) * (2.0 * n + 1.0) - nz * (nz + 1.0) * (2.0 * nz + 1.0);

    let nonzero_ranks: Vec<f64> = diffs
        .iter()
        .zip(&ranks)
        .filter(|(d, _)| **d != 0.0)
        .map(|(_, r)| *r)
        .collect();
    scaled_variance -= 0.5 * tie_correction(&nonzero_ranks);

    let std_error = (scaled_variance / 24.0).sqrt();
    let z = (statistic - mean) / std_error;
    let two_sided = (2.0 * standard_normal_cdf(-z.abs())).clamp(0.0, 1.0);

    let p_value = if two_sided < 0.5 {
        1.0 - two_sided
    } else {
        two_sided
    };

    Ok(RankTest { p_value, statistic })
}

/// Assigns 1-based ranks with ties sharing their average rank.
fn average_ranks(values: &[f64]) -> Vec<f64> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| {
        values[a]
            .partial_cmp(&values[b])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut ranks = vec![0.0; values.len()];
    let mut start = 0;
    while start < order.len() {
        let mut end = start;
        while end + 1 < order.len() && values[order[end + 1]] == values[order[start]] {
            end += 1;
        }
        // Average of the 1-based positions start+1 ..= end+1.
        let average = (start + end + 2) as f64 / 2.0;
        for &index in &order[start..=end] {
            ranks[index] = average;
        }
        start = end + 1;
    }
    ranks
}

/// Sum of `t^3 - t` over groups of tied ranks.
fn tie_correction(ranks: &[f64]) -> f64 {
    let mut sorted = ranks.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mut total = 0.0;
    let mut start = 0;
    while start < sorted.len() {
        let mut end = start;
        while end + 1 < sorted.len() && sorted[end + 1] == sorted[start] {
            end += 1;
        }
        let t = (end - start + 1) as f64;
        total += t * t * t - t;
        start = end + 1;
    }
    total
}

/// Approximation of the standard normal CDF using the Abramowitz and Stegun
/// formula. Accurate to about 10^-5.
fn standard_normal_cdf(x: f64) -> f64 {
    if x < 0.0 {
        return 1.0 - standard_normal_cdf(-x);
    }

    // Constants for Abramowitz and Stegun approximation (formula 26.2.17)
    let b1 = 0.319_381_530;
    let b2 = -0.356_563_782;
    let b3 = 1.781_477_937;
    let b4 = -1.821_255_978;
    let b5 = 1.330_274_429;
    let p = 0.231_641_9;

    let t = 1.0 / (1.0 + p * x);
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;

    let pdf = (-x * x / 2.0).exp() / (2.0 * std::f64::consts::PI).sqrt();
    1.0 - pdf * (b1 * t + b2 * t2 + b3 * t3 + b4 * t4 + b5 * t5)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================
    // Ranking Tests
    // ============================================

    #[test]
    fn average_ranks_without_ties() {
        let ranks = average_ranks(&[3.0, 1.0, 2.0]);
        assert_eq!(ranks, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn average_ranks_with_ties() {
        // Three tied smallest values share rank (1 + 2 + 3) / 3 = 2.
        let ranks = average_ranks(&[1.0, 5.0, 1.0, 1.5, 1.0]);
        assert_eq!(ranks, vec![2.0, 5.0, 2.0, 4.0, 2.0]);
    }

    #[test]
    fn tie_correction_counts_groups() {
        // A group of three ties contributes 27 - 3 = 24.
        assert!((tie_correction(&[2.0, 2.0, 2.0, 4.0]) - 24.0).abs() < f64::EPSILON);
        assert!((tie_correction(&[1.0, 2.0, 3.0]) - 0.0).abs() < f64::EPSILON);
    }

    // ============================================
    // Normal CDF Tests
    // ============================================

    #[test]
    fn normal_cdf_known_values() {
        assert!((standard_normal_cdf(0.0) - 0.5).abs() < 1e-6);
        assert!((standard_normal_cdf(1.96) - 0.975).abs() < 1e-3);
        assert!((standard_normal_cdf(-1.96) - 0.025).abs() < 1e-3);
    }

    // ============================================
    // Signed-Rank Test Values
    // ============================================

    #[test]
    fn uniform_shift_gives_strong_one_sided_evidence() {
        let baseline = [1.0, 2.0, 3.0, 4.0, 5.0];
        let test = [2.0, 3.0, 4.0, 5.0, 6.0];

        let result = paired_rank_test(&baseline, &test).unwrap();

        // All differences are -1: r_plus = 0, so the statistic is 0 and the
        // folded p-value sits near 0.975.
        assert!((result.statistic - 0.0).abs() < f64::EPSILON);
        assert!(
            (result.p_value - 0.9747).abs() < 2e-3,
            "p-value was {}",
            result.p_value
        );
    }

    #[test]
    fn symmetric_differences_with_pratt_zero() {
        let baseline = [1.0, 2.0, 3.0];
        let test = [1.0, 3.0, 2.0];

        let result = paired_rank_test(&baseline, &test).unwrap();

        // One zero pair is ranked but unsigned; the remaining +1/-1 pair is
        // symmetric, so z = 0 and the p-value is exactly 1.
        assert!((result.statistic - 2.5).abs() < f64::EPSILON);
        assert!((result.p_value - 1.0).abs() < 1e-9);
    }

    #[test]
    fn mixed_signs_with_ties() {
        let baseline = [3.0, 1.0, 4.0, 1.5, 9.0];
        let test = [2.0, 6.0, 5.0, 3.0, 8.0];

        let result = paired_rank_test(&baseline, &test).unwrap();

        assert!((result.statistic - 4.0).abs() < f64::EPSILON);
        assert!(
            (result.p_value - 0.6637).abs() < 2e-3,
            "p-value was {}",
            result.p_value
        );
    }

    #[test]
    fn p_value_is_always_at_least_half() {
        let cases: [(&[f64], &[f64]); 3] = [
            (&[1.0, 2.0, 3.0, 4.0], &[4.0, 3.0, 2.0, 1.0]),
            (&[10.0, 11.0, 12.0, 13.0, 14.0], &[9.0, 12.0, 11.0, 14.0, 13.0]),
            (&[0.5, 0.25, 0.75], &[0.45, 0.3, 0.7]),
        ];

        for (baseline, test) in cases {
            let result = paired_rank_test(baseline, test).unwrap();
            assert!(
                (0.5..=1.0).contains(&result.p_value),
                "p-value {} out of range",
                result.p_value
            );
        }
    }

    // ============================================
    // Input Validation
    // ============================================

    #[test]
    fn empty_samples_are_rejected() {
        assert!(paired_rank_test(&[], &[]).is_err());
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        assert!(paired_rank_test(&[1.0, 2.0], &[1.0]).is_err());
    }

    #[test]
    fn all_zero_differences_are_rejected() {
        let samples = [0.3, 0.4, 0.5];
        let err = paired_rank_test(&samples, &samples).unwrap_err();
        assert!(err.to_string().contains("zero"));
    }
}
