//! Percentile-bootstrap confidence interval for a sample mean.
//!
//! Used on the per-fold score differences against the baseline. This is a
//! plain percentile bootstrap, not bias-corrected — a documented
//! simplification, adequate for the mean of small fold counts.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Configuration for bootstrap resampling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootstrapConfig {
    /// Number of bootstrap resamples.
    pub tries: usize,
    /// Optional seed for reproducible results.
    pub seed: Option<u64>,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            tries: 999,
            seed: None,
        }
    }
}

impl BootstrapConfig {
    /// Creates a configuration with the given number of resamples.
    #[must_use]
    pub fn new(tries: usize) -> Self {
        Self { tries, seed: None }
    }

    /// Sets a seed for reproducible bootstrap samples.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Estimates a confidence interval for the mean of `samples`.
///
/// Draws `tries` with-replacement resamples of the original size, computes
/// each resample mean, sorts them, and returns the values at ranks
/// `floor(tries * level / 2)` and `floor(tries * (1 - level / 2))`.
///
/// An all-zero sample short-circuits to `(0.0, 0.0)` without resampling, as
/// does an empty one.
#[must_use]
pub fn bootstrap_mean_interval(samples: &[f64], level: f64, config: &BootstrapConfig) -> (f64, f64) {
    if config.tries == 0 || samples.is_empty() || samples.iter().all(|s| *s == 0.0) {
        return (0.0, 0.0);
    }

    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let n = samples.len();
    let mut means: Vec<f64> = Vec::with_capacity(config.tries);
    for _ in 0..config.tries {
        let sum: f64 = (0..n).map(|_| samples[rng.gen_range(0..n)]).sum();
        means.push(sum / n as f64);
    }
    means.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let tries = config.tries as f64;
    let left_rank = ((tries * (level / 2.0)) as usize).min(config.tries - 1);
    let right_rank = ((tries * (1.0 - level / 2.0)) as usize).min(config.tries - 1);
    (means[left_rank], means[right_rank])
}
