//! Score presentation configuration.

use serde::{Deserialize, Serialize};

/// How the per-fold score difference against the baseline is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreType {
    /// `baseline - other`, averaged over folds.
    AbsoluteDiff,
    /// `(baseline - other) / |baseline|`, averaged over folds.
    RelativeDiff,
}

/// Presentation parameters for comparison tables.
///
/// A pure value object; aggregators compare configs by value to decide when
/// memoized tables must be recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreConfig {
    score_type: ScoreType,
    multiplier: f64,
    score_level: f64,
    interval_level: f64,
    overfit_iterations_info: bool,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            score_type: ScoreType::RelativeDiff,
            multiplier: 1000.0,
            score_level: 0.01,
            interval_level: 0.05,
            overfit_iterations_info: true,
        }
    }
}

impl ScoreConfig {
    /// Creates a config with the default presentation parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the score type.
    #[must_use]
    pub fn with_score_type(mut self, score_type: ScoreType) -> Self {
        self.score_type = score_type;
        self
    }

    /// Sets the display multiplier applied to scores and interval bounds.
    #[must_use]
    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Sets the significance level used for GOOD/BAD decisions.
    #[must_use]
    pub fn with_score_level(mut self, score_level: f64) -> Self {
        self.score_level = score_level;
        self
    }

    /// Sets the level for the bootstrap confidence interval.
    #[must_use]
    pub fn with_interval_level(mut self, interval_level: f64) -> Self {
        self.interval_level = interval_level;
        self
    }

    /// Toggles the overfitting-iteration diagnostic columns.
    #[must_use]
    pub fn with_overfit_iterations_info(mut self, enabled: bool) -> Self {
        self.overfit_iterations_info = enabled;
        self
    }

    /// Returns the score type.
    #[must_use]
    pub fn score_type(&self) -> ScoreType {
        self.score_type
    }

    /// Returns the display multiplier.
    #[must_use]
    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    /// Returns the decision significance level.
    #[must_use]
    pub fn score_level(&self) -> f64 {
        self.score_level
    }

    /// Returns the confidence-interval level.
    #[must_use]
    pub fn interval_level(&self) -> f64 {
        self.interval_level
    }

    /// True when overfitting-iteration diagnostics are computed.
    #[must_use]
    pub fn overfit_iterations_info(&self) -> bool {
        self.overfit_iterations_info
    }
}
