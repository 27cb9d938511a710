//! Learning curves recorded during training.

use serde::{Deserialize, Serialize};

/// An ordered sequence of metric scores, one per evaluation step.
///
/// Curves are immutable once recorded; the evaluation step interval is kept
/// by the per-case store, not by the curve itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningCurve {
    scores: Vec<f64>,
}

impl LearningCurve {
    /// Creates a curve from raw scores.
    #[must_use]
    pub fn new(scores: Vec<f64>) -> Self {
        Self { scores }
    }

    /// Returns the recorded scores.
    #[must_use]
    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    /// Number of evaluation points on the curve.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// True when the curve has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Returns the best score and its position, or `None` for an empty curve.
    ///
    /// Best means maximum when `is_max_optimal`, minimum otherwise. On ties
    /// the first occurrence wins.
    #[must_use]
    pub fn best(&self, is_max_optimal: bool) -> Option<(f64, usize)> {
        let mut points = self.scores.iter().copied().enumerate();
        let (first_position, first_score) = points.next()?;
        let mut best = (first_score, first_position);
        for (position, score) in points {
            let improves = if is_max_optimal {
                score > best.0
            } else {
                score < best.0
            };
            if improves {
                best = (score, position);
            }
        }
        Some(best)
    }
}

impl From<Vec<f64>> for LearningCurve {
    fn from(scores: Vec<f64>) -> Self {
        Self::new(scores)
    }
}
