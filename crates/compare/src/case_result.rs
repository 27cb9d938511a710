//! Per-case learning-curve store for a single metric.
//!
//! Accumulates one learning curve per fold and derives the best score and
//! best position per fold as curves are recorded. Built by repeated
//! `record_fold` calls, read-only afterward.

use crate::series::{CurvePoint, CurveSeries};
use curve_eval_core::{EvalError, ExecutionCase, FoldId, LearningCurve, MetricDescription, Result};
use std::collections::HashMap;
use std::fmt;

/// Best-position fraction above which a fold is tallied in the
/// `underfitting` counter.
pub const DEFAULT_OVERFIT_BORDER: f64 = 0.15;
/// Best-position fraction below which a fold is tallied in the
/// `overfitting` counter.
pub const DEFAULT_UNDERFIT_BORDER: f64 = 0.95;

/// Per-fold fit tallies.
///
/// The counter names are kept for report compatibility even though they read
/// inverted: a fold whose best score lands late on the curve increments
/// `underfitting`, one whose best score lands early increments `overfitting`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FitCounts {
    /// Folds whose best-position fraction fell below the underfit border.
    pub overfitting: usize,
    /// Folds whose best-position fraction exceeded the overfit border.
    pub underfitting: usize,
}

/// Sanity verdict over all folds of one case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitQuality {
    Overfitting,
    Underfitting,
    Good,
}

impl fmt::Display for FitQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Overfitting => "Overfitting",
            Self::Underfitting => "Underfitting",
            Self::Good => "Good",
        };
        f.write_str(label)
    }
}

/// Aggregated learning-curve results for one execution case and one metric.
#[derive(Debug, Clone)]
pub struct CaseEvaluationResult {
    case: ExecutionCase,
    metric: MetricDescription,
    eval_step: usize,
    fold_order: Vec<FoldId>,
    curves: HashMap<FoldId, LearningCurve>,
    best_scores: HashMap<FoldId, f64>,
    best_positions: HashMap<FoldId, usize>,
}

impl CaseEvaluationResult {
    /// Creates an empty store for one (case, metric) pair.
    #[must_use]
    pub fn new(case: ExecutionCase, metric: MetricDescription, eval_step: usize) -> Self {
        Self {
            case,
            metric,
            eval_step,
            fold_order: Vec::new(),
            curves: HashMap::new(),
            best_scores: HashMap::new(),
            best_positions: HashMap::new(),
        }
    }

    /// Records one fold's learning curve, deriving its best score and
    /// position from the metric's optimization direction (first occurrence
    /// on ties). Re-recording a fold overwrites the previous entry.
    ///
    /// # Errors
    /// `CaseMismatch` when `case` is not this store's case; `InvalidInput`
    /// for an empty curve.
    pub fn record_fold(
        &mut self,
        case: &ExecutionCase,
        fold: FoldId,
        curve: LearningCurve,
    ) -> Result<()> {
        if *case != self.case {
            return Err(EvalError::case_mismatch(self.case.clone(), case.clone()));
        }
        let (score, position) = curve
            .best(self.metric.is_max_optimal())
            .ok_or_else(|| EvalError::invalid(format!("empty learning curve for fold {fold}")))?;

        if !self.curves.contains_key(&fold) {
            self.fold_order.push(fold);
        }
        self.curves.insert(fold, curve);
        self.best_scores.insert(fold, score);
        self.best_positions.insert(fold, position);
        Ok(())
    }

    /// The execution case this store belongs to.
    #[must_use]
    pub fn case(&self) -> &ExecutionCase {
        &self.case
    }

    /// The metric these curves were evaluated with.
    #[must_use]
    pub fn metric(&self) -> &MetricDescription {
        &self.metric
    }

    /// Iterations between curve measurements.
    #[must_use]
    pub fn eval_step(&self) -> usize {
        self.eval_step
    }

    /// Recorded folds, in insertion order.
    #[must_use]
    pub fn fold_ids(&self) -> &[FoldId] {
        &self.fold_order
    }

    /// Number of recorded folds.
    #[must_use]
    pub fn fold_count(&self) -> usize {
        self.fold_order.len()
    }

    /// The learning curve recorded for `fold`.
    ///
    /// # Errors
    /// `UnknownFold` when the fold was never recorded.
    pub fn fold_curve(&self, fold: FoldId) -> Result<&LearningCurve> {
        self.curves
            .get(&fold)
            .ok_or_else(|| EvalError::unknown_fold(fold))
    }

    /// The best score reached on `fold`.
    ///
    /// # Errors
    /// `UnknownFold` when the fold was never recorded.
    pub fn best_score(&self, fold: FoldId) -> Result<f64> {
        self.best_scores
            .get(&fold)
            .copied()
            .ok_or_else(|| EvalError::unknown_fold(fold))
    }

    /// The curve position of the best score on `fold`.
    ///
    /// # Errors
    /// `UnknownFold` when the fold was never recorded.
    pub fn best_position(&self, fold: FoldId) -> Result<usize> {
        self.best_positions
            .get(&fold)
            .copied()
            .ok_or_else(|| EvalError::unknown_fold(fold))
    }

    /// The training iteration of the best score on `fold`
    /// (position times the evaluation step).
    ///
    /// # Errors
    /// `UnknownFold` when the fold was never recorded.
    pub fn best_iteration(&self, fold: FoldId) -> Result<usize> {
        Ok(self.best_position(fold)? * self.eval_step)
    }

    /// Tallies folds by where their best score lands on the curve.
    ///
    /// `fraction = best_position / curve_len`; a fraction above
    /// `overfit_border` increments `underfitting`, otherwise a fraction
    /// below `underfit_border` increments `overfitting`.
    #[must_use]
    pub fn fit_counts(&self, overfit_border: f64, underfit_border: f64) -> FitCounts {
        let mut counts = FitCounts::default();
        for fold in &self.fold_order {
            let fraction = self.best_positions[fold] as f64 / self.curves[fold].len() as f64;
            if fraction > overfit_border {
                counts.underfitting += 1;
            } else if fraction < underfit_border {
                counts.overfitting += 1;
            }
        }
        counts
    }

    /// Sanity verdict over all folds, with the default borders.
    #[must_use]
    pub fn fit_quality(&self) -> FitQuality {
        let counts = self.fit_counts(DEFAULT_OVERFIT_BORDER, DEFAULT_UNDERFIT_BORDER);
        if counts.overfitting > counts.underfitting {
            FitQuality::Overfitting
        } else if counts.underfitting > counts.overfitting {
            FitQuality::Underfitting
        } else {
            FitQuality::Good
        }
    }

    /// One renderable series per fold, points at
    /// `(position * eval_step, score)`. Without an explicit `offset` the
    /// first tenth of each curve is skipped.
    #[must_use]
    pub fn learning_curve_series(&self, offset: Option<usize>) -> Vec<CurveSeries> {
        self.fold_order
            .iter()
            .map(|fold| {
                let curve = &self.curves[fold];
                let first = offset.unwrap_or(curve.len() / 10);
                CurveSeries {
                    label: format!("Fold #{fold}"),
                    points: (first..curve.len())
                        .map(|position| CurvePoint {
                            iteration: position * self.eval_step,
                            score: curve.scores()[position],
                        })
                        .collect(),
                }
            })
            .collect()
    }
}
