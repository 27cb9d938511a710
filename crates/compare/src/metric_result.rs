//! Cross-case aggregation and baseline comparison for one metric.

use crate::bootstrap::{bootstrap_mean_interval, BootstrapConfig};
use crate::case_result::CaseEvaluationResult;
use crate::series::{CurvePoint, CurveSeries};
use crate::table::{ComparisonRow, ComparisonTable, Decision, OverfitDiagnostic};
use curve_eval_core::stats::paired_rank_test;
use curve_eval_core::{
    EvalError, ExecutionCase, FoldId, MetricDescription, Result, ScoreConfig, ScoreType,
};
use std::collections::{HashMap, HashSet};

/// Evaluation results for one metric across all execution cases.
///
/// Holds one [`CaseEvaluationResult`] per case, compares every case against
/// the current baseline, and memoizes the comparison tables per baseline
/// case. Changing the baseline or the score configuration drops the memo.
#[derive(Debug, Clone)]
pub struct MetricEvaluationResult {
    metric: MetricDescription,
    eval_step: usize,
    cases: Vec<ExecutionCase>,
    case_results: HashMap<ExecutionCase, CaseEvaluationResult>,
    fold_order: Vec<FoldId>,
    baseline: ExecutionCase,
    score_config: ScoreConfig,
    bootstrap_config: BootstrapConfig,
    tables: HashMap<ExecutionCase, ComparisonTable>,
}

impl MetricEvaluationResult {
    /// Builds an aggregator from per-case results.
    ///
    /// The first case becomes the initial baseline. Validation is
    /// fail-fast: at least two case results, no duplicate case, identical
    /// metric description, identical fold-id sets, and identical eval step
    /// across all cases.
    ///
    /// # Errors
    /// `InconsistentInput` describing the first violated condition.
    pub fn new(case_results: Vec<CaseEvaluationResult>) -> Result<Self> {
        if case_results.len() < 2 {
            return Err(EvalError::inconsistent(format!(
                "need at least 2 case results, got {}",
                case_results.len()
            )));
        }

        let metric = case_results[0].metric().clone();
        let eval_step = case_results[0].eval_step();
        let fold_order = case_results[0].fold_ids().to_vec();
        let fold_set: HashSet<FoldId> = fold_order.iter().copied().collect();
        let baseline = case_results[0].case().clone();

        let mut cases = Vec::with_capacity(case_results.len());
        let mut by_case = HashMap::with_capacity(case_results.len());
        for result in case_results {
            if result.metric() != &metric {
                return Err(EvalError::inconsistent(format!(
                    "metric descriptions must match across case results, '{}' differs for case '{}'",
                    result.metric(),
                    result.case()
                )));
            }
            if result.eval_step() != eval_step {
                return Err(EvalError::inconsistent(format!(
                    "eval steps must match across case results, case '{}' has {}",
                    result.case(),
                    result.eval_step()
                )));
            }
            let result_folds: HashSet<FoldId> = result.fold_ids().iter().copied().collect();
            if result_folds != fold_set {
                return Err(EvalError::inconsistent(format!(
                    "case results must be computed on the same folds, case '{}' differs",
                    result.case()
                )));
            }
            if by_case.contains_key(result.case()) {
                return Err(EvalError::inconsistent(format!(
                    "duplicate case '{}'",
                    result.case()
                )));
            }
            cases.push(result.case().clone());
            by_case.insert(result.case().clone(), result);
        }

        Ok(Self {
            metric,
            eval_step,
            cases,
            case_results: by_case,
            fold_order,
            baseline,
            score_config: ScoreConfig::default(),
            bootstrap_config: BootstrapConfig::default(),
            tables: HashMap::new(),
        })
    }

    /// Sets the score configuration at construction time.
    #[must_use]
    pub fn with_score_config(mut self, config: ScoreConfig) -> Self {
        self.set_score_config(config);
        self
    }

    /// Sets the bootstrap configuration at construction time.
    #[must_use]
    pub fn with_bootstrap_config(mut self, config: BootstrapConfig) -> Self {
        self.bootstrap_config = config;
        self.tables.clear();
        self
    }

    /// The metric these results were computed for.
    #[must_use]
    pub fn metric(&self) -> &MetricDescription {
        &self.metric
    }

    /// Iterations between curve measurements.
    #[must_use]
    pub fn eval_step(&self) -> usize {
        self.eval_step
    }

    /// Compared cases, in insertion order.
    #[must_use]
    pub fn cases(&self) -> &[ExecutionCase] {
        &self.cases
    }

    /// The case everything else is compared against.
    #[must_use]
    pub fn baseline_case(&self) -> &ExecutionCase {
        &self.baseline
    }

    /// Fold ids the results were computed on, in the first case's order.
    #[must_use]
    pub fn fold_ids(&self) -> &[FoldId] {
        &self.fold_order
    }

    /// True when `case` was part of construction.
    #[must_use]
    pub fn has_case(&self, case: &ExecutionCase) -> bool {
        self.case_results.contains_key(case)
    }

    /// The per-case result for `case`.
    ///
    /// # Errors
    /// `UnknownCase` when the case was not part of construction.
    pub fn case_result(&self, case: &ExecutionCase) -> Result<&CaseEvaluationResult> {
        self.case_results
            .get(case)
            .ok_or_else(|| EvalError::unknown_case(case.clone()))
    }

    /// The current score configuration.
    #[must_use]
    pub fn score_config(&self) -> &ScoreConfig {
        &self.score_config
    }

    /// Replaces the score configuration, dropping memoized tables when the
    /// value actually changes.
    pub fn set_score_config(&mut self, config: ScoreConfig) {
        if config != self.score_config {
            self.score_config = config;
            self.tables.clear();
            tracing::debug!(metric = %self.metric, "score config changed, memoized tables dropped");
        }
    }

    /// Makes `case` the baseline for subsequent comparisons, dropping
    /// memoized tables when the baseline actually changes.
    ///
    /// # Errors
    /// `UnknownCase` when the case was not part of construction.
    pub fn change_baseline(&mut self, case: &ExecutionCase) -> Result<()> {
        if !self.case_results.contains_key(case) {
            return Err(EvalError::unknown_case(case.clone()));
        }
        if *case != self.baseline {
            self.baseline = case.clone();
            self.tables.clear();
            tracing::debug!(baseline = %self.baseline, metric = %self.metric, "baseline changed, memoized tables dropped");
        }
        Ok(())
    }

    /// The comparison table against the current baseline.
    ///
    /// # Errors
    /// Propagates estimator failures on degenerate inputs.
    pub fn baseline_comparison(&mut self) -> Result<&ComparisonTable> {
        let baseline = self.baseline.clone();
        self.comparison_table(&baseline)
    }

    /// The comparison table against an explicit baseline case, memoized per
    /// baseline.
    ///
    /// # Errors
    /// `UnknownCase` for a foreign baseline; estimator failures propagate.
    pub fn comparison_table(&mut self, baseline: &ExecutionCase) -> Result<&ComparisonTable> {
        if !self.case_results.contains_key(baseline) {
            return Err(EvalError::unknown_case(baseline.clone()));
        }
        if self.tables.contains_key(baseline) {
            tracing::debug!(baseline = %baseline, metric = %self.metric, "comparison table served from memo");
        } else {
            tracing::debug!(baseline = %baseline, metric = %self.metric, "computing comparison table");
            let table = self.compute_table(baseline)?;
            self.tables.insert(baseline.clone(), table);
        }
        Ok(&self.tables[baseline])
    }

    /// One renderable series per case for a fixed fold.
    ///
    /// # Errors
    /// `UnknownFold` when the fold was not part of the results.
    pub fn fold_curve_series(&self, fold: FoldId, offset: Option<usize>) -> Result<Vec<CurveSeries>> {
        self.cases
            .iter()
            .map(|case| {
                let curve = self.case_results[case].fold_curve(fold)?;
                let first = offset.unwrap_or(curve.len() / 10);
                Ok(CurveSeries {
                    label: format!("Case {case}"),
                    points: (first..curve.len())
                        .map(|position| CurvePoint {
                            iteration: position * self.eval_step,
                            score: curve.scores()[position],
                        })
                        .collect(),
                })
            })
            .collect()
    }

    fn compute_table(&self, baseline_case: &ExecutionCase) -> Result<ComparisonTable> {
        let baseline = &self.case_results[baseline_case];
        let baseline_scores = self.scores_in_fold_order(baseline)?;
        let baseline_iterations = self.iterations_in_fold_order(baseline)?;

        let mut rows = Vec::with_capacity(self.cases.len() - 1);
        for case in &self.cases {
            if case == baseline_case {
                continue;
            }
            let result = &self.case_results[case];
            let case_scores = self.scores_in_fold_order(result)?;
            let rank = paired_rank_test(&baseline_scores, &case_scores)?;

            let mut diffs: Vec<f64> = baseline_scores
                .iter()
                .zip(&case_scores)
                .map(|(b, t)| b - t)
                .collect();
            if self.score_config.score_type() == ScoreType::RelativeDiff {
                for (diff, b) in diffs.iter_mut().zip(&baseline_scores) {
                    *diff /= b.abs();
                }
            }
            // Positive diff always reads "this case beats the baseline".
            if self.metric.is_max_optimal() {
                for diff in &mut diffs {
                    *diff = -*diff;
                }
            }
            let mean_diff = diffs.iter().sum::<f64>() / diffs.len() as f64;

            let (interval_lower, interval_upper) = bootstrap_mean_interval(
                &diffs,
                self.score_config.interval_level(),
                &self.bootstrap_config,
            );

            let decision =
                Decision::classify(rank.p_value, mean_diff, self.score_config.score_level());

            let overfit = if self.score_config.overfit_iterations_info() {
                let case_iterations = self.iterations_in_fold_order(result)?;
                let iteration_rank = paired_rank_test(&baseline_iterations, &case_iterations)?;
                let iteration_diff = case_iterations
                    .iter()
                    .zip(&baseline_iterations)
                    .map(|(t, b)| t - b)
                    .sum::<f64>()
                    / case_iterations.len() as f64;
                Some(OverfitDiagnostic {
                    iteration_diff,
                    p_value: iteration_rank.p_value,
                })
            } else {
                None
            };

            let multiplier = self.score_config.multiplier();
            rows.push(ComparisonRow {
                case: case.clone(),
                p_value: rank.p_value,
                score: mean_diff * multiplier,
                interval_lower: interval_lower * multiplier,
                interval_upper: interval_upper * multiplier,
                decision,
                overfit,
            });
        }

        if self.metric.is_max_optimal() {
            rows.sort_by(|a, b| a.score.partial_cmp(&b.score).unwrap_or(std::cmp::Ordering::Equal));
        } else {
            rows.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        }

        Ok(ComparisonTable::new(
            baseline_case.clone(),
            self.score_config.score_level(),
            rows,
        ))
    }

    /// Best scores aligned to the canonical fold order. Misaligned fold
    /// sets fail fast instead of producing a silently partial pairing.
    fn scores_in_fold_order(&self, result: &CaseEvaluationResult) -> Result<Vec<f64>> {
        self.fold_order
            .iter()
            .map(|fold| result.best_score(*fold))
            .collect()
    }

    /// Best iterations aligned to the canonical fold order.
    fn iterations_in_fold_order(&self, result: &CaseEvaluationResult) -> Result<Vec<f64>> {
        self.fold_order
            .iter()
            .map(|fold| result.best_iteration(*fold).map(|it| it as f64))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curve_eval_core::LearningCurve;

    fn auc() -> MetricDescription {
        MetricDescription::new("AUC", true)
    }

    fn logloss() -> MetricDescription {
        MetricDescription::new("Logloss", false)
    }

    fn case_result(
        label: &str,
        metric: &MetricDescription,
        eval_step: usize,
        curves: &[(u32, Vec<f64>)],
    ) -> CaseEvaluationResult {
        let case = ExecutionCase::new(label);
        let mut result = CaseEvaluationResult::new(case.clone(), metric.clone(), eval_step);
        for (fold, scores) in curves {
            result
                .record_fold(&case, FoldId(*fold), LearningCurve::new(scores.clone()))
                .unwrap();
        }
        result
    }

    /// Single-point curves: the best score per fold is the point itself.
    fn flat_case(
        label: &str,
        metric: &MetricDescription,
        scores: &[f64],
    ) -> CaseEvaluationResult {
        let curves: Vec<(u32, Vec<f64>)> = scores
            .iter()
            .enumerate()
            .map(|(fold, score)| (fold as u32, vec![*score]))
            .collect();
        case_result(label, metric, 10, &curves)
    }

    fn seeded_config() -> BootstrapConfig {
        BootstrapConfig::new(999).with_seed(42)
    }

    /// Scores-only config: quiet overfit diagnostics so single-point curves
    /// do not degenerate the iteration rank test.
    fn scores_only_config() -> ScoreConfig {
        ScoreConfig::default()
            .with_score_type(ScoreType::AbsoluteDiff)
            .with_multiplier(1.0)
            .with_score_level(0.05)
            .with_overfit_iterations_info(false)
    }

    const BASE_SCORES: [f64; 6] = [0.70, 0.71, 0.72, 0.73, 0.74, 0.75];

    fn shifted(by: &[f64]) -> Vec<f64> {
        BASE_SCORES.iter().zip(by).map(|(s, d)| s + d).collect()
    }

    // ============================================
    // Construction Validation
    // ============================================

    #[test]
    fn single_case_is_rejected() {
        let only = flat_case("base", &auc(), &BASE_SCORES);
        let err = MetricEvaluationResult::new(vec![only]).unwrap_err();
        assert!(matches!(err, EvalError::InconsistentInput(_)));
        assert!(err.to_string().contains("at least 2"));
    }

    #[test]
    fn mismatched_metrics_are_rejected() {
        let base = flat_case("base", &auc(), &BASE_SCORES);
        let other = flat_case("other", &logloss(), &BASE_SCORES);
        let err = MetricEvaluationResult::new(vec![base, other]).unwrap_err();
        assert!(err.to_string().contains("metric"));
    }

    #[test]
    fn mismatched_fold_sets_are_rejected() {
        let base = flat_case("base", &auc(), &BASE_SCORES);
        let other = case_result("other", &auc(), 10, &[(0, vec![0.7]), (9, vec![0.8])]);
        let err = MetricEvaluationResult::new(vec![base, other]).unwrap_err();
        assert!(err.to_string().contains("folds"));
    }

    #[test]
    fn mismatched_eval_steps_are_rejected() {
        let curves: Vec<(u32, Vec<f64>)> = BASE_SCORES
            .iter()
            .enumerate()
            .map(|(fold, score)| (fold as u32, vec![*score]))
            .collect();
        let base = case_result("base", &auc(), 10, &curves);
        let other = case_result("other", &auc(), 50, &curves);
        let err = MetricEvaluationResult::new(vec![base, other]).unwrap_err();
        assert!(err.to_string().contains("eval steps"));
    }

    #[test]
    fn duplicate_cases_are_rejected() {
        let first = flat_case("base", &auc(), &BASE_SCORES);
        let second = flat_case("base", &auc(), &BASE_SCORES);
        let err = MetricEvaluationResult::new(vec![first, second]).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn two_matching_cases_construct() {
        let base = flat_case("base", &auc(), &BASE_SCORES);
        let other = flat_case("other", &auc(), &shifted(&[0.01; 6]));

        let result = MetricEvaluationResult::new(vec![base, other]).unwrap();

        assert_eq!(result.baseline_case(), &ExecutionCase::new("base"));
        assert_eq!(result.cases().len(), 2);
        assert_eq!(result.fold_ids().len(), 6);
    }

    // ============================================
    // Comparison Table
    // ============================================

    #[test]
    fn table_excludes_the_baseline_row() {
        let base = flat_case("base", &auc(), &BASE_SCORES);
        let better = flat_case("better", &auc(), &shifted(&[0.02, 0.025, 0.03, 0.02, 0.022, 0.028]));
        let worse = flat_case("worse", &auc(), &shifted(&[-0.02, -0.025, -0.03, -0.02, -0.022, -0.028]));

        let mut result = MetricEvaluationResult::new(vec![base, better, worse])
            .unwrap()
            .with_score_config(scores_only_config())
            .with_bootstrap_config(seeded_config());

        let table = result.baseline_comparison().unwrap();

        assert_eq!(table.len(), 2);
        assert!(table.row(&ExecutionCase::new("base")).is_none());
        assert!(table.row(&ExecutionCase::new("better")).is_some());
        assert!(table.row(&ExecutionCase::new("worse")).is_some());
    }

    #[test]
    fn decisions_follow_direction_for_max_optimal_metric() {
        let base = flat_case("base", &auc(), &BASE_SCORES);
        let better = flat_case("better", &auc(), &shifted(&[0.02, 0.025, 0.03, 0.02, 0.022, 0.028]));
        let worse = flat_case("worse", &auc(), &shifted(&[-0.02, -0.025, -0.03, -0.02, -0.022, -0.028]));

        let mut result = MetricEvaluationResult::new(vec![base, better, worse])
            .unwrap()
            .with_score_config(scores_only_config())
            .with_bootstrap_config(seeded_config());

        let table = result.baseline_comparison().unwrap();
        let better_row = table.row(&ExecutionCase::new("better")).unwrap();
        let worse_row = table.row(&ExecutionCase::new("worse")).unwrap();

        // AUC is max-optimal: the raw diff is negated, so an improvement
        // shows up as a positive score.
        assert!(better_row.score > 0.0);
        assert_eq!(better_row.decision, Decision::Good);
        assert!(better_row.p_value > 0.95);

        assert!(worse_row.score < 0.0);
        assert_eq!(worse_row.decision, Decision::Bad);
    }

    #[test]
    fn mixed_differences_stay_unknown() {
        let base = flat_case("base", &auc(), &BASE_SCORES);
        let noisy = flat_case(
            "noisy",
            &auc(),
            &shifted(&[0.01, -0.012, 0.008, -0.009, 0.011, -0.01]),
        );

        let mut result = MetricEvaluationResult::new(vec![base, noisy])
            .unwrap()
            .with_score_config(scores_only_config())
            .with_bootstrap_config(seeded_config());

        let table = result.baseline_comparison().unwrap();

        assert_eq!(table.rows()[0].decision, Decision::Unknown);
    }

    #[test]
    fn relative_diff_scales_by_baseline_magnitude() {
        // Min-optimal metric, no sign flip: diff = (base - other) / |base|.
        let base = flat_case("base", &logloss(), &[2.0; 6]);
        let other = flat_case("other", &logloss(), &[1.0; 6]);

        let config = ScoreConfig::default()
            .with_score_level(0.05)
            .with_overfit_iterations_info(false);
        let mut result = MetricEvaluationResult::new(vec![base, other])
            .unwrap()
            .with_score_config(config)
            .with_bootstrap_config(seeded_config());

        let table = result.baseline_comparison().unwrap();
        let row = &table.rows()[0];

        // Per-fold relative diff is 0.5, scaled by the default 1000.
        assert!((row.score - 500.0).abs() < 1e-9);
        assert!((row.interval_lower - 500.0).abs() < 1e-9);
        assert!((row.interval_upper - 500.0).abs() < 1e-9);
        assert_eq!(row.decision, Decision::Good);
    }

    #[test]
    fn interval_bounds_bracket_the_score() {
        let base = flat_case("base", &auc(), &BASE_SCORES);
        let better = flat_case("better", &auc(), &shifted(&[0.02, 0.025, 0.03, 0.02, 0.022, 0.028]));

        let mut result = MetricEvaluationResult::new(vec![base, better])
            .unwrap()
            .with_score_config(scores_only_config())
            .with_bootstrap_config(seeded_config());

        let table = result.baseline_comparison().unwrap();
        let row = &table.rows()[0];

        assert!(row.interval_lower <= row.score);
        assert!(row.score <= row.interval_upper);
    }

    // ============================================
    // Row Ordering (both metric directions)
    // ============================================

    #[test]
    fn max_optimal_rows_sort_ascending_by_score() {
        let base = flat_case("base", &auc(), &BASE_SCORES);
        let better = flat_case("better", &auc(), &shifted(&[0.02, 0.025, 0.03, 0.02, 0.022, 0.028]));
        let worse = flat_case("worse", &auc(), &shifted(&[-0.02, -0.025, -0.03, -0.02, -0.022, -0.028]));

        let mut result = MetricEvaluationResult::new(vec![base, better, worse])
            .unwrap()
            .with_score_config(scores_only_config())
            .with_bootstrap_config(seeded_config());

        let table = result.baseline_comparison().unwrap();

        assert_eq!(table.rows()[0].case, ExecutionCase::new("worse"));
        assert_eq!(table.rows()[1].case, ExecutionCase::new("better"));
        assert!(table.rows()[0].score <= table.rows()[1].score);
    }

    #[test]
    fn min_optimal_rows_sort_descending_by_score() {
        let base = flat_case("base", &logloss(), &[0.50, 0.51, 0.52, 0.53, 0.54, 0.55]);
        // Smaller logloss is better; diff = base - other is positive here.
        let better = flat_case("better", &logloss(), &[0.46, 0.47, 0.49, 0.50, 0.52, 0.51]);
        let worse = flat_case("worse", &logloss(), &[0.55, 0.56, 0.56, 0.57, 0.58, 0.60]);

        let mut result = MetricEvaluationResult::new(vec![base, better, worse])
            .unwrap()
            .with_score_config(scores_only_config())
            .with_bootstrap_config(seeded_config());

        let table = result.baseline_comparison().unwrap();

        assert_eq!(table.rows()[0].case, ExecutionCase::new("better"));
        assert_eq!(table.rows()[1].case, ExecutionCase::new("worse"));
        assert!(table.rows()[0].score >= table.rows()[1].score);
        assert_eq!(table.rows()[0].decision, Decision::Good);
        assert_eq!(table.rows()[1].decision, Decision::Bad);
    }

    // ============================================
    // Overfit Diagnostics
    // ============================================

    /// Curve of length 5 peaking at `peak` for a max-optimal metric.
    fn peaked_curve(peak: usize, height: f64) -> Vec<f64> {
        (0..5)
            .map(|i| if i == peak { height } else { 0.1 + i as f64 * 0.01 })
            .collect()
    }

    #[test]
    fn overfit_diagnostics_report_iteration_shift() {
        let metric = auc();
        let base = case_result(
            "base",
            &metric,
            10,
            &[
                (0, peaked_curve(0, 1.0)),
                (1, peaked_curve(1, 1.0)),
                (2, peaked_curve(2, 1.0)),
            ],
        );
        let later = case_result(
            "later",
            &metric,
            10,
            &[
                (0, peaked_curve(2, 1.01)),
                (1, peaked_curve(3, 1.012)),
                (2, peaked_curve(4, 1.014)),
            ],
        );

        let config = ScoreConfig::default()
            .with_score_type(ScoreType::AbsoluteDiff)
            .with_multiplier(1.0)
            .with_score_level(0.05);
        let mut result = MetricEvaluationResult::new(vec![base, later])
            .unwrap()
            .with_score_config(config)
            .with_bootstrap_config(seeded_config());

        let table = result.baseline_comparison().unwrap();
        let overfit = table.rows()[0].overfit.as_ref().unwrap();

        // Best positions shift by two curve steps on every fold; with
        // eval_step 10 that is 20 iterations.
        assert!((overfit.iteration_diff - 20.0).abs() < 1e-9);
        assert!((0.5..=1.0).contains(&overfit.p_value));
    }

    #[test]
    fn overfit_diagnostics_absent_when_disabled() {
        let base = flat_case("base", &auc(), &BASE_SCORES);
        let other = flat_case("other", &auc(), &shifted(&[0.01; 6]));

        let mut result = MetricEvaluationResult::new(vec![base, other])
            .unwrap()
            .with_score_config(scores_only_config())
            .with_bootstrap_config(seeded_config());

        let table = result.baseline_comparison().unwrap();

        assert!(table.rows()[0].overfit.is_none());
    }

    // ============================================
    // Baseline And Memo Management
    // ============================================

    #[test]
    fn change_baseline_rejects_unknown_case() {
        let base = flat_case("base", &auc(), &BASE_SCORES);
        let other = flat_case("other", &auc(), &shifted(&[0.01; 6]));
        let mut result = MetricEvaluationResult::new(vec![base, other]).unwrap();

        let err = result
            .change_baseline(&ExecutionCase::new("stranger"))
            .unwrap_err();

        assert!(matches!(err, EvalError::UnknownCase { .. }));
        assert_eq!(result.baseline_case(), &ExecutionCase::new("base"));
    }

    #[test]
    fn comparison_table_rejects_unknown_baseline() {
        let base = flat_case("base", &auc(), &BASE_SCORES);
        let other = flat_case("other", &auc(), &shifted(&[0.01; 6]));
        let mut result = MetricEvaluationResult::new(vec![base, other]).unwrap();

        assert!(result
            .comparison_table(&ExecutionCase::new("stranger"))
            .is_err());
    }

    #[test]
    fn change_baseline_swaps_the_compared_rows() {
        let base = flat_case("base", &auc(), &BASE_SCORES);
        let other = flat_case("other", &auc(), &shifted(&[0.01; 6]));

        let mut result = MetricEvaluationResult::new(vec![base, other])
            .unwrap()
            .with_score_config(scores_only_config())
            .with_bootstrap_config(seeded_config());

        let first = result.baseline_comparison().unwrap().clone();
        assert!(first.row(&ExecutionCase::new("other")).is_some());

        result.change_baseline(&ExecutionCase::new("other")).unwrap();
        let second = result.baseline_comparison().unwrap();

        assert_eq!(second.baseline(), &ExecutionCase::new("other"));
        assert!(second.row(&ExecutionCase::new("base")).is_some());
        assert!(second.row(&ExecutionCase::new("other")).is_none());
    }

    #[test]
    fn score_config_change_recomputes_instead_of_serving_stale_tables() {
        let base = flat_case("base", &auc(), &BASE_SCORES);
        let better = flat_case("better", &auc(), &shifted(&[0.02, 0.025, 0.03, 0.02, 0.022, 0.028]));

        let mut result = MetricEvaluationResult::new(vec![base, better])
            .unwrap()
            .with_score_config(scores_only_config())
            .with_bootstrap_config(seeded_config());

        let before = result.baseline_comparison().unwrap().rows()[0].score;

        result.set_score_config(scores_only_config().with_multiplier(1000.0));
        let after = result.baseline_comparison().unwrap().rows()[0].score;

        assert!((after - before * 1000.0).abs() < 1e-9);
    }

    #[test]
    fn unchanged_score_config_keeps_the_memo() {
        let base = flat_case("base", &auc(), &BASE_SCORES);
        let better = flat_case("better", &auc(), &shifted(&[0.02, 0.025, 0.03, 0.02, 0.022, 0.028]));

        let mut result = MetricEvaluationResult::new(vec![base, better])
            .unwrap()
            .with_score_config(scores_only_config())
            .with_bootstrap_config(seeded_config());

        let first = result.baseline_comparison().unwrap().clone();
        result.set_score_config(scores_only_config());
        let second = result.baseline_comparison().unwrap();

        assert_eq!(&first, second);
    }

    // ============================================
    // Rendering Surface
    // ============================================

    #[test]
    fn fold_curve_series_yields_one_series_per_case() {
        let metric = auc();
        let curves = vec![(0, vec![0.1, 0.2, 0.3, 0.4]), (1, vec![0.2, 0.3, 0.4, 0.5])];
        let base = case_result("base", &metric, 10, &curves);
        let other = case_result("other", &metric, 10, &curves);

        let result = MetricEvaluationResult::new(vec![base, other]).unwrap();
        let series = result.fold_curve_series(FoldId(0), Some(2)).unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].label, "Case base");
        assert_eq!(series[1].label, "Case other");
        assert_eq!(series[0].points.len(), 2);
        assert_eq!(series[0].points[0].iteration, 20);
    }

    #[test]
    fn fold_curve_series_rejects_unknown_fold() {
        let base = flat_case("base", &auc(), &BASE_SCORES);
        let other = flat_case("other", &auc(), &shifted(&[0.01; 6]));
        let result = MetricEvaluationResult::new(vec![base, other]).unwrap();

        assert!(result.fold_curve_series(FoldId(99), None).is_err());
    }
}
