//! Catalog of per-metric evaluation results.

use crate::metric_result::MetricEvaluationResult;
use curve_eval_core::{EvalError, ExecutionCase, Result};
use std::collections::HashMap;

/// Keyed collection of [`MetricEvaluationResult`]s, one per metric name.
#[derive(Debug, Clone)]
pub struct EvaluationResults {
    metric_names: Vec<String>,
    results: HashMap<String, MetricEvaluationResult>,
}

impl EvaluationResults {
    /// Builds a catalog from per-metric results.
    ///
    /// # Errors
    /// `InconsistentInput` for an empty input or a duplicate metric name.
    pub fn new(metric_results: Vec<MetricEvaluationResult>) -> Result<Self> {
        if metric_results.is_empty() {
            return Err(EvalError::inconsistent("need at least one metric result"));
        }

        let mut metric_names = Vec::with_capacity(metric_results.len());
        let mut results = HashMap::with_capacity(metric_results.len());
        for result in metric_results {
            let name = result.metric().name().to_string();
            if results.contains_key(&name) {
                return Err(EvalError::inconsistent(format!("duplicate metric '{name}'")));
            }
            metric_names.push(name.clone());
            results.insert(name, result);
        }

        Ok(Self {
            metric_names,
            results,
        })
    }

    /// Metric names, in insertion order.
    #[must_use]
    pub fn metric_names(&self) -> &[String] {
        &self.metric_names
    }

    /// Number of metrics in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.metric_names.len()
    }

    /// True when the catalog holds no metrics. Construction forbids this;
    /// kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.metric_names.is_empty()
    }

    /// The aggregator for `metric`.
    ///
    /// # Errors
    /// `UnknownMetric` when the name was never registered.
    pub fn metric_result(&self, metric: &str) -> Result<&MetricEvaluationResult> {
        self.results
            .get(metric)
            .ok_or_else(|| EvalError::unknown_metric(metric))
    }

    /// Mutable access to the aggregator for `metric` (comparison tables are
    /// computed on demand and memoized behind `&mut`).
    ///
    /// # Errors
    /// `UnknownMetric` when the name was never registered.
    pub fn metric_result_mut(&mut self, metric: &str) -> Result<&mut MetricEvaluationResult> {
        self.results
            .get_mut(metric)
            .ok_or_else(|| EvalError::unknown_metric(metric))
    }

    /// Makes `case` the baseline for every metric's aggregator.
    ///
    /// The case is validated against every aggregator before anything is
    /// mutated, so a miss leaves all baselines untouched.
    ///
    /// # Errors
    /// `UnknownCase` when any aggregator does not know the case.
    pub fn set_baseline_for_all(&mut self, case: &ExecutionCase) -> Result<()> {
        for name in &self.metric_names {
            if !self.results[name].has_case(case) {
                return Err(EvalError::unknown_case(case.clone()));
            }
        }
        for result in self.results.values_mut() {
            result.change_baseline(case)?;
        }
        Ok(())
    }
}
