//! Cross-case comparison of learning-curve evaluation results.
//!
//! This crate aggregates per-fold learning curves into per-case best scores,
//! compares every case against a chosen baseline with a paired signed-rank
//! test and a percentile-bootstrap interval on the mean difference, and
//! presents the outcome as a decision table per metric.

pub mod bootstrap;
pub mod case_result;
pub mod metric_result;
pub mod results;
pub mod series;
pub mod table;

pub use bootstrap::{bootstrap_mean_interval, BootstrapConfig};
pub use case_result::{
    CaseEvaluationResult, FitCounts, FitQuality, DEFAULT_OVERFIT_BORDER, DEFAULT_UNDERFIT_BORDER,
};
pub use metric_result::MetricEvaluationResult;
pub use results::EvaluationResults;
pub use series::{CurvePoint, CurveSeries};
pub use table::{ComparisonRow, ComparisonTable, Decision, OverfitDiagnostic};
