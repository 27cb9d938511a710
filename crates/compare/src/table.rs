//! Baseline-vs-others comparison tables.

use curve_eval_core::ExecutionCase;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Verdict on one case against the baseline.
///
/// A verdict requires both statistical significance (the folded p-value
/// exceeding `1 - score_level`) and a practical direction (the sign of the
/// mean difference); everything else is `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    /// The case is significantly better than the baseline.
    Good,
    /// The case is significantly worse than the baseline.
    Bad,
    /// No verdict: insignificant p-value or an exactly zero mean difference.
    Unknown,
}

impl Decision {
    /// Classifies a (p-value, mean difference) pair at `score_level`.
    #[must_use]
    pub fn classify(p_value: f64, mean_diff: f64, score_level: f64) -> Self {
        if p_value > 1.0 - score_level {
            if mean_diff > 0.0 {
                return Self::Good;
            }
            if mean_diff < 0.0 {
                return Self::Bad;
            }
        }
        Self::Unknown
    }

    /// The verdict as it appears in reports.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "GOOD",
            Self::Bad => "BAD",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Early-stopping diagnostic for one case against the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverfitDiagnostic {
    /// Mean of (case best iteration - baseline best iteration) over folds.
    pub iteration_diff: f64,
    /// Folded p-value of the signed-rank test on best iterations.
    pub p_value: f64,
}

/// One comparison row: how one case fares against the baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    /// The compared (non-baseline) case.
    pub case: ExecutionCase,
    /// Folded p-value of the signed-rank test on best scores.
    pub p_value: f64,
    /// Mean score difference, scaled by the display multiplier. Positive
    /// means the case beats the baseline regardless of metric direction.
    pub score: f64,
    /// Lower bootstrap bound of the mean difference, scaled.
    pub interval_lower: f64,
    /// Upper bootstrap bound of the mean difference, scaled.
    pub interval_upper: f64,
    /// Verdict for this case.
    pub decision: Decision,
    /// Early-stopping diagnostic, when enabled.
    pub overfit: Option<OverfitDiagnostic>,
}

/// Comparison of every non-baseline case against one baseline case.
///
/// Rows are sorted by score: ascending for max-optimal metrics, descending
/// otherwise, so the strongest cases always surface at the top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonTable {
    baseline: ExecutionCase,
    score_level: f64,
    rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    pub(crate) fn new(baseline: ExecutionCase, score_level: f64, rows: Vec<ComparisonRow>) -> Self {
        Self {
            baseline,
            score_level,
            rows,
        }
    }

    /// The baseline every row is compared against.
    #[must_use]
    pub fn baseline(&self) -> &ExecutionCase {
        &self.baseline
    }

    /// Rows in presentation order.
    #[must_use]
    pub fn rows(&self) -> &[ComparisonRow] {
        &self.rows
    }

    /// Number of rows (case count minus one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The row for `case`, if it is part of the table.
    #[must_use]
    pub fn row(&self, case: &ExecutionCase) -> Option<&ComparisonRow> {
        self.rows.iter().find(|row| row.case == *case)
    }

    /// Label of the lower interval column. Labelled with half the decision
    /// level, not the interval level (kept for report compatibility).
    #[must_use]
    pub fn lower_quantile_label(&self) -> String {
        format!("Quantile {}", self.score_level / 2.0)
    }

    /// Label of the upper interval column.
    #[must_use]
    pub fn upper_quantile_label(&self) -> String {
        format!("Quantile {}", 1.0 - self.score_level / 2.0)
    }

    /// Renders the table as human-readable text.
    #[must_use]
    pub fn format(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Comparison against baseline '{}'\n", self.baseline));
        output.push_str(
            "───────────────────────────────────────────────────────────────\n",
        );
        output.push_str(&format!(
            "{:<24} {:>10} {:>12} {:>16} {:>16} {:>8}",
            "Case",
            "PValue",
            "Score",
            self.lower_quantile_label(),
            self.upper_quantile_label(),
            "Decision"
        ));
        let with_overfit = self.rows.iter().any(|row| row.overfit.is_some());
        if with_overfit {
            output.push_str(&format!(
                " {:>18} {:>20}",
                "Overfit iter diff", "Overfit iter pValue"
            ));
        }
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<24} {:>10.4} {:>12.4} {:>16.4} {:>16.4} {:>8}",
                row.case.as_str(),
                row.p_value,
                row.score,
                row.interval_lower,
                row.interval_upper,
                row.decision
            ));
            if let Some(overfit) = &row.overfit {
                output.push_str(&format!(
                    " {:>18.2} {:>20.4}",
                    overfit.iteration_diff, overfit.p_value
                ));
            }
            output.push('\n');
        }

        output
    }
}
