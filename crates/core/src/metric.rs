//! Metric descriptions with optimization direction.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a scoring function and the direction in which it improves.
///
/// The `is_max_optimal` flag drives every sign and ordering decision in the
/// comparison engine: best-score extraction, diff orientation, and the final
/// row sort all depend on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MetricDescription {
    name: String,
    is_max_optimal: bool,
}

impl MetricDescription {
    /// Creates a metric description.
    #[must_use]
    pub fn new(name: impl Into<String>, is_max_optimal: bool) -> Self {
        Self {
            name: name.into(),
            is_max_optimal,
        }
    }

    /// Returns the metric name. Used as the catalog key.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// True when larger scores are better.
    #[must_use]
    pub fn is_max_optimal(&self) -> bool {
        self.is_max_optimal
    }
}

impl fmt::Display for MetricDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
