//! Identifier newtypes for execution cases and folds.
//!
//! Both identifiers are opaque to the comparison engine: they are created by
//! the training pipeline and only compared, hashed, and displayed here.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One trained-model configuration under comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ExecutionCase(String);

impl ExecutionCase {
    /// Creates a case identifier from a label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Returns the case label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExecutionCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ExecutionCase {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

/// One data partition used to produce an independent learning curve.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct FoldId(pub u32);

impl fmt::Display for FoldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn execution_case_display_matches_label() {
        let case = ExecutionCase::new("depth=6");
        assert_eq!(case.to_string(), "depth=6");
        assert_eq!(case.as_str(), "depth=6");
    }

    #[test]
    fn execution_case_equality_is_by_label() {
        assert_eq!(ExecutionCase::new("a"), ExecutionCase::from("a"));
        assert_ne!(ExecutionCase::new("a"), ExecutionCase::new("b"));
    }

    #[test]
    fn fold_id_display_is_numeric() {
        assert_eq!(FoldId(3).to_string(), "3");
    }
}
