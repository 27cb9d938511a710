//! Error types for the evaluation workspace.
//!
//! Provides typed errors for per-case stores, cross-case aggregation,
//! catalog lookups, and estimator input validation. All failures are raised
//! at the point of detection; nothing is retried or recovered internally.

use crate::ids::{ExecutionCase, FoldId};
use thiserror::Error;

/// Errors that can occur while building or querying evaluation results.
#[derive(Debug, Error)]
pub enum EvalError {
    /// A curve for a foreign case was fed into a per-case store.
    #[error("case mismatch: result belongs to '{expected}', got a curve for '{got}'")]
    CaseMismatch {
        /// The case the store was built for.
        expected: ExecutionCase,
        /// The case the caller supplied.
        got: ExecutionCase,
    },

    /// A fold lookup missed.
    #[error("unknown fold: {fold}")]
    UnknownFold {
        /// The fold id that was not recorded.
        fold: FoldId,
    },

    /// A case lookup missed.
    #[error("unknown case: '{case}'")]
    UnknownCase {
        /// The case that was not part of construction.
        case: ExecutionCase,
    },

    /// A metric-name lookup missed in the result catalog.
    #[error("unknown metric: '{name}'")]
    UnknownMetric {
        /// The metric name that was not registered.
        name: String,
    },

    /// Cross-case validation failed at construction.
    #[error("inconsistent input: {0}")]
    InconsistentInput(String),

    /// An estimator or store received input it cannot work with.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl EvalError {
    /// Creates a case mismatch error.
    pub fn case_mismatch(expected: ExecutionCase, got: ExecutionCase) -> Self {
        Self::CaseMismatch { expected, got }
    }

    /// Creates an unknown fold error.
    pub fn unknown_fold(fold: FoldId) -> Self {
        Self::UnknownFold { fold }
    }

    /// Creates an unknown case error.
    pub fn unknown_case(case: ExecutionCase) -> Self {
        Self::UnknownCase { case }
    }

    /// Creates an unknown metric error.
    pub fn unknown_metric(name: impl Into<String>) -> Self {
        Self::UnknownMetric { name: name.into() }
    }

    /// Creates an inconsistent input error.
    pub fn inconsistent(message: impl Into<String>) -> Self {
        Self::InconsistentInput(message.into())
    }

    /// Creates an invalid input error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

/// Result type alias for evaluation operations.
pub type Result<T> = std::result::Result<T, EvalError>;
