//! Plain curve data handed to external rendering collaborators.

use serde::{Deserialize, Serialize};

/// One point of a renderable learning curve, on the iteration axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Training iteration (curve position times the evaluation step).
    pub iteration: usize,
    /// Metric score at that iteration.
    pub score: f64,
}

/// A labelled sequence of curve points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveSeries {
    /// Human-readable series label (fold or case).
    pub label: String,
    /// Points in iteration order.
    pub points: Vec<CurvePoint>,
}
