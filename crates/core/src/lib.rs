pub mod config;
pub mod curve;
pub mod error;
pub mod ids;
pub mod metric;
pub mod stats;

pub use config::{ScoreConfig, ScoreType};
pub use curve::LearningCurve;
pub use error::{EvalError, Result};
pub use ids::{ExecutionCase, FoldId};
pub use metric::MetricDescription;
pub use stats::{paired_rank_test, RankTest};
