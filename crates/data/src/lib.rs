//! Dataset-preparation utilities for the evaluation workspace.
//!
//! Provides the column-description writer that maps dataset column positions
//! to roles and serializes them for delimited-dataset loaders.

pub mod column_description;

pub use column_description::{ColumnLine, ColumnRole, ColumnSpec, ColumnSpecError};
