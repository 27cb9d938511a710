//! Column-description files for delimited training datasets.
//!
//! A column description maps column positions to roles (label, weight,
//! categorical feature, ...) and optional human-readable names. The writer
//! emits one tab-separated line per referenced column, sorted ascending by
//! index: `<index>\t<role>\t<name>`.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::fs::File;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Role a dataset column plays during training.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnRole {
    /// Target column.
    Label,
    /// Per-row weight.
    Weight,
    /// Per-row baseline prediction.
    Baseline,
    /// Document identifier.
    DocId,
    /// Group identifier for ranking tasks.
    GroupId,
    /// Subgroup identifier.
    SubgroupId,
    /// Event timestamp.
    Timestamp,
    /// Categorical feature.
    Categ,
    /// Column ignored by training.
    Auxiliary,
    /// Plain numeric feature (the default for unreferenced columns).
    Num,
}

impl ColumnRole {
    /// The role spelling used on the wire.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Label => "Label",
            Self::Weight => "Weight",
            Self::Baseline => "Baseline",
            Self::DocId => "DocId",
            Self::GroupId => "GroupId",
            Self::SubgroupId => "SubgroupId",
            Self::Timestamp => "Timestamp",
            Self::Categ => "Categ",
            Self::Auxiliary => "Auxiliary",
            Self::Num => "Num",
        }
    }
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors from building or writing a column description.
#[derive(Debug, Error)]
pub enum ColumnSpecError {
    /// The same column index was assigned more than one role.
    #[error("column index {index} occurs more than once ({existing} and {requested})")]
    IndexCollision {
        /// The colliding index.
        index: usize,
        /// The role already assigned.
        existing: ColumnRole,
        /// The role the caller tried to add.
        requested: ColumnRole,
    },

    /// Filesystem failure while creating the output file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Writer failure while emitting records.
    #[error("write error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for column-description operations.
pub type Result<T> = std::result::Result<T, ColumnSpecError>;

/// One emitted line of the description file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnLine {
    /// Zero-based column index in the dataset.
    pub index: usize,
    /// Role assigned to the column.
    pub role: ColumnRole,
    /// Human-readable name; empty when none was given.
    pub name: String,
}

/// Explicit column-role configuration.
///
/// Each single-column role is optional; categorical and auxiliary columns
/// take any number of indices. Collisions are detected when the description
/// is built, not when the builder methods run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColumnSpec {
    label: Option<usize>,
    weight: Option<usize>,
    baseline: Option<usize>,
    doc_id: Option<usize>,
    group_id: Option<usize>,
    subgroup_id: Option<usize>,
    timestamp: Option<usize>,
    cat_features: Vec<usize>,
    auxiliary_columns: Vec<usize>,
    feature_names: HashMap<usize, String>,
}

impl ColumnSpec {
    /// Creates an empty spec.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the label column.
    #[must_use]
    pub fn with_label(mut self, index: usize) -> Self {
        self.label = Some(index);
        self
    }

    /// Sets the weight column.
    #[must_use]
    pub fn with_weight(mut self, index: usize) -> Self {
        self.weight = Some(index);
        self
    }

    /// Sets the baseline column.
    #[must_use]
    pub fn with_baseline(mut self, index: usize) -> Self {
        self.baseline = Some(index);
        self
    }

    /// Sets the document-id column.
    #[must_use]
    pub fn with_doc_id(mut self, index: usize) -> Self {
        self.doc_id = Some(index);
        self
    }

    /// Sets the group-id column.
    #[must_use]
    pub fn with_group_id(mut self, index: usize) -> Self {
        self.group_id = Some(index);
        self
    }

    /// Sets the subgroup-id column.
    #[must_use]
    pub fn with_subgroup_id(mut self, index: usize) -> Self {
        self.subgroup_id = Some(index);
        self
    }

    /// Sets the timestamp column.
    #[must_use]
    pub fn with_timestamp(mut self, index: usize) -> Self {
        self.timestamp = Some(index);
        self
    }

    /// Adds categorical feature columns.
    #[must_use]
    pub fn with_cat_features(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.cat_features.extend(indices);
        self
    }

    /// Adds auxiliary columns.
    #[must_use]
    pub fn with_auxiliary_columns(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.auxiliary_columns.extend(indices);
        self
    }

    /// Names one column. Applies to any role; a name for an otherwise
    /// unreferenced index adds a `Num` line for it.
    #[must_use]
    pub fn with_feature_name(mut self, index: usize, name: impl Into<String>) -> Self {
        self.feature_names.insert(index, name.into());
        self
    }

    /// Builds the description lines, sorted ascending by column index.
    ///
    /// # Errors
    /// `IndexCollision` when any index is referenced by more than one role
    /// (or twice by the same multi-column role).
    pub fn lines(&self) -> Result<Vec<ColumnLine>> {
        let mut described: BTreeMap<usize, (ColumnRole, String)> = BTreeMap::new();

        let singles = [
            (self.label, ColumnRole::Label),
            (self.weight, ColumnRole::Weight),
            (self.baseline, ColumnRole::Baseline),
            (self.doc_id, ColumnRole::DocId),
            (self.group_id, ColumnRole::GroupId),
            (self.subgroup_id, ColumnRole::SubgroupId),
            (self.timestamp, ColumnRole::Timestamp),
        ];
        for (slot, role) in singles {
            if let Some(index) = slot {
                insert_role(&mut described, index, role)?;
            }
        }
        for &index in &self.cat_features {
            insert_role(&mut described, index, ColumnRole::Categ)?;
        }
        for &index in &self.auxiliary_columns {
            insert_role(&mut described, index, ColumnRole::Auxiliary)?;
        }

        for (&index, name) in &self.feature_names {
            described
                .entry(index)
                .or_insert((ColumnRole::Num, String::new()))
                .1 = name.clone();
        }

        Ok(described
            .into_iter()
            .map(|(index, (role, name))| ColumnLine { index, role, name })
            .collect())
    }

    /// Writes the description as a tab-separated file.
    ///
    /// # Errors
    /// `IndexCollision` from building the lines, or an I/O failure.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let lines = self.lines()?;
        let file = File::create(path)?;
        let mut writer = csv::WriterBuilder::new().delimiter(b'\t').from_writer(file);
        for line in &lines {
            writer.write_record([
                line.index.to_string().as_str(),
                line.role.as_str(),
                line.name.as_str(),
            ])?;
        }
        writer.flush()?;
        Ok(())
    }
}

fn insert_role(
    described: &mut BTreeMap<usize, (ColumnRole, String)>,
    index: usize,
    role: ColumnRole,
) -> Result<()> {
    if let Some((existing, _)) = described.get(&index) {
        return Err(ColumnSpecError::IndexCollision {
            index,
            existing: *existing,
            requested: role,
        });
    }
    described.insert(index, (role, String::new()));
    Ok(())
}
