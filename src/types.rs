use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single scalar cell as produced by the dataset loader.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

/// Column name -> cell. Missing keys and `CellValue::Null` are both "empty".
pub type Row = IndexMap<String, CellValue>;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Dataset {
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }
}

fn default_ignore_case() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonConfig {
    pub primary_key: String,
    #[serde(default = "default_ignore_case")]
    pub ignore_case: bool,
}

impl ComparisonConfig {
    pub fn new(primary_key: impl Into<String>) -> Self {
        Self {
            primary_key: primary_key.into(),
            ignore_case: default_ignore_case(),
        }
    }

    pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeType {
    New,
    Updated,
    Removed,
    Unchanged,
}

impl ChangeType {
    /// Label written to exports, matching the serialized form.
    pub fn label(self) -> &'static str {
        match self {
            ChangeType::New => "NEW",
            ChangeType::Updated => "UPDATED",
            ChangeType::Removed => "REMOVED",
            ChangeType::Unchanged => "UNCHANGED",
        }
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A row of the merged output: its data plus change metadata.
///
/// `changed_columns` is non-empty exactly when `change_type` is `Updated`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ProcessedRow {
    #[serde(flatten)]
    pub data: Row,
    #[serde(rename = "_meta_change_type")]
    pub change_type: ChangeType,
    #[serde(rename = "_meta_changed_columns")]
    pub changed_columns: Vec<String>,
    #[serde(rename = "_meta_key")]
    pub key: String,
}

impl ProcessedRow {
    pub fn value(&self, column: &str) -> Option<&CellValue> {
        self.data.get(column)
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ComparisonStats {
    pub total: usize,
    pub new: usize,
    pub updated: usize,
    pub removed: usize,
    pub unchanged: usize,
}

impl ComparisonStats {
    pub fn record(&mut self, change_type: ChangeType) {
        match change_type {
            ChangeType::New => self.new += 1,
            ChangeType::Updated => self.updated += 1,
            ChangeType::Removed => self.removed += 1,
            ChangeType::Unchanged => self.unchanged += 1,
        }
    }

    pub fn is_consistent(&self) -> bool {
        self.total == self.new + self.updated + self.removed + self.unchanged
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub rows: Vec<ProcessedRow>,
    pub columns: Vec<String>,
    pub stats: ComparisonStats,
    pub primary_key: String,
}

impl ComparisonResult {
    pub fn rows_with(&self, change_type: ChangeType) -> impl Iterator<Item = &ProcessedRow> {
        self.rows.iter().filter(move |r| r.change_type == change_type)
    }

    pub fn has_changes(&self) -> bool {
        self.stats.new + self.stats.updated + self.stats.removed > 0
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}
