//! Comparison engine: key indexing, column union, row classification and merge.
//!
//! The engine assumes `config.primary_key` is non-empty and meaningful for
//! both datasets. It does not detect violations; callers reject bad keys
//! upfront with [`validate_config`].

use ahash::{AHashSet, RandomState};
use indexmap::IndexMap;
use log::{debug, trace};

use crate::error::{CompareError, DatasetSide, Result};
use crate::parse::parse_csv_dataset;
use crate::types::*;
use crate::utils::*;

/// Primary key -> row, in first-seen key order.
pub type KeyIndex<'a> = IndexMap<String, &'a Row, RandomState>;

/// Index rows by their primary key.
///
/// Rows whose key is absent, null or empty are skipped. A repeated key keeps
/// the position of its first occurrence but the data of its last one; the
/// earlier rows are dropped from the comparison.
pub fn index_rows<'a>(dataset: &'a Dataset, primary_key: &str) -> KeyIndex<'a> {
    let mut index = KeyIndex::with_capacity_and_hasher(dataset.rows.len(), RandomState::new());
    let mut skipped = 0usize;
    for row in &dataset.rows {
        match get_row_key(row, primary_key) {
            Some(key) => {
                if index.contains_key(&key) {
                    trace!("duplicate primary key \"{}\", earlier row dropped", key);
                }
                index.insert(key, row);
            }
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        debug!("skipped {} rows with an empty \"{}\" value", skipped, primary_key);
    }
    index
}

/// Declared columns of both datasets, base first, in first-seen order.
pub fn union_columns(base_columns: &[String], live_columns: &[String]) -> Vec<String> {
    let mut seen: AHashSet<&str> = AHashSet::with_capacity(base_columns.len() + live_columns.len());
    let mut columns = Vec::with_capacity(base_columns.len() + live_columns.len());
    for column in base_columns.iter().chain(live_columns) {
        if seen.insert(column.as_str()) {
            columns.push(column.clone());
        }
    }
    columns
}

/// Columns (other than the primary key) whose normalized values differ.
pub fn diff_row(
    base_row: &Row,
    live_row: &Row,
    columns: &[String],
    primary_key: &str,
    ignore_case: bool,
) -> Vec<String> {
    columns
        .iter()
        .filter(|column| column.as_str() != primary_key)
        .filter(|column| {
            normalize_value(base_row.get(column.as_str()), ignore_case)
                != normalize_value(live_row.get(column.as_str()), ignore_case)
        })
        .cloned()
        .collect()
}

/// Merge a matched pair over the union columns: live values win wherever the
/// live row has the column, otherwise the base value is kept.
pub fn merge_rows(base_row: &Row, live_row: &Row, columns: &[String]) -> Row {
    let mut merged = Row::with_capacity(columns.len());
    for column in columns {
        if let Some(value) = live_row.get(column).or_else(|| base_row.get(column)) {
            merged.insert(column.clone(), value.clone());
        }
    }
    merged
}

/// Classify one base row against the live index.
pub(crate) fn classify_base_row(
    key: &str,
    base_row: &Row,
    live_index: &KeyIndex<'_>,
    columns: &[String],
    config: &ComparisonConfig,
) -> ProcessedRow {
    let Some(live_row) = live_index.get(key) else {
        return ProcessedRow {
            data: base_row.clone(),
            change_type: ChangeType::Removed,
            changed_columns: Vec::new(),
            key: key.to_string(),
        };
    };

    let changed_columns = diff_row(base_row, live_row, columns, &config.primary_key, config.ignore_case);
    if changed_columns.is_empty() {
        ProcessedRow {
            data: base_row.clone(),
            change_type: ChangeType::Unchanged,
            changed_columns,
            key: key.to_string(),
        }
    } else {
        ProcessedRow {
            data: merge_rows(base_row, live_row, columns),
            change_type: ChangeType::Updated,
            changed_columns,
            key: key.to_string(),
        }
    }
}

pub(crate) fn new_row(key: &str, live_row: &Row) -> ProcessedRow {
    ProcessedRow {
        data: live_row.clone(),
        change_type: ChangeType::New,
        changed_columns: Vec::new(),
        key: key.to_string(),
    }
}

/// Tally classifications and seal the result.
pub(crate) fn finish_result(rows: Vec<ProcessedRow>, columns: Vec<String>, primary_key: &str) -> ComparisonResult {
    let mut stats = ComparisonStats::default();
    for row in &rows {
        stats.record(row.change_type);
    }
    stats.total = stats.new + stats.updated + stats.removed + stats.unchanged;
    debug_assert_eq!(stats.total, rows.len());

    debug!(
        "comparison on \"{}\": {} rows ({} new, {} updated, {} removed, {} unchanged)",
        primary_key, stats.total, stats.new, stats.updated, stats.removed, stats.unchanged
    );

    ComparisonResult {
        rows,
        columns,
        stats,
        primary_key: primary_key.to_string(),
    }
}

pub fn compare_datasets(base: &Dataset, live: &Dataset, config: &ComparisonConfig) -> ComparisonResult {
    compare_datasets_with_progress(base, live, config, |_, _| {})
}

/// Compare `base` against `live`, reporting progress as a 0-100 percentage.
///
/// Output order: base-keyed rows in base order, then new rows in live order.
pub fn compare_datasets_with_progress<F>(
    base: &Dataset,
    live: &Dataset,
    config: &ComparisonConfig,
    mut on_progress: F,
) -> ComparisonResult
where
    F: FnMut(f64, &str),
{
    on_progress(0.0, "Indexing base dataset...");
    let base_index = index_rows(base, &config.primary_key);

    on_progress(20.0, "Indexing live dataset...");
    let live_index = index_rows(live, &config.primary_key);
    debug!("indexed {} base keys, {} live keys", base_index.len(), live_index.len());

    let columns = union_columns(&base.columns, &live.columns);

    on_progress(40.0, "Comparing rows...");
    let mut rows = Vec::with_capacity(base_index.len() + live_index.len());
    let total_base = base_index.len();
    for (i, (key, base_row)) in base_index.iter().enumerate() {
        if i % 1000 == 0 && i > 0 {
            let p = 40.0 + (i as f64 / total_base as f64) * 50.0;
            on_progress(p, "Comparing rows...");
        }
        let row = classify_base_row(key, base_row, &live_index, &columns, config);
        trace!("{} -> {}", key, row.change_type);
        rows.push(row);
    }

    on_progress(90.0, "Collecting new rows...");
    for (key, live_row) in &live_index {
        if !base_index.contains_key(key) {
            rows.push(new_row(key, live_row));
        }
    }

    let result = finish_result(rows, columns, &config.primary_key);
    on_progress(100.0, "Comparison complete");
    result
}

/// Load two CSV texts, validate the key and compare them.
pub fn compare_csv_internal<F>(
    base_csv: &str,
    live_csv: &str,
    config: &ComparisonConfig,
    has_headers: bool,
    mut on_progress: F,
) -> Result<ComparisonResult>
where
    F: FnMut(f64, &str),
{
    on_progress(0.0, "Parsing base CSV...");
    let base = parse_csv_dataset(base_csv, has_headers)?;

    on_progress(10.0, "Parsing live CSV...");
    let live = parse_csv_dataset(live_csv, has_headers)?;

    validate_config(&base, &live, config)?;

    Ok(compare_datasets_with_progress(&base, &live, config, |percent, message| {
        on_progress(20.0 + percent * 0.8, message)
    }))
}

/// Caller-side check that `config.primary_key` is usable for both datasets.
pub fn validate_config(base: &Dataset, live: &Dataset, config: &ComparisonConfig) -> Result<()> {
    if config.primary_key.is_empty() {
        return Err(CompareError::MissingPrimaryKey);
    }
    if !base.has_column(&config.primary_key) {
        return Err(CompareError::KeyColumnNotFound {
            column: config.primary_key.clone(),
            side: DatasetSide::Base,
        });
    }
    if !live.has_column(&config.primary_key) {
        return Err(CompareError::KeyColumnNotFound {
            column: config.primary_key.clone(),
            side: DatasetSide::Live,
        });
    }
    Ok(())
}
