//! Parallel comparison of matched rows.
//!
//! Indexing stays sequential since it defines key order and duplicate
//! resolution. Per-row classification is spread over the rayon pool and
//! collected back in base order, so results equal `core::compare_datasets`.

use log::debug;
use rayon::prelude::*;

use crate::core::{classify_base_row, finish_result, index_rows, new_row, union_columns, validate_config};
use crate::error::Result;
use crate::parse::parse_csv_dataset;
use crate::types::{ComparisonConfig, ComparisonResult, Dataset, ProcessedRow};

pub fn compare_datasets_parallel(base: &Dataset, live: &Dataset, config: &ComparisonConfig) -> ComparisonResult {
    compare_datasets_parallel_with_progress(base, live, config, |_, _| {})
}

/// Parallel counterpart of `core::compare_datasets_with_progress`, reporting
/// the same 0-100 phases from the calling thread.
pub fn compare_datasets_parallel_with_progress<F>(
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
    let columns = union_columns(&base.columns, &live.columns);

    on_progress(40.0, "Comparing rows...");
    let base_entries: Vec<_> = base_index.iter().collect();
    debug!("classifying {} base rows in parallel", base_entries.len());

    let mut rows: Vec<ProcessedRow> = base_entries
        .par_iter()
        .map(|(key, base_row)| classify_base_row(key, base_row, &live_index, &columns, config))
        .collect();

    on_progress(90.0, "Collecting new rows...");
    rows.extend(
        live_index
            .iter()
            .filter(|(key, _)| !base_index.contains_key(*key))
            .map(|(key, live_row)| new_row(key, live_row)),
    );

    let result = finish_result(rows, columns, &config.primary_key);
    on_progress(100.0, "Comparison complete");
    result
}

/// Parallel counterpart of `core::compare_csv_internal`.
pub fn compare_csv_parallel_internal<F>(
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

    Ok(compare_datasets_parallel_with_progress(&base, &live, config, |percent, message| {
        on_progress(20.0 + percent * 0.8, message)
    }))
}
