//! Flat export of a comparison: one record per row, change metadata first.
//!
//! Layout: `CHANGE_TYPE`, `CHANGED_COLUMNS`, then every column in union order.
//! Downstream consumers rely on these exact header names.

use csv::WriterBuilder;

use crate::error::{CompareError, Result};
use crate::types::ComparisonResult;
use crate::utils::cell_to_string;

pub const CHANGE_TYPE_HEADER: &str = "CHANGE_TYPE";
pub const CHANGED_COLUMNS_HEADER: &str = "CHANGED_COLUMNS";

pub fn export_headers(result: &ComparisonResult) -> Vec<String> {
    let mut headers = Vec::with_capacity(result.columns.len() + 2);
    headers.push(CHANGE_TYPE_HEADER.to_string());
    headers.push(CHANGED_COLUMNS_HEADER.to_string());
    headers.extend(result.columns.iter().cloned());
    headers
}

/// Export grid without the header record.
pub fn export_rows(result: &ComparisonResult) -> Vec<Vec<String>> {
    result
        .rows
        .iter()
        .map(|row| {
            let mut record = Vec::with_capacity(result.columns.len() + 2);
            record.push(row.change_type.label().to_string());
            record.push(row.changed_columns.join(","));
            record.extend(
                result
                    .columns
                    .iter()
                    .map(|column| row.value(column).map(cell_to_string).unwrap_or_default()),
            );
            record
        })
        .collect()
}

pub fn export_csv(result: &ComparisonResult) -> Result<String> {
    let mut wtr = WriterBuilder::new().from_writer(Vec::new());
    wtr.write_record(export_headers(result))?;
    for record in export_rows(result) {
        wtr.write_record(&record)?;
    }
    let bytes = wtr.into_inner().map_err(|e| CompareError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| CompareError::InvalidInput(e.to_string()))
}
