use csv::{ReaderBuilder, StringRecord};

use crate::error::Result;
use crate::types::{CellValue, Dataset, Row};

/// Load CSV text into a [`Dataset`].
///
/// Without headers, columns are named `Column1..N` after the widest record.
/// Short records are padded with empty strings; cells past the last column
/// are dropped.
pub fn parse_csv_dataset(csv_content: &str, has_headers: bool) -> Result<Dataset> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(has_headers)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(csv_content.as_bytes());

    let mut headers: Vec<String> = if has_headers {
        rdr.headers()?.iter().map(|s| s.to_string()).collect()
    } else {
        Vec::new()
    };

    let records: Vec<StringRecord> = rdr.records().collect::<std::result::Result<Vec<_>, _>>()?;

    if !has_headers {
        let col_count = records.iter().map(|r| r.len()).max().unwrap_or(0);
        headers = (0..col_count).map(|i| format!("Column{}", i + 1)).collect();
    }

    let rows = records.iter().map(|r| record_to_row(r, &headers)).collect();
    Ok(Dataset::new(headers, rows))
}

pub fn record_to_row(record: &StringRecord, headers: &[String]) -> Row {
    headers
        .iter()
        .enumerate()
        .map(|(i, h)| (h.clone(), CellValue::Text(record.get(i).unwrap_or("").to_string())))
        .collect()
}
