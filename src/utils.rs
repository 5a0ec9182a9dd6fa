use crate::types::{CellValue, Row};

/// Canonical string form of a cell.
///
/// Integral numbers print without a fractional part (`3.0` -> `"3"`).
/// Magnitudes of 1e21 and above or below 1e-6 use exponent notation with an
/// explicit sign (`1e+21`, `1e-7`). Non-finite numbers print as `NaN` /
/// `Infinity` / `-Infinity`.
pub fn cell_to_string(value: &CellValue) -> String {
    match value {
        CellValue::Null => String::new(),
        CellValue::Bool(b) => b.to_string(),
        CellValue::Text(s) => s.clone(),
        CellValue::Number(n) => number_to_string(*n),
    }
}

fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        // covers -0.0
        return "0".to_string();
    }
    let magnitude = n.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        return exponent_form(n);
    }
    n.to_string()
}

fn exponent_form(n: f64) -> String {
    let formatted = format!("{:e}", n);
    match formatted.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => formatted,
    }
}

/// Normalized form used for cell equality. Absent and null cells are empty.
pub fn normalize_value(value: Option<&CellValue>, ignore_case: bool) -> String {
    let val = match value {
        None | Some(CellValue::Null) => return String::new(),
        Some(v) => cell_to_string(v),
    };
    let val = val.trim();
    if ignore_case {
        val.to_lowercase()
    } else {
        val.to_string()
    }
}

/// Key of a row under `primary_key`, or `None` when the key cell is absent,
/// null or stringifies to the empty string. Keys are not trimmed or folded.
pub fn get_row_key(row: &Row, primary_key: &str) -> Option<String> {
    match row.get(primary_key) {
        None | Some(CellValue::Null) => None,
        Some(v) => {
            let key = cell_to_string(v);
            if key.is_empty() {
                None
            } else {
                Some(key)
            }
        }
    }
}
