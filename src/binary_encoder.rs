//! Binary encoding of comparison results for crossing the WASM boundary.
//!
//! Layout (all integers u32 little-endian, strings length-prefixed UTF-8):
//! stats (total, new, updated, removed, unchanged), column count and names,
//! then per row: type tag (u8), key, changed column count and names, and one
//! value per union column. Absent cells are written as empty strings.

use crate::types::*;
use crate::utils::cell_to_string;

pub const TAG_NEW: u8 = 1;
pub const TAG_UPDATED: u8 = 2;
pub const TAG_REMOVED: u8 = 3;
pub const TAG_UNCHANGED: u8 = 4;

pub fn change_type_tag(change_type: ChangeType) -> u8 {
    match change_type {
        ChangeType::New => TAG_NEW,
        ChangeType::Updated => TAG_UPDATED,
        ChangeType::Removed => TAG_REMOVED,
        ChangeType::Unchanged => TAG_UNCHANGED,
    }
}

pub struct BinaryEncoder {
    buffer: Vec<u8>,
}

impl BinaryEncoder {
    pub fn new() -> Self {
        Self {
            buffer: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.buffer
    }

    pub fn encode_comparison_result(&mut self, result: &ComparisonResult) {
        let stats = &result.stats;
        self.write_u32(stats.total as u32);
        self.write_u32(stats.new as u32);
        self.write_u32(stats.updated as u32);
        self.write_u32(stats.removed as u32);
        self.write_u32(stats.unchanged as u32);

        self.write_u32(result.columns.len() as u32);
        for column in &result.columns {
            self.write_string(column);
        }

        for row in &result.rows {
            self.write_u8(change_type_tag(row.change_type));
            self.write_string(&row.key);

            self.write_u32(row.changed_columns.len() as u32);
            for column in &row.changed_columns {
                self.write_string(column);
            }

            for column in &result.columns {
                let value = row.value(column).map(cell_to_string).unwrap_or_default();
                self.write_string(&value);
            }
        }
    }

    fn write_u8(&mut self, value: u8) {
        self.buffer.push(value);
    }

    fn write_u32(&mut self, value: u32) {
        self.buffer.extend_from_slice(&value.to_le_bytes());
    }

    fn write_string(&mut self, value: &str) {
        let bytes = value.as_bytes();
        self.write_u32(bytes.len() as u32);
        self.buffer.extend_from_slice(bytes);
    }
}

impl Default for BinaryEncoder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn encode_comparison_result(result: &ComparisonResult) -> Vec<u8> {
    let mut encoder = BinaryEncoder::new();
    encoder.encode_comparison_result(result);
    encoder.into_vec()
}
