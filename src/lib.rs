//! Keyed comparison of two tabular datasets.
//!
//! A base dataset and a live dataset are matched on a primary-key column and
//! every row is classified as NEW, UPDATED, REMOVED or UNCHANGED. The result
//! is a merged, annotated row list plus aggregate counts.

pub mod binary_encoder;
pub mod core;
pub mod error;
pub mod export;
pub mod logging;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod parse;
pub mod profiling;
pub mod types;
pub mod utils;
pub mod wasm_api;

#[cfg(test)]
mod test_data;

pub use crate::core::{compare_datasets, compare_datasets_with_progress, validate_config};
pub use crate::error::{CompareError, DatasetSide, Result};
pub use crate::types::{
    CellValue, ChangeType, ComparisonConfig, ComparisonResult, ComparisonStats, Dataset, ProcessedRow, Row,
};

#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;
