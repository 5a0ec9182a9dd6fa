use js_sys::Function;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::binary_encoder::encode_comparison_result;
use crate::core::{compare_csv_internal, validate_config};
use crate::export::export_csv;
use crate::parse::parse_csv_dataset;
use crate::profiling::Profiler;
use crate::types::{ComparisonConfig, ComparisonResult, Dataset, ParseResult};

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value.serialize(&serializer).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
pub fn parse_csv(csv_content: &str, has_headers: bool) -> Result<JsValue, JsValue> {
    let dataset = parse_csv_dataset(csv_content, has_headers).map_err(js_error)?;
    to_js(&ParseResult { headers: dataset.columns, rows: dataset.rows })
}

/// Compare two already-loaded datasets (`{ columns, rows }`) with a
/// `{ primaryKey, ignoreCase }` config.
#[wasm_bindgen]
pub fn compare_datasets(base_val: JsValue, live_val: JsValue, config_val: JsValue) -> Result<JsValue, JsValue> {
    let base: Dataset = serde_wasm_bindgen::from_value(base_val).map_err(js_error)?;
    let live: Dataset = serde_wasm_bindgen::from_value(live_val).map_err(js_error)?;
    let config: ComparisonConfig = serde_wasm_bindgen::from_value(config_val).map_err(js_error)?;

    validate_config(&base, &live, &config).map_err(js_error)?;

    let result = crate::core::compare_datasets(&base, &live, &config);
    to_js(&result)
}

fn run_csv_comparison(
    base_csv: &str,
    live_csv: &str,
    primary_key: &str,
    ignore_case: bool,
    has_headers: bool,
    use_parallel: bool,
    on_progress: &Function,
) -> Result<ComparisonResult, JsValue> {
    let config = ComparisonConfig::new(primary_key).with_ignore_case(ignore_case);
    let callback = |progress: f64, message: &str| {
        let this = JsValue::NULL;
        let _ = on_progress.call2(&this, &JsValue::from_f64(progress), &JsValue::from_str(message));
    };

    let mut profiler = Profiler::new("compare_csv");

    #[cfg(feature = "parallel")]
    let result = if use_parallel {
        crate::parallel::compare_csv_parallel_internal(base_csv, live_csv, &config, has_headers, callback)
            .map_err(js_error)?
    } else {
        compare_csv_internal(base_csv, live_csv, &config, has_headers, callback).map_err(js_error)?
    };

    #[cfg(not(feature = "parallel"))]
    let result = {
        if use_parallel {
            log::warn!("parallel comparison requested but the `parallel` feature is disabled");
        }
        compare_csv_internal(base_csv, live_csv, &config, has_headers, callback).map_err(js_error)?
    };

    profiler.checkpoint("compare");
    profiler.log();
    Ok(result)
}

#[wasm_bindgen]
pub fn compare_csv(
    base_csv: &str,
    live_csv: &str,
    primary_key: &str,
    ignore_case: bool,
    has_headers: bool,
    use_parallel: bool,
    on_progress: &Function,
) -> Result<JsValue, JsValue> {
    let result = run_csv_comparison(base_csv, live_csv, primary_key, ignore_case, has_headers, use_parallel, on_progress)?;
    to_js(&result)
}

/// Same as `compare_csv` but returns the compact binary layout as a `Uint8Array`.
#[wasm_bindgen]
pub fn compare_csv_binary(
    base_csv: &str,
    live_csv: &str,
    primary_key: &str,
    ignore_case: bool,
    has_headers: bool,
    use_parallel: bool,
    on_progress: &Function,
) -> Result<Vec<u8>, JsValue> {
    let result = run_csv_comparison(base_csv, live_csv, primary_key, ignore_case, has_headers, use_parallel, on_progress)?;
    Ok(encode_comparison_result(&result))
}

#[wasm_bindgen]
pub fn export_comparison_csv(result_val: JsValue) -> Result<String, JsValue> {
    let result: ComparisonResult = serde_wasm_bindgen::from_value(result_val).map_err(js_error)?;
    export_csv(&result).map_err(js_error)
}

/// Initialize panic hook for better error messages
#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Route `log` output to the browser console at the given level name.
#[wasm_bindgen]
pub fn init_logging(level: &str) {
    crate::logging::init_console_logger(crate::logging::parse_level(level));
}
