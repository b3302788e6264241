use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::core::{compare_request, compare_with_options};
use crate::error::CompareError;
use crate::parallel::compare_batch;
use crate::parse::parse_field_export;
use crate::types::{CompareOptions, ComparisonRequest, ComparisonResult, PositionTolerance, VersionMeta};

#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

fn to_js_error(err: CompareError) -> JsValue {
    JsValue::from_str(&format!("{}: {}", err.kind(), err))
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value
        .serialize(&serializer)
        .map_err(|e| to_js_error(CompareError::Serialization(e.to_string())))
}

/// Compare two versions described by a `ComparisonRequest` object.
#[wasm_bindgen]
pub fn compare_versions_json(request_val: JsValue) -> Result<JsValue, JsValue> {
    let request: ComparisonRequest = serde_wasm_bindgen::from_value(request_val)
        .map_err(|e| to_js_error(CompareError::Serialization(e.to_string())))?;

    let result = compare_request(&request).map_err(to_js_error)?;
    to_js_value(&result)
}

/// Compare two CSV field exports. Field counts are taken from the parsed exports.
#[wasm_bindgen]
pub fn compare_field_exports(
    source_version_id: &str,
    target_version_id: &str,
    source_csv: &str,
    target_csv: &str,
    source_page_count: u32,
    target_page_count: u32,
    tolerance: f64,
) -> Result<JsValue, JsValue> {
    let options = CompareOptions {
        tolerance: PositionTolerance::new(tolerance).map_err(to_js_error)?,
    };
    let source_fields = parse_field_export(source_csv).map_err(to_js_error)?;
    let target_fields = parse_field_export(target_csv).map_err(to_js_error)?;

    let source_meta = VersionMeta::new(source_page_count, source_fields.len() as u32);
    let target_meta = VersionMeta::new(target_page_count, target_fields.len() as u32);

    let result = compare_with_options(
        source_version_id,
        target_version_id,
        &source_fields,
        &target_fields,
        &source_meta,
        &target_meta,
        &options,
    )
    .map_err(to_js_error)?;

    to_js_value(&result)
}

/// Compare a list of requests. Each entry is `{ ok: result }` or `{ error: { kind, message } }`.
#[wasm_bindgen]
pub fn compare_batch_json(requests_val: JsValue) -> Result<JsValue, JsValue> {
    let requests: Vec<ComparisonRequest> = serde_wasm_bindgen::from_value(requests_val)
        .map_err(|e| to_js_error(CompareError::Serialization(e.to_string())))?;

    let outcomes: Vec<BatchOutcome> = compare_batch(&requests)
        .into_iter()
        .map(|r| match r {
            Ok(result) => BatchOutcome::Ok(result),
            Err(e) => BatchOutcome::Error {
                kind: e.kind(),
                message: e.to_string(),
            },
        })
        .collect();

    to_js_value(&outcomes)
}

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
enum BatchOutcome {
    Ok(ComparisonResult),
    Error { kind: &'static str, message: String },
}

/// Initialize panic hook for better error messages
#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}
