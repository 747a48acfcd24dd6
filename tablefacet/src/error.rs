use thiserror::Error;

#[cfg(feature = "wasm")]
use wasm_bindgen;

/// Errors raised at the JSON ingestion boundary. The filtering core itself is
/// total over its documented input shapes; only reshaping foreign JSON into
/// records can fail, and it fails fast rather than coercing.
#[derive(Debug, Error, PartialEq)]
pub enum RecordError {
    #[error("expected a JSON array of records, got {0}")]
    NotAnArray(&'static str),
    #[error("expected a JSON object record, got {0}")]
    NotAnObject(&'static str),
    #[error("field '{field}' holds a nested {kind}; record fields must be scalar")]
    NonScalarField { field: String, kind: &'static str },
}

#[cfg(feature = "wasm")]
impl From<RecordError> for wasm_bindgen::JsValue {
    fn from(error: RecordError) -> Self { wasm_bindgen::JsValue::from_str(&error.to_string()) }
}
