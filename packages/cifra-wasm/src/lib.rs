use cifra::api::{self, ErrorBody, KeyBody, TransposeBody, ValidateBody};
use cifra::CifraError;
use serde::Serialize;
use wasm_bindgen::prelude::*;

fn error_to_js(e: CifraError) -> JsValue {
    let body = ErrorBody::from(&e);
    let json = serde_json::to_string(&body).unwrap_or_else(|_| e.to_string());
    JsValue::from_str(&json)
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    // a second init (hot reload) is harmless
    let _ = console_log::init_with_level(log::Level::Info);

    log::info!("cifra module initialized");
}

/// Transpose a chart. Takes and returns the `POST /transpose` JSON bodies.
#[wasm_bindgen]
pub fn transpose(body: &str) -> Result<String, JsValue> {
    let body: TransposeBody = api::from_json(body).map_err(error_to_js)?;
    let response = api::transpose_cifra(&body).map_err(error_to_js)?;
    to_json(&response)
}

/// Validate a chart. Takes and returns the `POST /transpose/validate` JSON bodies.
#[wasm_bindgen]
pub fn validate(body: &str) -> Result<String, JsValue> {
    let body: ValidateBody = api::from_json(body).map_err(error_to_js)?;
    let response = api::validate_cifra(&body).map_err(error_to_js)?;
    to_json(&response)
}

/// Canonical key list as JSON
#[wasm_bindgen]
pub fn keys() -> String {
    serde_json::to_string(&api::list_keys()).unwrap_or_else(|_| "{\"keys\":[]}".to_string())
}

/// Transpose a key. Takes and returns the `POST /transpose/key` JSON bodies.
#[wasm_bindgen]
pub fn transpose_key(body: &str) -> Result<String, JsValue> {
    let body: KeyBody = api::from_json(body).map_err(error_to_js)?;
    let response = api::transpose_tom(&body).map_err(error_to_js)?;
    to_json(&response)
}
