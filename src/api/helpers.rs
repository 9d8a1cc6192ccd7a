//! Shared helpers for WASM API operations
//!
//! Conversion between JS values and the crate's serde types, with errors
//! logged before they cross the boundary.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::GridError;

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript. `undefined` and `null` give the
/// type's default, so callers may omit optional option bags.
pub fn deserialize_or_default<T: DeserializeOwned + Default>(
    value: JsValue,
    error_context: &str,
) -> Result<T, GridError> {
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let err = GridError::InvalidOptions(format!("{}: {}", error_context, e));
        log::error!("{}", err);
        err
    })
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log::error!("{}", msg);
        JsValue::from_str(&msg)
    })
}

// ============================================================================
// Error Helpers
// ============================================================================

/// Log a grid error and turn it into a JS exception value
pub fn to_js_error(err: GridError) -> JsValue {
    log::error!("{}", err);
    err.into()
}
