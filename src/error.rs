//! Error types for grid operations
//!
//! Layout itself never fails; errors only come from reading options and from
//! the DOM calls around a render pass.

use thiserror::Error;

/// Top-level error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// Options object could not be read
    #[error("Invalid grid options: {0}")]
    InvalidOptions(String),

    /// `srcNode` was rejected by `querySelectorAll`
    #[error("Invalid item selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },

    /// No `window` or `document` in this context (worker, node)
    #[error("Browser global not available: {0}")]
    MissingGlobal(&'static str),

    /// Any other DOM call that threw
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl GridError {
    /// Wrap a thrown JS value, keeping its message when it has one
    pub fn dom(context: &str, err: wasm_bindgen::JsValue) -> Self {
        GridError::Dom(format!("{}: {}", context, describe_js_error(&err)))
    }
}

/// Best-effort text for a thrown JS value
pub(crate) fn describe_js_error(err: &wasm_bindgen::JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

impl From<GridError> for wasm_bindgen::JsValue {
    fn from(err: GridError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
