//! Error Types

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Why a "load more" request produced no cards
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server answered with status {0}")]
    Status(u16),
    #[error("could not read response body: {0}")]
    Body(String),
    #[error("malformed campaign page: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("could not render campaign cards: {0}")]
    Render(String),
}

/// Best-effort text for a thrown JS value
pub fn js_error_text(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value))
}
