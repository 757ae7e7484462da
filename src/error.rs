//! App error type.

use canvas::error::BoardError;
use wasm_bindgen::JsValue;

/// Errors raised while mounting the app or handling a DOM event.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// `window` or `document` is not available (not running in a page).
    #[error("no browser {0} available")]
    NoBrowser(&'static str),
    /// A required element is absent from the page.
    #[error("missing element: {0}")]
    MissingElement(String),
    /// An element exists but has the wrong type.
    #[error("element {id} is not a {expected}")]
    WrongElement { id: String, expected: &'static str },
    /// A browser API call threw.
    #[error("browser call failed: {0}")]
    Js(String),
    /// The engine rejected an operation.
    #[error(transparent)]
    Board(#[from] BoardError),
}

impl From<JsValue> for AppError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<AppError> for JsValue {
    fn from(err: AppError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
