//! Errors of the order form script.
//!
//! Everything ends up in the browser console, so the boundary type is a
//! plain `JsValue` carrying the message.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("window not available")]
    NoWindow,

    #[error("document not available")]
    NoDocument,

    #[error("date picker not found: no <input> named `{name}`")]
    DatePickerNotFound { name: String },

    #[error("default delivery date is out of range")]
    DateOutOfRange,

    #[error("DOM error: {0}")]
    Dom(String),
}

impl FormError {
    /// Wrap a failed DOM call.
    pub fn dom(err: JsValue) -> Self {
        FormError::Dom(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
    }
}

impl From<FormError> for JsValue {
    fn from(err: FormError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type FormResult<T> = Result<T, FormError>;
