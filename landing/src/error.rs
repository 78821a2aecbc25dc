use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while wiring the page to the browser.
#[derive(Debug, Error)]
pub enum LandingError {
    #[error("no browser window or document")]
    NoDocument,

    #[error("{context}: {message}")]
    Js {
        context: &'static str,
        message: String,
    },

    #[error(transparent)]
    Config(#[from] compass_page::CompassError),
}

impl LandingError {
    /// Wrap a JS exception with what we were doing when it was thrown.
    pub fn js(context: &'static str, value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| js_sys::JSON::stringify(&value).ok().and_then(|s| s.as_string()))
            .unwrap_or_else(|| "unknown error".into());
        Self::Js { context, message }
    }
}

pub type Result<T> = std::result::Result<T, LandingError>;
