use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures the interactive widgets can run into while talking to the browser.
#[derive(Error, Debug)]
pub enum SiteError {
    #[error("no global window available")]
    NoWindow,

    #[error("could not register event listener: {0}")]
    Listener(String),

    #[error("element `{0}` is not mounted")]
    MissingNode(&'static str),

    #[error("canvas error: {0}")]
    Canvas(String),

    #[error("chart drawing failed: {0}")]
    Chart(String),

    #[error("DOM call failed: {0}")]
    Dom(String),

    #[error("intersection observer failed: {0}")]
    Observer(String),

    #[error("malformed content data: {0}")]
    Content(#[from] serde_json::Error),

    #[error("invalid content: {0}")]
    InvalidContent(String),

    #[error("invalid color `{0}`")]
    InvalidColor(String),
}

/// Renders a thrown JS value for logging; most DOM errors carry no useful type.
pub fn js_error(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

pub fn window() -> Result<web_sys::Window, SiteError> {
    web_sys::window().ok_or(SiteError::NoWindow)
}
