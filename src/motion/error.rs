use thiserror::Error;
use wasm_bindgen::JsValue;

/// Why an enhancement could not attach to the page.
///
/// Never shown to the visitor: [`super::Feature::from_result`] logs it and
/// turns the feature inert.
#[derive(Debug, Error, PartialEq)]
pub enum MountError {
    #[error("no window available")]
    NoWindow,
    #[error("no document available")]
    NoDocument,
    #[error("required element `{0}` not found")]
    MissingAnchor(String),
    #[error("nothing matched `{0}`")]
    NothingToEnhance(String),
    #[error("visitor prefers reduced motion")]
    ReducedMotion,
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for MountError {
    fn from(value: JsValue) -> Self {
        MountError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
