use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum Error {
    /// The surface went away, e.g. the canvas was removed from the document.
    #[error("drawing surface is no longer attached")]
    SurfaceDetached,
    #[error("draw call failed: {0}")]
    Draw(String),
    #[error("host error: {0}")]
    Host(String),
}

impl Error {
    pub(crate) fn host(context: &str, value: JsValue) -> Error {
        Error::Host(format!("{}: {:?}", context, value))
    }

    pub(crate) fn draw(value: JsValue) -> Error {
        Error::Draw(format!("{:?}", value))
    }
}

impl From<Error> for JsValue {
    fn from(err: Error) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}
