//! Error type for the browser client

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("No global window")]
    NoWindow,

    #[error("No document on window")]
    NoDocument,

    #[error("Surface creation failed: {0}")]
    Surface(String),

    #[error("No compatible GPU adapter")]
    NoAdapter,

    #[error("Device request failed: {0}")]
    Device(String),

    #[error("Surface reports no formats")]
    NoSurfaceFormat,

    #[error("Frame acquisition failed: {0}")]
    Frame(String),

    #[error("Unknown app: {0}")]
    UnknownApp(String),

    #[error("Unknown icon: {0}")]
    UnknownIcon(String),

    #[error("Unknown open source: {0}")]
    UnknownSource(String),

    #[error("Unknown resize handle: {0}")]
    UnknownHandle(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("JavaScript error: {0}")]
    Js(String),
}

pub type ClientResult<T> = Result<T, ClientError>;

impl From<JsValue> for ClientError {
    fn from(value: JsValue) -> Self {
        ClientError::Js(format!("{:?}", value))
    }
}

impl From<ClientError> for JsValue {
    fn from(err: ClientError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub fn window() -> ClientResult<web_sys::Window> {
    web_sys::window().ok_or(ClientError::NoWindow)
}

pub fn document() -> ClientResult<web_sys::Document> {
    window()?.document().ok_or(ClientError::NoDocument)
}
