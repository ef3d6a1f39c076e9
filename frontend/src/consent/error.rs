use thiserror::Error;

/// Failures inside the consent subsystem. None of these reach the UI: the
/// store, bridge and loader log them and carry on.
#[derive(Debug, Error)]
pub enum ConsentError {
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("storage operation failed: {0}")]
    Storage(String),

    #[error("malformed consent record: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("could not emit signal: {0}")]
    Signal(String),
}

/// Renders a thrown JS value for a log line.
pub(crate) fn describe_js(value: &wasm_bindgen::JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
