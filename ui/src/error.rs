use thiserror::Error;

/// Failures talking to browser-local storage. Always recoverable: callers fall
/// back to "no preference".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("local storage rejected the operation: {0}")]
    Rejected(String),
}

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("not running inside a browser window")]
    BrowserUnavailable,
    #[error("DOM operation failed: {0}")]
    Dom(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("malformed site configuration: {0}")]
    Config(#[from] serde_json::Error),
    #[error("invalid site configuration: {0}")]
    InvalidConfig(String),
}

impl SiteError {
    #[cfg(target_arch = "wasm32")]
    pub(crate) fn dom(err: wasm_bindgen::JsValue) -> Self {
        SiteError::Dom(format!("{err:?}"))
    }
}
