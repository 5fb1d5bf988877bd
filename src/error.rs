use thiserror::Error;

/// Errors raised when the host asks for a hook or tool by name.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Unknown hook '{0}'")]
    UnknownHook(String),

    #[error("Unknown tool '{0}'")]
    UnknownTool(String),

    #[error("Failed to encode result: {0}")]
    Encode(#[from] serde_json::Error),
}
