use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Code used when a request was sent but nothing came back.
pub const CODE_NO_RESPONSE: i32 = 0;
/// Code used when the request never left the client.
pub const CODE_CLIENT: i32 = -1;

/// Error shape every API call fails with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("[{code}] {message}")]
pub struct ErrorMessage {
    pub code: i32,
    pub message: String,
}

impl ErrorMessage {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn no_response() -> Self {
        Self::new(CODE_NO_RESPONSE, "request failed")
    }

    pub fn client(message: impl Into<String>) -> Self {
        Self::new(CODE_CLIENT, message)
    }
}
