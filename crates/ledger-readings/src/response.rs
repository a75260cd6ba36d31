//! The uniform response envelope returned to the host.

use bytes::Bytes;

/// Status reported for a successful call.
pub const OK: u16 = 200;

/// Status reported for a failed call.
pub const ERROR: u16 = 500;

/// Outcome of one `init` or `invoke` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Raw payload, typically JSON. Empty for write-only calls and for
    /// lookups of keys that hold nothing.
    Success { payload: Bytes },
    /// Human-readable failure message.
    Error { message: String },
}

impl Response {
    pub fn success(payload: impl Into<Bytes>) -> Self {
        Response::Success {
            payload: payload.into(),
        }
    }

    /// Success with no payload.
    pub fn empty() -> Self {
        Response::Success {
            payload: Bytes::new(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Response::Error {
            message: message.into(),
        }
    }

    pub fn status(&self) -> u16 {
        match self {
            Response::Success { .. } => OK,
            Response::Error { .. } => ERROR,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Response::Success { .. })
    }

    /// The success payload, if any.
    pub fn payload(&self) -> Option<&Bytes> {
        match self {
            Response::Success { payload } => Some(payload),
            Response::Error { .. } => None,
        }
    }

    /// The failure message, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Response::Success { .. } => None,
            Response::Error { message } => Some(message),
        }
    }
}
