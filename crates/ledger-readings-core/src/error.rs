//! Error types for the record codec.

use thiserror::Error;

/// Errors raised while building, encoding or decoding records.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("failed to encode {kind} record: {source}")]
    Encode {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("stored value is not a valid {kind} record: {source}")]
    Decode {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("stored value for {kind} record is empty")]
    EmptyPayload { kind: &'static str },

    #[error("{kind} record expects {expected} field values, got {got}")]
    FieldCount {
        kind: &'static str,
        expected: usize,
        got: usize,
    },

    /// The schema's field list names a field its accessors do not know.
    #[error("{kind} record has no field named {field:?}")]
    UnknownField { kind: &'static str, field: String },
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
