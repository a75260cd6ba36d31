//! Error types for the contract engine.

use ledger_readings_core::CodecError;
use ledger_readings_store::StoreError;
use thiserror::Error;

/// Errors that can occur while serving a contract call.
///
/// The dispatcher turns every one of these into a failure response; none is
/// fatal to the process.
#[derive(Debug, Error)]
pub enum ContractError {
    /// The function name is not part of the catalog.
    #[error("invalid function name: {0}")]
    UnknownFunction(String),

    /// Wrong argument count for a known function.
    #[error("incorrect number of arguments for {function}: expecting {expected}, got {got}")]
    Arity {
        function: &'static str,
        expected: usize,
        got: usize,
    },

    /// An argument was rejected before touching the ledger.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Storage error.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// Record could not be built or encoded.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// The value stored at a key does not decode under the active schema.
    #[error("stored value at {key} is unreadable: {source}")]
    CorruptRecord {
        key: String,
        #[source]
        source: CodecError,
    },

    /// Update of a key that holds no record.
    #[error("record not found: {0}")]
    NotFound(String),

    /// A seed write failed. Records before `key` remain written.
    #[error("ledger initialization stopped after {written} of {total} records: writing {key} failed: {source}")]
    SeedInterrupted {
        written: usize,
        total: usize,
        key: String,
        #[source]
        source: StoreError,
    },

    /// Response document could not be assembled.
    #[error("response encoding error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Result type for contract operations.
pub type Result<T> = std::result::Result<T, ContractError>;
