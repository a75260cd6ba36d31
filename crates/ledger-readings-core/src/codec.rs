//! JSON record codec.
//!
//! A stored value is a JSON object carrying every one of the schema's
//! `FIELDS` as a string. Encoding follows struct field order, so the same
//! record always produces the same bytes. Extra keys written by other
//! clients are ignored on decode.
//!
//! Decoding has two modes:
//! - [`DecodeMode::Strict`] rejects empty payloads, malformed JSON, missing
//!   fields and non-string values.
//! - [`DecodeMode::Lenient`] never fails. Whatever schema fields can be read
//!   as strings are kept and the rest stay empty; an unreadable payload
//!   becomes the zero-valued record. This reproduces how older deployments
//!   read the ledger and must be opted into.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CodecError, Result};
use crate::record::Record;

/// How stored bytes are turned back into a record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecodeMode {
    #[default]
    Strict,
    Lenient,
}

/// Encode a record to its stored JSON form.
pub fn encode<R: Record>(record: &R) -> Result<Vec<u8>> {
    serde_json::to_vec(record).map_err(|source| CodecError::Encode {
        kind: R::KIND,
        source,
    })
}

/// Decode stored bytes into a record.
pub fn decode<R: Record>(bytes: &[u8], mode: DecodeMode) -> Result<R> {
    match mode {
        DecodeMode::Strict => decode_strict(bytes),
        DecodeMode::Lenient => Ok(decode_lenient(bytes)),
    }
}

fn decode_strict<R: Record>(bytes: &[u8]) -> Result<R> {
    if bytes.is_empty() {
        return Err(CodecError::EmptyPayload { kind: R::KIND });
    }

    serde_json::from_slice(bytes).map_err(|source| CodecError::Decode {
        kind: R::KIND,
        source,
    })
}

fn decode_lenient<R: Record>(bytes: &[u8]) -> R {
    let mut record = R::default();

    if bytes.is_empty() {
        return record;
    }

    let object = match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(object)) => object,
        Ok(other) => {
            tracing::warn!(
                kind = R::KIND,
                "stored value is JSON {} rather than an object, using empty record",
                json_type(&other)
            );
            return record;
        }
        Err(e) => {
            tracing::warn!(kind = R::KIND, error = %e, "unparseable stored value, using empty record");
            return record;
        }
    };

    for name in R::FIELDS {
        match object.get(*name) {
            Some(Value::String(text)) => {
                if let Some(slot) = record.field_mut(name) {
                    slot.clone_from(text);
                }
            }
            Some(_) => {
                tracing::warn!(kind = R::KIND, field = *name, "non-string field left empty");
            }
            None => {}
        }
    }

    record
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
