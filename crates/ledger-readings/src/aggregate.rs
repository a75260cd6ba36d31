//! Range aggregation: fold a bounded key scan into one JSON array.
//!
//! Output shape:
//!
//! ```json
//! [{"Key":"ASSET_0","Record values":{"lat":"4.2", ...}}, ...]
//! ```
//!
//! Stored values are embedded verbatim, never re-encoded, and elements keep
//! the ledger's key order. The array is built while the cursor streams; if
//! any pull fails the partial buffer is dropped with the cursor and the
//! error is returned instead.

use bytes::Bytes;
use ledger_readings_core::{decode, encode, DecodeMode, Record};
use ledger_readings_store::{KeyValue, Store};
use serde::Serialize;
use serde_json::value::RawValue;

use crate::contract::Contract;
use crate::error::{ContractError, Result};

#[derive(Serialize)]
struct RangeEntry<'a> {
    #[serde(rename = "Key")]
    key: &'a str,
    #[serde(rename = "Record values")]
    record: &'a RawValue,
}

impl<R: Record, S: Store> Contract<R, S> {
    /// Every record in the configured scan range, as one JSON array.
    pub fn get_reading(&self) -> Result<Bytes> {
        let Some((start, end)) = self.config().scan.keys::<R>() else {
            tracing::debug!(kind = R::KIND, "scan bounds inverted, nothing to list");
            return Ok(Bytes::from_static(b"[]"));
        };

        let mut buffer = Vec::with_capacity(256);
        buffer.push(b'[');

        let mut count = 0usize;
        for entry in self.store().scan(&start, &end)? {
            let entry = entry?;
            let record = self.embeddable(&entry)?;

            if count > 0 {
                buffer.push(b',');
            }
            serde_json::to_writer(
                &mut buffer,
                &RangeEntry {
                    key: &entry.key,
                    record: &record,
                },
            )?;
            count += 1;
        }

        buffer.push(b']');
        tracing::debug!(kind = R::KIND, %start, %end, count, "range aggregated");

        Ok(Bytes::from(buffer))
    }

    /// The stored value as a raw JSON fragment ready to embed.
    fn embeddable(&self, entry: &KeyValue) -> Result<Box<RawValue>> {
        let corrupt = |source| ContractError::CorruptRecord {
            key: entry.key.clone(),
            source,
        };

        match self.config().decode_mode {
            DecodeMode::Strict => {
                decode::<R>(&entry.value, DecodeMode::Strict).map_err(corrupt)?;
                let text = String::from_utf8_lossy(&entry.value).into_owned();
                Ok(RawValue::from_string(text)?)
            }
            DecodeMode::Lenient => {
                let parsed = std::str::from_utf8(&entry.value)
                    .ok()
                    .and_then(|text| RawValue::from_string(text.to_owned()).ok());

                match parsed {
                    Some(raw) => Ok(raw),
                    None => {
                        tracing::warn!(
                            kind = R::KIND,
                            key = %entry.key,
                            "stored value is not JSON, embedding empty record"
                        );
                        let blank = encode(&R::default())?;
                        let text = String::from_utf8_lossy(&blank).into_owned();
                        Ok(RawValue::from_string(text)?)
                    }
                }
            }
        }
    }
}
