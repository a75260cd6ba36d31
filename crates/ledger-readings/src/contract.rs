//! The Contract: one record engine, instantiated per schema.
//!
//! A `Contract<R, S>` serves every call for record schema `R` against ledger
//! `S`. The single-record handlers live here; range aggregation, seeding and
//! string dispatch are in sibling modules.

use std::marker::PhantomData;

use bytes::Bytes;
use ledger_readings_core::{decode, encode, Asset, Record, Sensor};
use ledger_readings_store::Store;

use crate::config::{ContractConfig, MissingRecordPolicy};
use crate::error::{ContractError, Result};

/// Contract serving [`Asset`] readings.
pub type AssetContract<S> = Contract<Asset, S>;

/// Contract serving [`Sensor`] readings.
pub type SensorContract<S> = Contract<Sensor, S>;

/// The record engine.
///
/// Holds no state between calls besides its configuration; everything
/// persistent lives in the store.
pub struct Contract<R: Record, S: Store> {
    store: S,
    config: ContractConfig,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record, S: Store> Contract<R, S> {
    /// Create a contract over `store`.
    pub fn new(store: S, config: ContractConfig) -> Self {
        Self {
            store,
            config,
            _record: PhantomData,
        }
    }

    /// Get the store reference.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &ContractConfig {
        &self.config
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Record Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Raw stored bytes at `key`, passed through without decoding.
    ///
    /// A key that was never written is `Ok(None)`, not an error.
    pub fn get_reading_for_id(&self, key: &str) -> Result<Option<Bytes>> {
        check_key(key)?;
        Ok(self.store.get(key)?)
    }

    /// Decoded record at `key` under the configured decode mode.
    pub fn read_record(&self, key: &str) -> Result<Option<R>> {
        let Some(bytes) = self.get_reading_for_id(key)? else {
            return Ok(None);
        };

        decode(&bytes, self.config.decode_mode)
            .map(Some)
            .map_err(|source| ContractError::CorruptRecord {
                key: key.to_string(),
                source,
            })
    }

    /// Write `record` at `key`, replacing whatever was there.
    pub fn add_reading(&self, key: &str, record: &R) -> Result<()> {
        check_key(key)?;
        self.write(key, record)
    }

    /// Read, modify and write back the record at `key`.
    ///
    /// A missing key is handled per [`MissingRecordPolicy`]. The read and the
    /// write are separate store calls; any isolation between them is the
    /// ledger's business.
    pub fn update_reading<F>(&self, key: &str, apply: F) -> Result<R>
    where
        F: FnOnce(&mut R) -> Result<()>,
    {
        let mut record = match self.read_record(key)? {
            Some(record) => record,
            None => match self.config.missing_on_update {
                MissingRecordPolicy::Reject => {
                    return Err(ContractError::NotFound(key.to_string()));
                }
                MissingRecordPolicy::CreateFromBlank => {
                    tracing::debug!(kind = R::KIND, key, "updating missing record from blank");
                    R::default()
                }
            },
        };

        apply(&mut record)?;
        self.write(key, &record)?;
        Ok(record)
    }

    fn write(&self, key: &str, record: &R) -> Result<()> {
        let bytes = encode(record)?;
        self.store.put(key, Bytes::from(bytes))?;
        tracing::debug!(kind = R::KIND, key, "record written");
        Ok(())
    }
}

fn check_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(ContractError::InvalidArgument("key must not be empty".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledger_readings_core::DecodeMode;
    use ledger_readings_store::MemoryStore;

    fn sensor_contract(config: ContractConfig) -> SensorContract<MemoryStore> {
        Contract::new(MemoryStore::new(), config)
    }

    #[test]
    fn test_add_then_get_roundtrip() {
        let contract = sensor_contract(ContractConfig::default());
        let record = Sensor::new("DHT22", "15/02/2020 15:05", "23.6");

        contract.add_reading("SENSOR_X", &record).unwrap();

        let raw = contract.get_reading_for_id("SENSOR_X").unwrap().unwrap();
        assert_eq!(raw, Bytes::from(encode(&record).unwrap()));
        assert_eq!(contract.read_record("SENSOR_X").unwrap(), Some(record));
    }

    #[test]
    fn test_get_returns_stored_bytes_unchanged() {
        let contract = sensor_contract(ContractConfig::default());
        let stored = Bytes::from_static(br#"{ "value":"1",  "timestamp":"T", "model":"M" }"#);
        contract.store().put("SENSOR_7", stored.clone()).unwrap();

        assert_eq!(contract.get_reading_for_id("SENSOR_7").unwrap(), Some(stored));

        // Not even valid JSON is touched on the way out.
        let junk = Bytes::from_static(b"\x00not a record");
        contract.store().put("SENSOR_8", junk.clone()).unwrap();
        assert_eq!(contract.get_reading_for_id("SENSOR_8").unwrap(), Some(junk));
    }

    #[test]
    fn test_get_missing_is_none() {
        let contract = sensor_contract(ContractConfig::default());
        assert_eq!(contract.get_reading_for_id("SENSOR_404").unwrap(), None);
        assert_eq!(contract.read_record("SENSOR_404").unwrap(), None);
    }

    #[test]
    fn test_empty_key_is_invalid_argument() {
        let contract = sensor_contract(ContractConfig::default());
        let err = contract
            .add_reading("", &Sensor::default())
            .unwrap_err();
        assert!(matches!(err, ContractError::InvalidArgument(_)));
        assert!(contract.store().is_empty().unwrap());
    }

    #[test]
    fn test_add_overwrites() {
        let contract = sensor_contract(ContractConfig::default());
        contract
            .add_reading("k", &Sensor::new("A", "t1", "1"))
            .unwrap();
        contract
            .add_reading("k", &Sensor::new("B", "t2", "2"))
            .unwrap();

        assert_eq!(
            contract.read_record("k").unwrap(),
            Some(Sensor::new("B", "t2", "2"))
        );
    }

    #[test]
    fn test_update_changes_only_applied_fields() {
        let contract = sensor_contract(ContractConfig::default());
        contract
            .add_reading("k", &Sensor::new("DHT22", "t1", "1"))
            .unwrap();

        let updated = contract
            .update_reading("k", |r| {
                r.value = "2".into();
                Ok(())
            })
            .unwrap();

        assert_eq!(updated, Sensor::new("DHT22", "t1", "2"));
        assert_eq!(contract.read_record("k").unwrap(), Some(updated));
    }

    #[test]
    fn test_update_missing_rejected_by_default() {
        let contract = sensor_contract(ContractConfig::default());
        let err = contract.update_reading("nope", |_| Ok(())).unwrap_err();

        assert!(matches!(err, ContractError::NotFound(ref k) if k == "nope"));
        assert!(contract.store().is_empty().unwrap());
    }

    #[test]
    fn test_update_missing_from_blank() {
        let config = ContractConfig {
            missing_on_update: MissingRecordPolicy::CreateFromBlank,
            ..ContractConfig::default()
        };
        let contract = sensor_contract(config);

        let record = contract
            .update_reading("fresh", |r| {
                r.value = "9".into();
                Ok(())
            })
            .unwrap();

        assert_eq!(record, Sensor::new("", "", "9"));
        assert_eq!(contract.read_record("fresh").unwrap(), Some(record));
    }

    #[test]
    fn test_update_corrupt_value_strict_fails_without_write() {
        let contract = sensor_contract(ContractConfig::default());
        contract
            .store()
            .put("k", Bytes::from_static(b"garbage"))
            .unwrap();

        let err = contract.update_reading("k", |_| Ok(())).unwrap_err();
        assert!(matches!(err, ContractError::CorruptRecord { .. }));
        assert_eq!(
            contract.get_reading_for_id("k").unwrap(),
            Some(Bytes::from_static(b"garbage"))
        );
    }

    #[test]
    fn test_update_corrupt_value_lenient_overwrites() {
        let config = ContractConfig {
            decode_mode: DecodeMode::Lenient,
            ..ContractConfig::default()
        };
        let contract = sensor_contract(config);
        contract
            .store()
            .put("k", Bytes::from_static(b"garbage"))
            .unwrap();

        let record = contract
            .update_reading("k", |r| {
                r.value = "1".into();
                Ok(())
            })
            .unwrap();
        assert_eq!(record, Sensor::new("", "", "1"));
    }

    #[test]
    fn test_failed_apply_does_not_write() {
        let contract = sensor_contract(ContractConfig::default());
        contract
            .add_reading("k", &Sensor::new("DHT22", "t1", "1"))
            .unwrap();

        let err = contract
            .update_reading("k", |r| {
                r.value = "changed".into();
                Err(ContractError::InvalidArgument("rejected".into()))
            })
            .unwrap_err();

        assert!(matches!(err, ContractError::InvalidArgument(_)));
        assert_eq!(
            contract.read_record("k").unwrap(),
            Some(Sensor::new("DHT22", "t1", "1"))
        );
    }
}
