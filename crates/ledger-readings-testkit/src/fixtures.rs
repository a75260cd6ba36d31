//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use std::sync::Arc;

use ledger_readings::{AssetContract, Contract, ContractConfig, SensorContract};
use ledger_readings_core::Record;
use ledger_readings_store::MemoryStore;

/// A shared in-memory ledger that hands out contracts over itself.
///
/// Every contract built from one `TestLedger` sees the same entries, so a
/// test can write through one schema or config and read through another.
#[derive(Clone, Default)]
pub struct TestLedger {
    pub store: Arc<MemoryStore>,
}

impl TestLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger already initialized with `R`'s seed records.
    pub fn seeded<R: Record>() -> Self {
        let ledger = Self::new();
        ledger
            .contract::<R>(ContractConfig::default())
            .init_ledger()
            .expect("seeding a memory ledger");
        ledger
    }

    /// A contract for schema `R` with the given config.
    pub fn contract<R: Record>(&self, config: ContractConfig) -> Contract<R, Arc<MemoryStore>> {
        Contract::new(Arc::clone(&self.store), config)
    }

    /// An asset contract with default config.
    pub fn asset(&self) -> AssetContract<Arc<MemoryStore>> {
        self.contract(ContractConfig::default())
    }

    /// A sensor contract with default config.
    pub fn sensor(&self) -> SensorContract<Arc<MemoryStore>> {
        self.contract(ContractConfig::default())
    }

    /// All keys currently in the ledger, in order.
    pub fn keys(&self) -> Vec<String> {
        self.store.keys().expect("memory ledger lock")
    }
}

/// Owned argument list from string literals.
pub fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// `addReading` arguments for `record` at `key`: the key, then every field in
/// wire order.
pub fn add_args<R: Record>(key: &str, record: &R) -> Vec<String> {
    std::iter::once(key.to_string())
        .chain(
            R::FIELDS
                .iter()
                .map(|name| record.field(name).unwrap_or_default().to_string()),
        )
        .collect()
}

/// `updateReading` arguments taking `record`'s update fields.
pub fn update_args<R: Record>(key: &str, record: &R) -> Vec<String> {
    std::iter::once(key.to_string())
        .chain(
            R::UPDATE_FIELDS
                .iter()
                .map(|name| record.field(name).unwrap_or_default().to_string()),
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledger_readings::Chaincode;
    use ledger_readings_core::{Asset, Sensor};

    #[test]
    fn test_seeded_ledger() {
        let ledger = TestLedger::seeded::<Asset>();
        assert_eq!(ledger.keys(), ["ASSET_0", "ASSET_1", "ASSET_2", "ASSET_3"]);
    }

    #[test]
    fn test_contracts_share_store() {
        let ledger = TestLedger::new();
        let record = Sensor::new("DHT11", "t", "1");
        ledger.sensor().add_reading("SENSOR_0", &record).unwrap();

        let lenient = ledger.contract::<Sensor>(ContractConfig::legacy());
        assert_eq!(lenient.read_record("SENSOR_0").unwrap(), Some(record));
    }

    #[test]
    fn test_add_args_follow_wire_order() {
        let record = Asset::new("1", "2", "3", "4", "5");
        assert_eq!(
            add_args("ASSET_9", &record),
            ["ASSET_9", "1", "2", "3", "4", "5"]
        );

        let ledger = TestLedger::new();
        assert!(ledger
            .asset()
            .invoke("addReading", &add_args("ASSET_9", &record))
            .is_success());
        assert_eq!(ledger.asset().read_record("ASSET_9").unwrap(), Some(record));
    }

    #[test]
    fn test_update_args_take_update_fields() {
        let record = Sensor::new("M", "T", "42");
        assert_eq!(update_args("S", &record), ["S", "42"]);
    }
}
