//! # Ledger Readings Testkit
//!
//! Testing utilities for ledger-readings.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: A shared in-memory ledger that hands out contracts
//! - **Generators**: Proptest strategies for records, keys and arities
//! - **Fault injection**: A store wrapper that fails on demand and counts
//!   live scan cursors
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use ledger_readings_testkit::generators::{record_key, sensor};
//! use ledger_readings_testkit::{add_args, TestLedger};
//!
//! proptest! {
//!     #[test]
//!     fn add_then_read(key in record_key(), record in sensor()) {
//!         let ledger = TestLedger::new();
//!         ledger.sensor().invoke("addReading", &add_args(&key, &record));
//!         prop_assert_eq!(ledger.sensor().read_record(&key).unwrap(), Some(record));
//!     }
//! }
//! ```
//!
//! ## Fault Injection
//!
//! ```rust
//! use ledger_readings::{Contract, ContractConfig, Sensor};
//! use ledger_readings_store::MemoryStore;
//! use ledger_readings_testkit::{Faults, FaultyStore};
//!
//! let store = FaultyStore::with_faults(
//!     MemoryStore::new(),
//!     Faults { fail_put_at: Some(2), ..Faults::default() },
//! );
//! let contract = Contract::<Sensor, _>::new(&store, ContractConfig::default());
//!
//! assert!(contract.init_ledger().is_err());
//! assert_eq!(store.inner().len().unwrap(), 2);
//! ```

pub mod faulty;
pub mod fixtures;
pub mod generators;

pub use faulty::{Faults, FaultyStore};
pub use fixtures::{add_args, args, update_args, TestLedger};
