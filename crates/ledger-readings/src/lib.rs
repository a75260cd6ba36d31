//! # Ledger Readings
//!
//! A record-management contract over an ordered key-value ledger: create,
//! read, update and range-aggregate small text records addressed by string
//! keys.
//!
//! ## Overview
//!
//! One generic engine, [`Contract`], is instantiated per record schema:
//!
//! - **Dispatcher**: maps a function name and positional string arguments
//!   to a handler, checks arity, and wraps the outcome in a [`Response`]
//! - **CRUD handlers**: `getReadingForID`, `addReading`, `updateReading`
//! - **Range aggregator**: `getReading`, one JSON array over a bounded scan
//! - **Seed loader**: `initLedger`, the schema's hardcoded sample records
//!
//! Storage is never implemented here. The host injects a
//! [`Store`](store::Store).
//!
//! ## Usage
//!
//! ```rust
//! use ledger_readings::{Chaincode, ContractConfig, SensorContract};
//! use ledger_readings::store::MemoryStore;
//!
//! let contract = SensorContract::new(MemoryStore::new(), ContractConfig::default());
//!
//! assert!(contract.invoke("initLedger", &[]).is_success());
//!
//! let args = vec!["SENSOR_0".to_string(), "24.0".to_string()];
//! assert!(contract.invoke("updateReading", &args).is_success());
//!
//! let all = contract.invoke("getReading", &[]);
//! assert_eq!(all.status(), 200);
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `ledger_readings::core` - Record schemas and the codec
//! - `ledger_readings::store` - Store gateway, SQLite and in-memory ledgers

pub mod aggregate;
pub mod config;
pub mod contract;
pub mod dispatch;
pub mod error;
pub mod response;
pub mod seed;

// Re-export component crates
pub use ledger_readings_core as core;
pub use ledger_readings_store as store;

// Re-export main types for convenience
pub use config::{ContractConfig, MissingRecordPolicy, ScanBounds};
pub use contract::{AssetContract, Contract, SensorContract};
pub use dispatch::{Chaincode, Function};
pub use error::{ContractError, Result};
pub use response::Response;

// Re-export commonly used core types
pub use ledger_readings_core::{Asset, DecodeMode, Record, Sensor};
