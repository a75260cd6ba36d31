//! # Ledger Readings Core
//!
//! Pure primitives for the ledger readings contract: record schemas and the
//! JSON record codec.
//!
//! This crate contains no I/O, no storage, no dispatch. It describes what a
//! record looks like and how it crosses the byte boundary of the ledger.
//!
//! ## Key Types
//!
//! - [`Record`] - Schema descriptor shared by every record variant
//! - [`Asset`] - Geo/environmental reading (`ASSET_` keys)
//! - [`Sensor`] - Sensor reading (`SENSOR_` keys)
//! - [`DecodeMode`] - Strict decoding, or lenient legacy decoding
//!
//! ## Codec
//!
//! Records are stored as JSON objects whose field names are fixed by the
//! schema. See the [`codec`] module.

pub mod asset;
pub mod codec;
pub mod error;
pub mod record;
pub mod sensor;

pub use asset::Asset;
pub use codec::{decode, encode, DecodeMode};
pub use error::{CodecError, Result};
pub use record::Record;
pub use sensor::Sensor;
