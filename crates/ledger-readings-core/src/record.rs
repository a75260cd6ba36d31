//! The `Record` trait: one schema descriptor shared by every record variant.
//!
//! A record is a flat set of text fields stored under a string key. The
//! descriptor names the fields (in wire order), the subset an update
//! replaces, the key prefix used for seeded entries, and the seed data
//! itself. The contract engine is written once against this trait.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{CodecError, Result};

/// Schema descriptor and field access for a record variant.
///
/// `FIELDS` lists the JSON field names in the order `addReading` receives
/// them. `UPDATE_FIELDS` lists the fields `updateReading` replaces, in the
/// order it receives them. Every name in either list must be resolvable by
/// [`Record::field`] and [`Record::field_mut`].
pub trait Record:
    Serialize + DeserializeOwned + Default + Clone + PartialEq + fmt::Debug + Send + Sync + 'static
{
    /// Human-readable variant name used in logs and error messages.
    const KIND: &'static str;

    /// Prefix for deterministic keys (`<prefix><index>`).
    const KEY_PREFIX: &'static str;

    /// All fields, in wire order.
    const FIELDS: &'static [&'static str];

    /// Fields replaced by an update, in argument order.
    const UPDATE_FIELDS: &'static [&'static str];

    /// Read a field by its JSON name.
    fn field(&self, name: &str) -> Option<&str>;

    /// Mutable access to a field by its JSON name.
    fn field_mut(&mut self, name: &str) -> Option<&mut String>;

    /// The hardcoded records written at ledger initialization.
    fn seed() -> Vec<Self>;

    /// Build a record from positional values matching `FIELDS`.
    fn from_fields(values: &[String]) -> Result<Self> {
        let mut record = Self::default();
        assign(&mut record, Self::FIELDS, values)?;
        Ok(record)
    }

    /// Replace the `UPDATE_FIELDS` with positional values, leaving the rest.
    fn apply_update(&mut self, values: &[String]) -> Result<()> {
        assign(self, Self::UPDATE_FIELDS, values)
    }

    /// Deterministic key for the seeded record at `index`.
    fn key_for(index: u64) -> String {
        format!("{}{}", Self::KEY_PREFIX, index)
    }
}

fn assign<R: Record>(record: &mut R, names: &[&'static str], values: &[String]) -> Result<()> {
    if names.len() != values.len() {
        return Err(CodecError::FieldCount {
            kind: R::KIND,
            expected: names.len(),
            got: values.len(),
        });
    }

    for (name, value) in names.iter().zip(values) {
        let slot = record.field_mut(name).ok_or_else(|| CodecError::UnknownField {
            kind: R::KIND,
            field: (*name).to_string(),
        })?;
        slot.clone_from(value);
    }

    Ok(())
}
