//! Ledger initialization from the schema's hardcoded seed records.

use bytes::Bytes;
use ledger_readings_core::{encode, Record};
use ledger_readings_store::Store;

use crate::contract::Contract;
use crate::error::{ContractError, Result};

impl<R: Record, S: Store> Contract<R, S> {
    /// Write every seed record at `<prefix><index>`, in index order.
    ///
    /// Existing values at those keys are overwritten; nothing else is
    /// touched, so running it twice leaves the same ledger as running it
    /// once. Writes are not rolled back: if one fails, the records before it
    /// stay written and the error says how far it got.
    pub fn init_ledger(&self) -> Result<usize> {
        let seeds = R::seed();
        let total = seeds.len();

        for (written, record) in seeds.iter().enumerate() {
            let key = R::key_for(written as u64);
            let bytes = Bytes::from(encode(record)?);

            self.store()
                .put(&key, bytes)
                .map_err(|source| ContractError::SeedInterrupted {
                    written,
                    total,
                    key: key.clone(),
                    source,
                })?;
            tracing::debug!(kind = R::KIND, %key, "seed record written");
        }

        tracing::info!(kind = R::KIND, count = total, "ledger initialized");
        Ok(total)
    }
}
