//! String dispatch: function catalog, arity checks and the host-facing
//! [`Chaincode`] surface.

use std::fmt;
use std::str::FromStr;

use bytes::Bytes;
use ledger_readings_core::Record;
use ledger_readings_store::Store;

use crate::contract::Contract;
use crate::error::{ContractError, Result};
use crate::response::Response;

/// A function the host can invoke by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    InitLedger,
    AddReading,
    GetReadingForId,
    GetReading,
    UpdateReading,
}

impl Function {
    pub const ALL: [Function; 5] = [
        Function::InitLedger,
        Function::AddReading,
        Function::GetReadingForId,
        Function::GetReading,
        Function::UpdateReading,
    ];

    /// The name hosts use on the wire.
    pub fn name(self) -> &'static str {
        match self {
            Function::InitLedger => "initLedger",
            Function::AddReading => "addReading",
            Function::GetReadingForId => "getReadingForID",
            Function::GetReading => "getReading",
            Function::UpdateReading => "updateReading",
        }
    }

    /// Required argument count for schema `R`.
    pub fn arity<R: Record>(self) -> usize {
        match self {
            Function::InitLedger | Function::GetReading => 0,
            Function::GetReadingForId => 1,
            Function::AddReading => 1 + R::FIELDS.len(),
            Function::UpdateReading => 1 + R::UPDATE_FIELDS.len(),
        }
    }
}

impl FromStr for Function {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self> {
        Function::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| ContractError::UnknownFunction(s.to_string()))
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The invocation surface a host runtime drives.
///
/// Object safe, so a host can pick the schema at startup and hold a
/// `Box<dyn Chaincode>`.
pub trait Chaincode: Send + Sync {
    /// Instantiation hook. Does nothing to the ledger.
    fn init(&self) -> Response;

    /// Run `function` with positional `args`. Never panics on bad input;
    /// every failure comes back as [`Response::Error`].
    fn invoke(&self, function: &str, args: &[String]) -> Response;
}

impl<R: Record, S: Store> Contract<R, S> {
    /// Route a named call to its handler and return the raw payload.
    pub fn dispatch(&self, function: &str, args: &[String]) -> Result<Bytes> {
        let function: Function = function.parse()?;

        let expected = function.arity::<R>();
        if args.len() != expected {
            return Err(ContractError::Arity {
                function: function.name(),
                expected,
                got: args.len(),
            });
        }

        match function {
            Function::InitLedger => {
                self.init_ledger()?;
                Ok(Bytes::new())
            }
            Function::AddReading => {
                let record = R::from_fields(&args[1..])?;
                self.add_reading(&args[0], &record)?;
                Ok(Bytes::new())
            }
            Function::GetReadingForId => Ok(self.get_reading_for_id(&args[0])?.unwrap_or_default()),
            Function::GetReading => self.get_reading(),
            Function::UpdateReading => {
                self.update_reading(&args[0], |record| Ok(record.apply_update(&args[1..])?))?;
                Ok(Bytes::new())
            }
        }
    }
}

impl<R: Record, S: Store> Chaincode for Contract<R, S> {
    fn init(&self) -> Response {
        tracing::debug!(kind = R::KIND, "contract instantiated");
        Response::empty()
    }

    fn invoke(&self, function: &str, args: &[String]) -> Response {
        tracing::debug!(kind = R::KIND, function, args = args.len(), "invoke");

        match self.dispatch(function, args) {
            Ok(payload) => Response::success(payload),
            Err(e) => {
                tracing::warn!(kind = R::KIND, function, error = %e, "invoke failed");
                Response::error(e.to_string())
            }
        }
    }
}
