//! CLI argument definitions using clap
//!
//! Commands:
//! - ledger-readings init
//! - ledger-readings invoke <FUNCTION> [ARGS]...

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Run record-ledger contract calls against a local SQLite ledger
#[derive(Parser, Debug)]
#[command(name = "ledger-readings")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the SQLite ledger file
    #[arg(long, default_value = "./ledger.db")]
    pub db: PathBuf,

    /// Record schema served by the contract
    #[arg(long, value_enum, default_value_t = Schema::Asset)]
    pub schema: Schema,

    /// Path to a JSON contract configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Read the ledger the way older deployments did: lenient decoding and
    /// updates that create missing records
    #[arg(long)]
    pub legacy: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Run the contract's instantiation hook
    Init,

    /// Invoke a contract function and print its payload
    Invoke {
        /// Function name, e.g. getReading
        function: String,

        /// Positional string arguments
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Schema {
    Asset,
    Sensor,
}
