//! ledger-readings CLI entry point
//!
//! Opens a SQLite ledger, builds the contract for the selected schema and
//! forwards one `init` or `invoke` call to it. Success payloads go to
//! stdout; failure messages and logs go to stderr.

mod args;

use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use ledger_readings::store::SqliteStore;
use ledger_readings::{AssetContract, Chaincode, ContractConfig, Response, SensorContract};

use crate::args::{Cli, Command, Schema};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = load_config(cli.config.as_deref(), cli.legacy)?;
    let store = SqliteStore::open(&cli.db)
        .with_context(|| format!("opening ledger {}", cli.db.display()))?;

    let contract = build_contract(cli.schema, store, config);
    tracing::debug!(schema = ?cli.schema, db = %cli.db.display(), "contract ready");

    let response = match &cli.command {
        Command::Init => contract.init(),
        Command::Invoke { function, args } => contract.invoke(function, args),
    };

    report(response)
}

fn build_contract(schema: Schema, store: SqliteStore, config: ContractConfig) -> Box<dyn Chaincode> {
    match schema {
        Schema::Asset => Box::new(AssetContract::new(store, config)),
        Schema::Sensor => Box::new(SensorContract::new(store, config)),
    }
}

/// Contract configuration from an optional JSON file. `--legacy` switches the
/// decode and missing-record policies and keeps the file's scan bounds.
fn load_config(path: Option<&Path>, legacy: bool) -> anyhow::Result<ContractConfig> {
    let mut config = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            ContractConfig::from_json(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => ContractConfig::default(),
    };

    if legacy {
        config = ContractConfig {
            scan: config.scan,
            ..ContractConfig::legacy()
        };
    }

    Ok(config)
}

fn report(response: Response) -> anyhow::Result<ExitCode> {
    match response {
        Response::Success { payload } => {
            if !payload.is_empty() {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(&payload)?;
                stdout.write_all(b"\n")?;
                stdout.flush()?;
            }
            Ok(ExitCode::SUCCESS)
        }
        Response::Error { message } => {
            eprintln!("{}", message);
            Ok(ExitCode::FAILURE)
        }
    }
}
