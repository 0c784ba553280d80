//! Horizon CLI: query and append to a horizondb catalog from the shell.
//!
//! - `horizon query 'country=kenya'`
//! - `horizon by continent Africa 'is_open_to_public=true'`
//! - `echo '{"title":"Leopard"}' | horizon --kind sightings append`
//! - `horizon --config horizon.toml config`
//!
//! Responses are JSON on stdout; failures are a JSON error body on stderr
//! and a non-zero exit code.

mod commands;
mod format;
mod parse;

use std::process;

use anyhow::Context;
use horizondb::{Catalog, CatalogConfig};
use tokio::io::AsyncReadExt;
use tracing::debug;

use commands::build_cli;
use format::{format_error, format_failure, format_output};
use parse::{log_level, matches_to_action, resolve_config, CliAction, Operation};

#[tokio::main]
async fn main() {
    let matches = build_cli().get_matches();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(log_level(&matches))
        .init();

    let action = match matches_to_action(&matches) {
        Ok(action) => action,
        Err(e) => {
            eprintln!("{}", format_failure(400, &e));
            process::exit(2);
        }
    };

    let config = match resolve_config(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", format_error(&e));
            process::exit(1);
        }
    };

    match run(action, config).await {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            match e.downcast_ref::<horizondb::Error>() {
                Some(err) => eprintln!("{}", format_error(err)),
                None => eprintln!("{}", format_failure(500, &format!("{:#}", e))),
            }
            process::exit(1);
        }
    }
}

async fn run(action: CliAction, config: CatalogConfig) -> anyhow::Result<String> {
    let op = match action {
        CliAction::ShowConfig => return Ok(format_output(&config)),
        CliAction::Execute(op) => op,
    };

    debug!(path = %config.store.path.display(), kind = ?config.kind, "opening catalog");
    let catalog = Catalog::open(config).await?;

    let output = match op {
        Operation::Query(query) => format_output(&catalog.query(query).await?),
        Operation::ByPath { key, value, query } => {
            format_output(&catalog.query_by_path(&key, &value, query).await?)
        }
        Operation::Append { payload } => {
            let payload = match payload {
                Some(payload) => payload,
                None => read_stdin().await?,
            };
            format_output(&catalog.append_json(&payload).await?)
        }
    };

    catalog.close().await;
    Ok(output)
}

async fn read_stdin() -> anyhow::Result<String> {
    let mut payload = String::new();
    tokio::io::stdin()
        .read_to_string(&mut payload)
        .await
        .context("reading JSON payload from stdin")?;
    Ok(payload)
}
