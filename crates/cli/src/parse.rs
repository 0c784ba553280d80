//! ArgMatches → CliAction and CatalogConfig conversion.
//!
//! Translates clap's parsed arguments into:
//! - the catalog operation to run (`CliAction`)
//! - the effective configuration (config file, then flag overrides)
//! - the log level requested by `-v` / `-q`

use clap::ArgMatches;
use horizondb::{decode_path_segment, CatalogConfig, CatalogKind, Query, SnapshotFormat};
use tracing::level_filters::LevelFilter;

/// The result of parsing a command line.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// An operation against the catalog.
    Execute(Operation),
    /// `config`: print the effective configuration without opening the store.
    ShowConfig,
}

/// Catalog operations.
#[derive(Debug, PartialEq)]
pub enum Operation {
    /// `query [QUERY_STRING]`
    Query(Query),
    /// `by <key> <value> [QUERY_STRING]`
    ByPath {
        key: String,
        value: String,
        query: Query,
    },
    /// `append [JSON]`; `None` means read the payload from stdin
    Append { payload: Option<String> },
}

/// Convert clap ArgMatches into a CliAction.
pub fn matches_to_action(matches: &ArgMatches) -> Result<CliAction, String> {
    let (sub_name, sub_matches) = matches
        .subcommand()
        .ok_or_else(|| "No command provided".to_string())?;

    match sub_name {
        "query" => Ok(CliAction::Execute(Operation::Query(query_arg(sub_matches)))),
        "by" => {
            let key = required(sub_matches, "key")?;
            let segment = required(sub_matches, "value")?;
            Ok(CliAction::Execute(Operation::ByPath {
                key,
                value: decode_path_segment(&segment),
                query: query_arg(sub_matches),
            }))
        }
        "append" => Ok(CliAction::Execute(Operation::Append {
            payload: sub_matches.get_one::<String>("json").cloned(),
        })),
        "config" => Ok(CliAction::ShowConfig),
        other => Err(format!("Unknown command: {}", other)),
    }
}

fn required(matches: &ArgMatches, name: &str) -> Result<String, String> {
    matches
        .get_one::<String>(name)
        .cloned()
        .ok_or_else(|| format!("Missing argument: {}", name))
}

fn query_arg(matches: &ArgMatches) -> Query {
    matches
        .get_one::<String>("query")
        .map(|qs| Query::parse(qs))
        .unwrap_or_default()
}

// =========================================================================
// Configuration
// =========================================================================

/// Effective configuration: the `--config` file (or defaults) with flag
/// overrides applied on top.
pub fn resolve_config(matches: &ArgMatches) -> horizondb::Result<CatalogConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => CatalogConfig::from_file(path)?,
        None => CatalogConfig::default(),
    };

    if let Some(path) = matches.get_one::<String>("data") {
        config.store.path = path.into();
    }
    match matches.get_one::<String>("kind").map(String::as_str) {
        Some("sightings") => config.kind = CatalogKind::Sightings,
        Some("destinations") => config.kind = CatalogKind::Destinations,
        _ => {}
    }
    if matches.get_flag("compact") {
        config.store.format = SnapshotFormat::Compact;
    }
    Ok(config)
}

/// Log level for the stderr subscriber.
pub fn log_level(matches: &ArgMatches) -> LevelFilter {
    if matches.get_flag("quiet") {
        return LevelFilter::ERROR;
    }
    match matches.get_count("verbose") {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}
