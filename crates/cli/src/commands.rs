//! Clap command tree for the `horizon` binary.

use clap::{Arg, ArgAction, Command};

/// Build the top-level command.
pub fn build_cli() -> Command {
    Command::new("horizon")
        .about("Query and append to a horizondb catalog")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("data")
                .long("data")
                .short('d')
                .global(true)
                .value_name("PATH")
                .help("Snapshot file (default: data/data.json)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .value_name("FILE")
                .help("TOML catalog configuration"),
        )
        .arg(
            Arg::new("kind")
                .long("kind")
                .short('k')
                .global(true)
                .value_parser(["destinations", "sightings"])
                .help("Preset filter allowlist"),
        )
        .arg(
            Arg::new("compact")
                .long("compact")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Persist single-line JSON"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::Count)
                .help("More log output on stderr (repeatable)"),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .global(true)
                .action(ArgAction::SetTrue)
                .conflicts_with("verbose")
                .help("Only log errors"),
        )
        .subcommand(
            Command::new("query")
                .about("List records matching a query string")
                .arg(
                    Arg::new("query")
                        .value_name("QUERY_STRING")
                        .help("e.g. 'country=kenya&is_open_to_public=true'"),
                ),
        )
        .subcommand(
            Command::new("by")
                .about("Filter by a path-style key/value, plus an optional query string")
                .arg(Arg::new("key").required(true))
                .arg(
                    Arg::new("value")
                        .required(true)
                        .help("Percent-encoded path segment"),
                )
                .arg(Arg::new("query").value_name("QUERY_STRING")),
        )
        .subcommand(
            Command::new("append")
                .about("Append a JSON object and print it with its uuid")
                .arg(
                    Arg::new("json")
                        .value_name("JSON")
                        .help("Record payload; read from stdin when omitted"),
                ),
        )
        .subcommand(Command::new("config").about("Print the effective configuration"))
}
