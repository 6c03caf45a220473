mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{edit, inspect, set_fields, EditArgs, InspectArgs, SetFieldsArgs};
use tracing_subscriber::EnvFilter;

/// jsongraph - inspect and edit JSON documents through their graph
#[derive(Parser, Debug)]
#[command(name = "jsongraph")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log pipeline activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the graph of a document, or show one node
    Inspect(InspectArgs),

    /// Replace the value of a scalar node
    Edit(EditArgs),

    /// Set the name and/or color of an object node
    SetFields(SetFieldsArgs),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?.display().to_string();

    match cli.command {
        Command::Inspect(args) => inspect(args, &cwd),
        Command::Edit(args) => edit(args, &cwd),
        Command::SetFields(args) => set_fields(args, &cwd),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_node_and_path_are_exclusive() {
        let parsed = Cli::try_parse_from([
            "jsongraph", "edit", "data.json", "--node", "abc", "--path", "/a", "--value", "1",
        ]);
        assert!(parsed.is_err());

        let missing = Cli::try_parse_from(["jsongraph", "edit", "data.json", "--value", "1"]);
        assert!(missing.is_err());
    }

    #[test]
    fn test_parse_set_fields() {
        let cli = Cli::try_parse_from([
            "jsongraph", "--verbose", "set-fields", "data.json", "--path", "/a", "--name", "y",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Command::SetFields(args) => {
                assert_eq!(args.target.path.as_deref(), Some("/a"));
                assert_eq!(args.name.as_deref(), Some("y"));
                assert!(args.color.is_none());
            }
            other => panic!("Expected set-fields, got {:?}", other),
        }
    }
}
