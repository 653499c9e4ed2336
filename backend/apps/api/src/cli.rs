//! Command-line interface

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "quill")]
#[command(about = "A small multi-user blog", long_about = None)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        env = "QUILL_INSTANCE",
        help = "Instance directory holding the database and config.toml"
    )]
    pub instance: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Subcommand)]
pub enum Command {
    #[default]
    #[command(about = "Run the HTTP server")]
    Serve,

    #[command(about = "Clear the existing data and create new tables")]
    InitDb,
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
    fn test_serve_is_default() {
        let cli = Cli::try_parse_from(["quill"]).unwrap();
        assert_eq!(cli.command.unwrap_or_default(), Command::Serve);
    }

    #[test]
    fn test_init_db_with_instance() {
        let cli = Cli::try_parse_from(["quill", "init-db", "--instance", "/tmp/site"]).unwrap();
        assert_eq!(cli.command, Some(Command::InitDb));
        assert_eq!(cli.instance, Some(PathBuf::from("/tmp/site")));
    }

    #[test]
    fn test_unknown_command() {
        assert!(Cli::try_parse_from(["quill", "migrate"]).is_err());
    }
}
