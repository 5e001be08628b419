mod check;
mod generate;
mod preview;

use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use eyre::Result;
use generate::GenerateCommand;
use preview::PreviewCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for gwg_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "gwg")]
#[command(version)]
#[command(about = "Generate Go modules from TOML definitions")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Preview(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the Go module described by gwg.toml
    Generate(GenerateCommand),

    /// Print the generated package source to stdout
    Preview(PreviewCommand),

    /// Validate gwg.toml without generating code
    Check(CheckCommand),
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_defaults() {
        let cli = Cli::try_parse_from(["gwg", "generate"]).unwrap();
        assert_eq!(cli.verbose, 0);
        match cli.command {
            Commands::Generate(cmd) => {
                assert_eq!(cmd.config, Path::new("gwg.toml"));
                assert_eq!(cmd.output, None);
                assert!(!cmd.dry_run);
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_verbose_is_global_and_counted() {
        let cli = Cli::try_parse_from(["gwg", "preview", "-vv", "--indent", "tab"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Preview(_)));
    }

    #[test]
    fn test_unknown_indent_is_rejected() {
        assert!(Cli::try_parse_from(["gwg", "preview", "--indent", "spaces"]).is_err());
    }
}
