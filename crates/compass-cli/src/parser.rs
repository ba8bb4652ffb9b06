//! Top-level parser and global options.

use clap::Parser;

use crate::commands::Commands;

/// Browse, search and chart a small recipe collection.
#[derive(Parser)]
#[command(name = "compass")]
#[command(about = "Culinary Compass recipe browser")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Default tracing directive when `RUST_LOG` is unset.
    pub const fn default_log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::parse_from(["compass", "list", "-v"]);
        assert!(cli.verbose);
        assert_eq!(cli.default_log_level(), "debug");
    }

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::parse_from(["compass"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.default_log_level(), "info");
    }
}
