//! Subcommands.

use clap::Subcommand;
use compass_axum::bootstrap::{DEFAULT_HOST, DEFAULT_MAX_SESSIONS, DEFAULT_PORT};
use compass_core::Difficulty;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "COMPASS_PORT", default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Host to bind to
        #[arg(long, env = "COMPASS_HOST", default_value = DEFAULT_HOST)]
        host: String,
        /// Maximum number of live browser sessions
        #[arg(long, env = "COMPASS_MAX_SESSIONS", default_value_t = DEFAULT_MAX_SESSIONS)]
        max_sessions: usize,
        /// Origin allowed to call the JSON API; repeat or comma-separate.
        /// Any origin is allowed when none are given
        #[arg(long = "cors-origin", env = "COMPASS_CORS_ORIGINS", value_delimiter = ',')]
        cors_origins: Vec<String>,
    },

    /// List the seeded recipes
    List {
        /// Only show recipes from this cuisine
        #[arg(short, long)]
        cuisine: Option<String>,
    },

    /// Search by prep time, rating and difficulty
    Search {
        /// Longest acceptable prep time in minutes (5-120)
        #[arg(long)]
        max_time: Option<u32>,
        /// Lowest acceptable rating (1.0-5.0)
        #[arg(long)]
        min_rating: Option<f64>,
        /// Accepted difficulty; repeat or comma-separate. Defaults to Easy and Medium
        #[arg(short, long, value_delimiter = ',')]
        difficulty: Vec<Difficulty>,
    },

    /// Write the analytics charts as SVG files
    Charts {
        /// Directory to write into; created if missing
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Cli;
    use clap::Parser;

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::parse_from(["compass", "serve"]);
        match cli.command {
            Some(Commands::Serve {
                port,
                host,
                max_sessions,
                cors_origins,
            }) => {
                assert_eq!(port, DEFAULT_PORT);
                assert_eq!(host, DEFAULT_HOST);
                assert_eq!(max_sessions, DEFAULT_MAX_SESSIONS);
                assert!(cors_origins.is_empty());
            }
            other => panic!("expected serve, got {other:?}"),
        }
    }

    #[test]
    fn test_serve_cors_origins() {
        let cli = Cli::parse_from([
            "compass",
            "serve",
            "--cors-origin",
            "http://a.test,http://b.test",
            "--cors-origin",
            "http://c.test",
        ]);
        match cli.command {
            Some(Commands::Serve { cors_origins, .. }) => {
                assert_eq!(
                    cors_origins,
                    ["http://a.test", "http://b.test", "http://c.test"]
                );
            }
            other => panic!("expected serve, got {other:?}"),
        }
    }

    #[test]
    fn test_search_difficulties() {
        let cli = Cli::parse_from([
            "compass",
            "search",
            "--max-time",
            "45",
            "--difficulty",
            "hard,medium",
            "-d",
            "Easy",
        ]);
        match cli.command {
            Some(Commands::Search {
                max_time,
                min_rating,
                difficulty,
            }) => {
                assert_eq!(max_time, Some(45));
                assert_eq!(min_rating, None);
                assert_eq!(
                    difficulty,
                    [Difficulty::Hard, Difficulty::Medium, Difficulty::Easy]
                );
            }
            other => panic!("expected search, got {other:?}"),
        }
    }

    #[test]
    fn test_search_rejects_unknown_difficulty() {
        assert!(Cli::try_parse_from(["compass", "search", "-d", "Extreme"]).is_err());
    }
}
