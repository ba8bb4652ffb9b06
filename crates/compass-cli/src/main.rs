//! CLI entry point - the composition root.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use compass_cli::{Cli, Commands, handlers};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads the env-backed flags
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.default_log_level()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Serve {
            port,
            host,
            max_sessions,
            cors_origins,
        } => handlers::serve::execute(host, port, max_sessions, cors_origins).await?,
        Commands::List { cuisine } => handlers::list::execute(cuisine.as_deref()),
        Commands::Search {
            max_time,
            min_rating,
            difficulty,
        } => handlers::search::execute(max_time, min_rating, difficulty),
        Commands::Charts { out_dir } => handlers::charts::execute(&out_dir)?,
    }

    Ok(())
}
