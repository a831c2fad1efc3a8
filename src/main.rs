//! # TMDB Alfred
//!
//! Command-line adapter between The Movie Database API and Alfred.
//!
//! ```bash
//! export TMDB_API_KEY=...
//!
//! # Script filter JSON for a title search
//! tmdb --query "The Matrix"
//!
//! # IMDb id for a TMDB movie id
//! tmdb --action imdbId --query 603
//! ```
//!
//! Set `RUST_LOG=debug` to see the outgoing requests on stderr.

use anyhow::Result;
use clap::Parser;
use tmdb_alfred::{commands, config::Config, Cli};
use tracing_subscriber::EnvFilter;

/// Main entry point for the `tmdb` CLI
///
/// The API key is checked before arguments are parsed, so a missing key is
/// reported even for an otherwise invalid invocation.
#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cfg = Config::from_env().unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });

    let cli = Cli::parse();
    let output = commands::run(cli.action, &cli.query, &cfg).await?;
    println!("{}", output);
    Ok(())
}
