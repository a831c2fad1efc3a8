//! # TMDB Alfred
//!
//! Core library for the `tmdb` command, a small adapter between The Movie
//! Database API and Alfred's script filter format.

use clap::Parser;

pub mod alfred;
pub mod commands;
pub mod config;
pub mod constants;
pub mod tmdb;

/// TMDB Alfred interface.
///
/// Searches movies by title (printing Alfred script filter JSON) or resolves a
/// TMDB movie id to its IMDb id. Requires `TMDB_API_KEY` in the environment.
#[derive(Parser, Debug)]
#[command(
    name = "tmdb",
    version,
    about = "TMDB Alfred interface.",
    long_about = "Searches The Movie Database and formats the results for Alfred.\n\nRequires a TMDB API read access token in TMDB_API_KEY.",
    infer_long_args = true
)]
pub struct Cli {
    /// The action to perform.
    #[arg(long, value_enum, default_value_t = commands::Action::Search)]
    pub action: commands::Action,
    /// The query to pass in to the action.
    #[arg(long)]
    pub query: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abbreviated_long_options() {
        let cli = Cli::try_parse_from(["tmdb", "--act", "imdbId", "--q", "603"]).unwrap();
        assert_eq!(cli.action, commands::Action::ImdbId);
        assert_eq!(cli.query, "603");
    }

    #[test]
    fn test_action_defaults_to_search() {
        let cli = Cli::try_parse_from(["tmdb", "--query", "Matrix"]).unwrap();
        assert_eq!(cli.action, commands::Action::Search);
    }
}
