use crate::config::Config;
use anyhow::Result;
use clap::ValueEnum;

pub mod imdb_id;
pub mod search;

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Action {
    /// Search movies by title and print Alfred script filter JSON
    #[default]
    Search,
    /// Print the IMDb id for a TMDB movie id
    #[value(name = "imdbId")]
    ImdbId,
}

/// Run `action` and return everything that should go to stdout.
///
/// Nothing is printed here, so a failure never leaves partial output behind.
pub async fn run(action: Action, query: &str, cfg: &Config) -> Result<String> {
    match action {
        Action::Search => search::run(cfg, query).await,
        Action::ImdbId => imdb_id::run(cfg, query).await,
    }
}
