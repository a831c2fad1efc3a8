use crate::{config::Config, tmdb::TmdbClient};
use anyhow::{Context, Result};

/// `query` is the TMDB movie id, used as-is in the request path
pub async fn run(cfg: &Config, query: &str) -> Result<String> {
    let client = TmdbClient::new(cfg)?;
    client
        .get_imdb_id(query)
        .await
        .with_context(|| format!("cannot resolve IMDb id for TMDB movie '{}'", query))
}
