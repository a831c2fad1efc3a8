use crate::{alfred::get_alfred_suggestions, config::Config, tmdb::TmdbClient};
use anyhow::Result;

pub async fn run(cfg: &Config, query: &str) -> Result<String> {
    let client = TmdbClient::new(cfg)?;
    get_alfred_suggestions(&client, cfg, query).await
}
