//! Alfred script filter output
//!
//! Alfred expects `{"items": [...]}` on stdout, one object per row. Every row
//! here carries the same five keys in a fixed order; unset `arg` and
//! `variables` are written as `null`.

use crate::config::Config;
use crate::tmdb::{MovieSearchResult, TmdbClient};
use anyhow::Result;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// A single row in Alfred's result list
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub title: String,
    /// Handed to the next workflow step when the row is actioned
    pub arg: Option<String>,
    pub subtitle: String,
    pub valid: bool,
    pub variables: Option<BTreeMap<String, Value>>,
}

#[derive(Serialize, Debug)]
pub struct SuggestionList {
    pub items: Vec<Suggestion>,
}

impl Suggestion {
    pub fn new(title: impl Into<String>, arg: Option<String>) -> Self {
        Suggestion {
            title: title.into(),
            arg,
            subtitle: String::new(),
            valid: true,
            variables: None,
        }
    }

    pub fn for_movie(movie: &MovieSearchResult, web_base_url: &str) -> Self {
        let mut variables = BTreeMap::new();
        variables.insert("id".to_string(), Value::from(movie.id));

        Suggestion {
            subtitle: movie.original_title.clone(),
            variables: Some(variables),
            ..Suggestion::new(
                format!("{} ({})", movie.title, movie.release_date),
                Some(movie_url(web_base_url, movie.id)),
            )
        }
    }

    /// Placeholder row shown when a search comes back empty.
    ///
    /// Stays `valid` even though it has no `arg`; Alfred simply does nothing
    /// when it is actioned.
    pub fn no_results(search_term: &str) -> Self {
        Suggestion::new(format!("No results for search term \"{}\"", search_term), None)
    }
}

pub fn movie_url(web_base_url: &str, tmdb_id: u64) -> String {
    format!("{}/movie/{}/", web_base_url, tmdb_id)
}

/// Turn search results into rows, keeping TMDB's ordering.
pub fn build_suggestions(
    movies: &[MovieSearchResult],
    search_term: &str,
    web_base_url: &str,
) -> Vec<Suggestion> {
    if movies.is_empty() {
        return vec![Suggestion::no_results(search_term)];
    }
    movies
        .iter()
        .map(|m| Suggestion::for_movie(m, web_base_url))
        .collect()
}

pub fn render(items: Vec<Suggestion>) -> Result<String> {
    Ok(serde_json::to_string(&SuggestionList { items })?)
}

/// Search TMDB for `search_term` and return the script filter JSON
pub async fn get_alfred_suggestions(
    client: &TmdbClient,
    cfg: &Config,
    search_term: &str,
) -> Result<String> {
    let movies = client.search_movies(search_term).await?;
    render(build_suggestions(&movies, search_term, &cfg.web_base_url))
}
