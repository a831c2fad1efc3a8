use crate::config::Config;
use crate::constants::{SEARCH_MOVIE_ENDPOINT, TMDB_API_VERSION};
use anyhow::Result;
use reqwest::{
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
    Client,
};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;
use std::fmt::Display;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum TmdbError {
    /// The API answered with JSON that lacks a field we rely on
    #[error("unexpected response shape from '{endpoint}': {reason}")]
    UnexpectedResponse { endpoint: String, reason: String },
}

/// One entry of the `results` array returned by `/search/movie`
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct MovieSearchResult {
    pub id: u64,
    pub title: String,
    pub original_title: String,
    /// Missing for titles without a known release; kept verbatim otherwise
    #[serde(default)]
    pub release_date: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct MovieDetails {
    pub imdb_id: String,
}

#[derive(Deserialize, Debug)]
struct SearchResponse {
    results: Vec<MovieSearchResult>,
}

pub struct TmdbClient {
    pub base_url: String,
    pub client: Client,
}

impl TmdbClient {
    pub fn new(cfg: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", cfg.api_key))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json;charset=utf-8"),
        );

        let client = Client::builder().default_headers(headers).build()?;
        Ok(TmdbClient {
            base_url: format!("{}/{}", cfg.api_base_url, TMDB_API_VERSION),
            client,
        })
    }

    /// Issue a GET against `endpoint` and return the untyped JSON body.
    ///
    /// Transport failures, non-2xx statuses and malformed JSON are all errors.
    pub async fn request(&self, endpoint: &str, params: Option<&[(&str, &str)]>) -> Result<Value> {
        let url = format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'));
        debug!(%url, "requesting");

        let mut req = self.client.get(&url);
        if let Some(params) = params {
            req = req.query(params);
        }
        let resp = req.send().await?.error_for_status()?;
        Ok(resp.json().await?)
    }

    /// Search movies by title, in the order TMDB ranks them
    pub async fn search_movies(&self, query: &str) -> Result<Vec<MovieSearchResult>> {
        let body = self
            .request(SEARCH_MOVIE_ENDPOINT, Some(&[("query", query)]))
            .await?;
        let response: SearchResponse = from_body(SEARCH_MOVIE_ENDPOINT, body)?;
        debug!(count = response.results.len(), "search returned");
        Ok(response.results)
    }

    pub async fn get_movie_details(&self, tmdb_id: impl Display) -> Result<Value> {
        self.request(&format!("/movie/{}", tmdb_id), None).await
    }

    /// Resolve a TMDB movie id to its IMDb id (e.g. `tt0133093`)
    pub async fn get_imdb_id(&self, tmdb_id: impl Display) -> Result<String> {
        let endpoint = format!("/movie/{}", tmdb_id);
        let body = self.get_movie_details(tmdb_id).await?;
        let details: MovieDetails = from_body(&endpoint, body)?;
        Ok(details.imdb_id)
    }
}

fn from_body<T: DeserializeOwned>(endpoint: &str, body: Value) -> Result<T, TmdbError> {
    serde_json::from_value(body).map_err(|e| TmdbError::UnexpectedResponse {
        endpoint: endpoint.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_results_is_unexpected_shape() {
        let err = from_body::<SearchResponse>("/search/movie", json!({"page": 1})).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("/search/movie"));
        assert!(msg.contains("results"));
    }

    #[test]
    fn test_release_date_defaults_to_empty() {
        let movie: MovieSearchResult = from_body(
            "/search/movie",
            json!({"id": 1, "title": "Untitled", "original_title": "Untitled"}),
        )
        .unwrap();
        assert_eq!(movie.release_date, "");
    }

    #[test]
    fn test_null_imdb_id_is_unexpected_shape() {
        let result = from_body::<MovieDetails>("/movie/1", json!({"imdb_id": null}));
        assert!(matches!(
            result,
            Err(TmdbError::UnexpectedResponse { ref endpoint, .. }) if endpoint == "/movie/1"
        ));
    }
}
