/// AI Movie Recommender API provider (via RapidAPI)
///
/// Single search endpoint returning a heterogeneous list of movie-like
/// objects; every response item is normalized into a `MovieRecord` before
/// leaving this module. Successful batches are memoized in the shared
/// result cache keyed by (lowercased query, limit).
use std::time::Duration;

use reqwest::{Client as HttpClient, StatusCode};
use serde::Deserialize;

use crate::{
    cached,
    db::{Cache, CacheKey, SEARCH_CACHE_TTL},
    models::{MovieRecord, RawMovie},
    services::providers::{MovieSearchProvider, SearchError},
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Search response envelope; a missing `movies` field means no results
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    movies: Vec<RawMovie>,
}

#[derive(Clone)]
pub struct MovieRecommenderProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    api_host: String,
    cache: Cache,
}

impl MovieRecommenderProvider {
    pub fn new(cache: Cache, api_key: String, api_url: String, api_host: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
            api_host,
            cache,
        }
    }

    async fn fetch(&self, query: &str, limit: usize) -> Result<Vec<MovieRecord>, SearchError> {
        let url = format!("{}/search", self.api_url);

        let response = self
            .http_client
            .get(&url)
            .header("x-rapidapi-host", &self.api_host)
            .header("x-rapidapi-key", &self.api_key)
            .query(&[("q", query)])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SearchError::Timeout
                } else {
                    SearchError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            tracing::warn!(
                query = %query,
                provider = "movie_recommender",
                "Rate limited; later queries may still be served from cache"
            );
            return Err(SearchError::RateLimited);
        }
        if !status.is_success() {
            return Err(SearchError::Upstream(status.as_u16()));
        }

        let payload: SearchResponse = response
            .json()
            .await
            .map_err(|e| SearchError::Malformed(e.to_string()))?;

        let movies: Vec<MovieRecord> = payload
            .movies
            .into_iter()
            .take(limit)
            .map(MovieRecord::from)
            .collect();

        tracing::info!(
            query = %query,
            results = movies.len(),
            provider = "movie_recommender",
            "Movie search completed"
        );

        Ok(movies)
    }
}

#[async_trait::async_trait]
impl MovieSearchProvider for MovieRecommenderProvider {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<MovieRecord>, SearchError> {
        let key = CacheKey::MovieSearch {
            query: query.to_string(),
            limit,
        };

        cached!(self.cache, key, SEARCH_CACHE_TTL, self.fetch(query, limit))
    }

    fn name(&self) -> &'static str {
        "movie_recommender"
    }
}
