/// Movie data provider abstractions
///
/// This module provides a pluggable architecture for the two external
/// collaborators: the movie search API feeding the recommendation pipeline
/// and the video search API used for best-effort trailer lookups. Failures
/// at this boundary are classified values, never exceptions: the aggregator
/// decides what a timeout or a rate limit means for the overall request.
use crate::models::MovieRecord;

#[cfg(test)]
use mockall::automock;

pub mod movie_recommender;
pub mod youtube;

/// Classified provider call failure
#[derive(thiserror::Error, Debug)]
pub enum SearchError {
    #[error("request timed out")]
    Timeout,

    #[error("rate limited by provider")]
    RateLimited,

    #[error("provider returned status {0}")]
    Upstream(u16),

    #[error("malformed provider response: {0}")]
    Malformed(String),

    #[error("transport error: {0}")]
    Transport(String),
}

impl SearchError {
    /// True for 429 responses, which the caller logs distinctly:
    /// under rate-limit pressure the remedy is trying different queries,
    /// not retrying the same one.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, SearchError::RateLimited)
    }
}

/// Trait for movie search providers
///
/// `search` returns up to `limit` normalized records for a free-text query.
/// Implementations are expected to consult the shared result cache before
/// touching the network.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait MovieSearchProvider: Send + Sync {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<MovieRecord>, SearchError>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Trait for trailer lookup providers
///
/// Strictly best-effort: implementations swallow every failure and return
/// `None`, so callers never need an error path.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait TrailerProvider: Send + Sync {
    async fn find_trailer<'a>(&self, title: &str, year: Option<&'a str>) -> Option<String>;
}
