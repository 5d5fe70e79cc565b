use std::sync::Arc;

use crate::config::Config;
use crate::db::Cache;
use crate::services::providers::{
    movie_recommender::MovieRecommenderProvider, youtube::YoutubeTrailerProvider,
    MovieSearchProvider, TrailerProvider,
};

/// Shared application state
///
/// Holds the provider trait objects so handlers stay decoupled from the
/// concrete RapidAPI clients; tests inject stubs through `new`.
#[derive(Clone)]
pub struct AppState {
    pub search: Arc<dyn MovieSearchProvider>,
    pub trailers: Arc<dyn TrailerProvider>,
}

impl AppState {
    pub fn new(search: Arc<dyn MovieSearchProvider>, trailers: Arc<dyn TrailerProvider>) -> Self {
        Self { search, trailers }
    }

    /// Wires the real providers, sharing one result cache per process
    pub fn from_config(config: &Config) -> Self {
        let cache = Cache::new();

        let search = MovieRecommenderProvider::new(
            cache,
            config.rapidapi_key.clone(),
            config.movie_api_url.clone(),
            config.movie_api_host.clone(),
        );
        let trailers = YoutubeTrailerProvider::new(
            config.rapidapi_key.clone(),
            config.youtube_api_url.clone(),
            config.youtube_api_host.clone(),
        );

        Self::new(Arc::new(search), Arc::new(trailers))
    }
}
