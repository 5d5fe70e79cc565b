use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// RapidAPI key shared by the movie search and trailer search APIs
    pub rapidapi_key: String,

    /// Movie search API base URL
    #[serde(default = "default_movie_api_url")]
    pub movie_api_url: String,

    /// Movie search API RapidAPI host header
    #[serde(default = "default_movie_api_host")]
    pub movie_api_host: String,

    /// YouTube search API base URL (trailer lookups)
    #[serde(default = "default_youtube_api_url")]
    pub youtube_api_url: String,

    /// YouTube search API RapidAPI host header
    #[serde(default = "default_youtube_api_host")]
    pub youtube_api_host: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_movie_api_url() -> String {
    "https://ai-movie-recommender.p.rapidapi.com/api".to_string()
}

fn default_movie_api_host() -> String {
    "ai-movie-recommender.p.rapidapi.com".to_string()
}

fn default_youtube_api_url() -> String {
    "https://youtube-v31.p.rapidapi.com".to_string()
}

fn default_youtube_api_host() -> String {
    "youtube-v31.p.rapidapi.com".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
