/// YouTube search provider for trailer lookups (via RapidAPI youtube-v31)
///
/// Best-effort passthrough: one search for "{title} official trailer
/// {year}", first video id wins. Every failure mode collapses to `None`;
/// trailer availability must never break a recommendation flow.
use std::time::Duration;

use reqwest::Client as HttpClient;
use serde::Deserialize;

use crate::services::providers::TrailerProvider;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Deserialize)]
struct YoutubeSearchResponse {
    #[serde(default)]
    items: Vec<YoutubeItem>,
}

#[derive(Debug, Deserialize)]
struct YoutubeItem {
    #[serde(default)]
    id: Option<YoutubeItemId>,
}

#[derive(Debug, Deserialize)]
struct YoutubeItemId {
    #[serde(rename = "videoId", default)]
    video_id: Option<String>,
}

#[derive(Clone)]
pub struct YoutubeTrailerProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    api_host: String,
}

impl YoutubeTrailerProvider {
    pub fn new(api_key: String, api_url: String, api_host: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
            api_host,
        }
    }

    fn build_query(title: &str, year: Option<&str>) -> String {
        match year.map(str::trim).filter(|y| !y.is_empty()) {
            Some(year) => format!("{} official trailer {}", title, year),
            None => format!("{} official trailer", title),
        }
    }
}

#[async_trait::async_trait]
impl TrailerProvider for YoutubeTrailerProvider {
    async fn find_trailer<'a>(&self, title: &str, year: Option<&'a str>) -> Option<String> {
        let query = Self::build_query(title, year);
        let url = format!("{}/search", self.api_url);

        let response = self
            .http_client
            .get(&url)
            .header("x-rapidapi-host", &self.api_host)
            .header("x-rapidapi-key", &self.api_key)
            .query(&[
                ("q", query.as_str()),
                ("part", "id,snippet"),
                ("type", "video"),
                ("maxResults", "1"),
            ])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %e, title = %title, "Trailer search request failed");
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::warn!(
                status = %response.status(),
                title = %title,
                "Trailer search returned non-success status"
            );
            return None;
        }

        let payload: YoutubeSearchResponse = match response.json().await {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!(error = %e, title = %title, "Trailer search response unparseable");
                return None;
            }
        };

        payload
            .items
            .into_iter()
            .next()
            .and_then(|item| item.id)
            .and_then(|id| id.video_id)
    }
}
