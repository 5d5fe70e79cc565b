use serde::{Deserialize, Serialize};
use serde_json::Value;

/// TMDB-style image CDN base used to absolutize relative poster paths
pub const TMDB_IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w500";

/// Overviews longer than this are cut and marked with an ellipsis
const MAX_OVERVIEW_CHARS: usize = 500;

const DEFAULT_OVERVIEW: &str = "No overview available";

/// Canonical movie record returned to clients
///
/// Normalized from the heterogeneous shapes the search provider emits and
/// from the curated fallback catalog, so downstream consumers never have to
/// care where a record came from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieRecord {
    /// Provider-assigned or synthetic identifier; absent for some sources
    pub id: Option<String>,
    pub title: String,
    pub overview: String,
    /// 0.0-10.0, one decimal; 0.0 when the provider sent nothing usable
    pub rating: f64,
    pub poster_url: Option<String>,
    /// Provider date or year as-is, "Unknown" when absent
    pub release_date: String,
}

impl MovieRecord {
    /// Key used to collapse duplicates: id when present, else title.
    ///
    /// Records with neither are unusable and get dropped at dedup time.
    pub fn dedup_key(&self) -> Option<String> {
        match &self.id {
            Some(id) if !id.is_empty() => Some(id.clone()),
            _ if !self.title.is_empty() => Some(self.title.clone()),
            _ => None,
        }
    }
}

/// Raw search-result item as returned by the movie search API
///
/// Field names vary across the provider's upstream sources; every field is
/// optional and the `Value`-typed ones arrive as either numbers or strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMovie {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub vote_average: Option<Value>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub poster_url: Option<String>,
    #[serde(default)]
    pub poster: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub release_date: Option<Value>,
    #[serde(default)]
    pub year: Option<Value>,
}

impl From<RawMovie> for MovieRecord {
    fn from(raw: RawMovie) -> Self {
        let id = raw.id.as_ref().and_then(value_to_id);
        let title = first_non_empty(&[&raw.title, &raw.name]).unwrap_or_default();
        let rating = parse_rating(raw.vote_average.as_ref());
        let poster_url = resolve_poster(&raw);
        let release_date = resolve_release_date(&raw);

        let mut overview = raw
            .overview
            .filter(|o| !o.is_empty())
            .unwrap_or_else(|| DEFAULT_OVERVIEW.to_string());
        if overview.chars().count() > MAX_OVERVIEW_CHARS {
            overview = overview.chars().take(MAX_OVERVIEW_CHARS).collect::<String>() + "...";
        }

        MovieRecord {
            id,
            title,
            overview,
            rating,
            poster_url,
            release_date,
        }
    }
}

/// Poster resolution rules, evaluated first-match-wins:
/// `poster_path` and `backdrop_path` are always CDN-relative; the legacy
/// fields (`poster_url`, `poster`, `image`) are CDN-relative when they start
/// with `/`, absolute when they start with `http`, and discarded otherwise.
fn resolve_poster(raw: &RawMovie) -> Option<String> {
    if let Some(path) = non_empty(&raw.poster_path) {
        return Some(cdn_url(path));
    }
    if let Some(path) = non_empty(&raw.backdrop_path) {
        return Some(cdn_url(path));
    }
    // First legacy field that carries a value decides the outcome
    let legacy = first_non_empty(&[&raw.poster_url, &raw.poster, &raw.image])?;
    if legacy.starts_with('/') {
        Some(format!("{}{}", TMDB_IMAGE_BASE, legacy))
    } else if legacy.starts_with("http") {
        Some(legacy)
    } else {
        None
    }
}

fn cdn_url(path: &str) -> String {
    if path.starts_with('/') {
        format!("{}{}", TMDB_IMAGE_BASE, path)
    } else {
        format!("{}/{}", TMDB_IMAGE_BASE, path)
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

fn first_non_empty(fields: &[&Option<String>]) -> Option<String> {
    fields
        .iter()
        .find_map(|f| non_empty(f))
        .map(|s| s.to_string())
}

fn value_to_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Providers send `vote_average` as a number, a numeric string, or nothing.
fn parse_rating(value: Option<&Value>) -> f64 {
    let rating = match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    (rating * 10.0).round() / 10.0
}

fn resolve_release_date(raw: &RawMovie) -> String {
    if let Some(Value::String(date)) = &raw.release_date {
        if !date.is_empty() {
            return date.clone();
        }
    }
    match &raw.year {
        Some(Value::String(year)) if !year.is_empty() => year.clone(),
        Some(Value::Number(year)) => year
            .as_i64()
            .map(|y| y.to_string())
            .unwrap_or_else(|| year.to_string()),
        _ => "Unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_from_json(value: Value) -> RawMovie {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_poster_path_takes_priority() {
        let raw = raw_from_json(json!({
            "title": "Inception",
            "poster_path": "/edv5CZvWj09upOsy2Y6IwDhK8bt.jpg",
            "backdrop_path": "/other.jpg",
            "poster_url": "https://example.com/poster.jpg"
        }));
        let record = MovieRecord::from(raw);
        assert_eq!(
            record.poster_url.as_deref(),
            Some("https://image.tmdb.org/t/p/w500/edv5CZvWj09upOsy2Y6IwDhK8bt.jpg")
        );
    }

    #[test]
    fn test_poster_path_without_leading_slash_is_prefixed() {
        let raw = raw_from_json(json!({"title": "X", "poster_path": "abc.jpg"}));
        let record = MovieRecord::from(raw);
        assert_eq!(
            record.poster_url.as_deref(),
            Some("https://image.tmdb.org/t/p/w500/abc.jpg")
        );
    }

    #[test]
    fn test_backdrop_used_when_poster_path_missing() {
        let raw = raw_from_json(json!({"title": "X", "backdrop_path": "/bd.jpg"}));
        let record = MovieRecord::from(raw);
        assert_eq!(
            record.poster_url.as_deref(),
            Some("https://image.tmdb.org/t/p/w500/bd.jpg")
        );
    }

    #[test]
    fn test_legacy_relative_field_treated_as_cdn_path() {
        let raw = raw_from_json(json!({"title": "X", "poster_url": "/legacy.jpg"}));
        let record = MovieRecord::from(raw);
        assert_eq!(
            record.poster_url.as_deref(),
            Some("https://image.tmdb.org/t/p/w500/legacy.jpg")
        );
    }

    #[test]
    fn test_legacy_absolute_field_used_verbatim() {
        let raw = raw_from_json(json!({"title": "X", "image": "https://cdn.example.com/a.jpg"}));
        let record = MovieRecord::from(raw);
        assert_eq!(
            record.poster_url.as_deref(),
            Some("https://cdn.example.com/a.jpg")
        );
    }

    #[test]
    fn test_legacy_garbage_field_discarded() {
        let raw = raw_from_json(json!({"title": "X", "poster": "not-a-url"}));
        let record = MovieRecord::from(raw);
        assert_eq!(record.poster_url, None);
    }

    #[test]
    fn test_no_poster_fields_yields_none() {
        let raw = raw_from_json(json!({"title": "X"}));
        let record = MovieRecord::from(raw);
        assert_eq!(record.poster_url, None);
    }

    #[test]
    fn test_title_falls_back_to_name() {
        let raw = raw_from_json(json!({"name": "Dangal"}));
        let record = MovieRecord::from(raw);
        assert_eq!(record.title, "Dangal");
    }

    #[test]
    fn test_rating_from_number_rounds_to_one_decimal() {
        let raw = raw_from_json(json!({"title": "X", "vote_average": 7.849}));
        let record = MovieRecord::from(raw);
        assert_eq!(record.rating, 7.8);
    }

    #[test]
    fn test_rating_from_numeric_string() {
        let raw = raw_from_json(json!({"title": "X", "vote_average": "8.25"}));
        let record = MovieRecord::from(raw);
        assert_eq!(record.rating, 8.3);
    }

    #[test]
    fn test_rating_defaults_to_zero_on_garbage() {
        let raw = raw_from_json(json!({"title": "X", "vote_average": "n/a"}));
        let record = MovieRecord::from(raw);
        assert_eq!(record.rating, 0.0);
    }

    #[test]
    fn test_rating_defaults_to_zero_when_absent() {
        let raw = raw_from_json(json!({"title": "X"}));
        let record = MovieRecord::from(raw);
        assert_eq!(record.rating, 0.0);
    }

    #[test]
    fn test_overview_defaults_when_missing() {
        let raw = raw_from_json(json!({"title": "X"}));
        let record = MovieRecord::from(raw);
        assert_eq!(record.overview, "No overview available");
    }

    #[test]
    fn test_long_overview_truncated_with_ellipsis() {
        let long = "a".repeat(600);
        let raw = raw_from_json(json!({"title": "X", "overview": long}));
        let record = MovieRecord::from(raw);
        assert_eq!(record.overview.chars().count(), 503);
        assert!(record.overview.ends_with("..."));
    }

    #[test]
    fn test_overview_at_limit_kept_intact() {
        let exact = "b".repeat(500);
        let raw = raw_from_json(json!({"title": "X", "overview": exact.clone()}));
        let record = MovieRecord::from(raw);
        assert_eq!(record.overview, exact);
    }

    #[test]
    fn test_release_date_prefers_date_over_year() {
        let raw = raw_from_json(json!({"title": "X", "release_date": "2010-07-16", "year": 2010}));
        let record = MovieRecord::from(raw);
        assert_eq!(record.release_date, "2010-07-16");
    }

    #[test]
    fn test_release_date_falls_back_to_numeric_year() {
        let raw = raw_from_json(json!({"title": "X", "year": 2019}));
        let record = MovieRecord::from(raw);
        assert_eq!(record.release_date, "2019");
    }

    #[test]
    fn test_release_date_unknown_when_absent() {
        let raw = raw_from_json(json!({"title": "X"}));
        let record = MovieRecord::from(raw);
        assert_eq!(record.release_date, "Unknown");
    }

    #[test]
    fn test_numeric_id_stringified() {
        let raw = raw_from_json(json!({"id": 603, "title": "The Matrix"}));
        let record = MovieRecord::from(raw);
        assert_eq!(record.id.as_deref(), Some("603"));
    }

    #[test]
    fn test_dedup_key_prefers_id() {
        let record = MovieRecord {
            id: Some("m1".to_string()),
            title: "Title".to_string(),
            overview: String::new(),
            rating: 0.0,
            poster_url: None,
            release_date: "Unknown".to_string(),
        };
        assert_eq!(record.dedup_key().as_deref(), Some("m1"));
    }

    #[test]
    fn test_dedup_key_falls_back_to_title() {
        let record = MovieRecord {
            id: None,
            title: "Sholay".to_string(),
            overview: String::new(),
            rating: 0.0,
            poster_url: None,
            release_date: "1975".to_string(),
        };
        assert_eq!(record.dedup_key().as_deref(), Some("Sholay"));
    }

    #[test]
    fn test_dedup_key_none_when_unidentifiable() {
        let record = MovieRecord {
            id: None,
            title: String::new(),
            overview: String::new(),
            rating: 0.0,
            poster_url: None,
            release_date: "Unknown".to_string(),
        };
        assert_eq!(record.dedup_key(), None);
    }
}
