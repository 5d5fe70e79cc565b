//! Recommendation aggregation pipeline.
//!
//! Drives the planned queries against the search provider until the target
//! count is reached or the plan is exhausted, then dedupes, scores, and
//! tops up from the curated catalog. Individual query failures only slow
//! the accumulator down; the pipeline as a whole fails only when live and
//! fallback sources both produce nothing.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::{
    error::{AppError, AppResult},
    models::{
        Mood, MovieRecord, Preference, RecommendationRequest, RecommendationResponse,
        SearchQueryHints,
    },
    services::{fallback, planner, providers::MovieSearchProvider, sentiment},
};

/// Desired result-set size in the reference policy
pub const TARGET_COUNT: usize = 8;

/// Requested limits are clamped into this range before use
const MIN_LIMIT: usize = 4;
const MAX_LIMIT: usize = 20;

/// Smallest batch worth asking the provider for
const MIN_FETCH_LIMIT: usize = 4;

/// Full request entry point: validate, classify, aggregate.
pub async fn recommend<R: Rng>(
    provider: &dyn MovieSearchProvider,
    request: &RecommendationRequest,
    rng: &mut R,
) -> AppResult<RecommendationResponse> {
    let mood_text = request.mood_text.trim();
    if mood_text.is_empty() {
        return Err(AppError::InvalidInput(
            "Please enter how you are feeling".to_string(),
        ));
    }

    let mood = sentiment::classify(mood_text, request.emoji.as_deref());

    // An explicit limit is honored within [4, 20] but never below the
    // reference target; an omitted limit means the reference target.
    let target_count = request
        .limit
        .map(|limit| limit.clamp(MIN_LIMIT, MAX_LIMIT).max(TARGET_COUNT))
        .unwrap_or(TARGET_COUNT);

    aggregate(
        provider,
        mood,
        mood_text,
        request.preference,
        target_count,
        rng,
    )
    .await
}

/// Run the aggregation pipeline for an already-classified mood.
pub async fn aggregate<R: Rng>(
    provider: &dyn MovieSearchProvider,
    mood: Mood,
    user_text: &str,
    preference: Preference,
    target_count: usize,
    rng: &mut R,
) -> AppResult<RecommendationResponse> {
    let queries = planner::plan(mood, user_text, preference, rng);

    // Sequential fetch with early exit: each request size depends on how
    // far the accumulator already got, so the loop cannot be parallelized
    // without losing the gentle-on-rate-limits batch shrinking.
    let mut accumulator: Vec<MovieRecord> = Vec::new();
    let mut used_queries: Vec<String> = Vec::new();

    for query in &queries {
        if accumulator.len() >= target_count {
            break;
        }

        let batch_limit = MIN_FETCH_LIMIT.max(target_count - accumulator.len());
        match provider.search(query, batch_limit).await {
            Ok(batch) if !batch.is_empty() => {
                tracing::info!(query = %query, results = batch.len(), "Query returned movies");
                accumulator.extend(batch);
                used_queries.push(query.clone());
            }
            Ok(_) => {
                tracing::info!(query = %query, "Query returned no movies");
            }
            Err(error) if error.is_rate_limited() => {
                tracing::warn!(query = %query, "Query rate limited, trying remaining queries");
            }
            Err(error) => {
                tracing::warn!(query = %query, error = %error, "Query failed");
            }
        }
    }

    // Dedup, first occurrence wins; unidentifiable records are dropped
    let mut seen: HashSet<String> = HashSet::new();
    let mut movies: Vec<MovieRecord> = Vec::new();
    for record in accumulator {
        if let Some(key) = record.dedup_key() {
            if seen.insert(key) {
                movies.push(record);
            }
        }
    }

    // Stable sort keeps the pre-sort relative order for equal scores
    movies.sort_by(|a, b| score(b, mood).total_cmp(&score(a, mood)));
    movies.truncate(target_count);

    let mut fallback_used = false;
    if movies.len() < target_count {
        tracing::info!(
            mood = %mood,
            live = movies.len(),
            target = target_count,
            "Topping up from the curated catalog"
        );
        fallback_used = true;

        let mut catalog = fallback::fallback_movies(mood);
        catalog.shuffle(rng);
        for record in catalog {
            if movies.len() >= target_count {
                break;
            }
            if let Some(key) = record.dedup_key() {
                if seen.insert(key) {
                    movies.push(record);
                }
            }
        }
    }

    if movies.is_empty() {
        return Err(AppError::NoRecommendations(
            "No movies found. Please try again.".to_string(),
        ));
    }

    Ok(RecommendationResponse {
        mood,
        emoji: mood.emoji().to_string(),
        total_movies: movies.len(),
        movies,
        fallback: fallback_used,
        queries: used_queries,
        search_queries: SearchQueryHints::for_mood(mood),
    })
}

fn score(record: &MovieRecord, mood: Mood) -> f64 {
    record.rating + mood.score_bias()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::providers::{MockMovieSearchProvider, SearchError};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn record(id: &str, title: &str, rating: f64) -> MovieRecord {
        MovieRecord {
            id: Some(id.to_string()),
            title: title.to_string(),
            overview: "overview".to_string(),
            rating,
            poster_url: None,
            release_date: "2020".to_string(),
        }
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(11)
    }

    /// Provider whose first call returns the given batch and every later
    /// call comes back empty.
    fn first_call_provider(batch: Vec<MovieRecord>) -> MockMovieSearchProvider {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut provider = MockMovieSearchProvider::new();
        provider.expect_search().returning(move |_, _| {
            if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                Ok(batch.clone())
            } else {
                Ok(Vec::new())
            }
        });
        provider
    }

    #[tokio::test]
    async fn test_dedup_keeps_first_occurrence() {
        let batch = vec![
            record("dup", "First Title", 5.0),
            record("dup", "Second Title", 9.9),
            record("other", "Other", 5.0),
        ];
        let provider = first_call_provider(batch);

        let response = aggregate(
            &provider,
            Mood::Relaxed,
            "",
            Preference::Mixed,
            TARGET_COUNT,
            &mut rng(),
        )
        .await
        .unwrap();

        let duplicates: Vec<_> = response
            .movies
            .iter()
            .filter(|m| m.id.as_deref() == Some("dup"))
            .collect();
        assert_eq!(duplicates.len(), 1);
        assert_eq!(duplicates[0].title, "First Title");
    }

    #[tokio::test]
    async fn test_stable_sort_preserves_order_of_ties() {
        let batch = vec![
            record("a", "Came First", 7.0),
            record("b", "Came Second", 7.0),
            record("c", "Came Third", 7.0),
            record("d", "Top", 9.0),
        ];
        let provider = first_call_provider(batch);

        let response = aggregate(
            &provider,
            Mood::Sad,
            "",
            Preference::Mixed,
            TARGET_COUNT,
            &mut rng(),
        )
        .await
        .unwrap();

        let titles: Vec<_> = response.movies.iter().take(4).map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Top", "Came First", "Came Second", "Came Third"]);
    }

    #[tokio::test]
    async fn test_target_count_guarantee_with_zero_live_results() {
        let mut provider = MockMovieSearchProvider::new();
        provider.expect_search().returning(|_, _| Ok(Vec::new()));

        let response = aggregate(
            &provider,
            Mood::Scared,
            "",
            Preference::Mixed,
            TARGET_COUNT,
            &mut rng(),
        )
        .await
        .unwrap();

        assert_eq!(response.movies.len(), TARGET_COUNT);
        assert!(response.fallback);
        assert!(response.queries.is_empty());

        let keys: HashSet<_> = response.movies.iter().filter_map(|m| m.dedup_key()).collect();
        assert_eq!(keys.len(), TARGET_COUNT);
    }

    #[tokio::test]
    async fn test_target_count_guarantee_when_every_query_fails() {
        let mut provider = MockMovieSearchProvider::new();
        provider
            .expect_search()
            .returning(|_, _| Err(SearchError::Timeout));

        let response = aggregate(
            &provider,
            Mood::Nostalgic,
            "",
            Preference::Local,
            TARGET_COUNT,
            &mut rng(),
        )
        .await
        .unwrap();

        assert_eq!(response.movies.len(), TARGET_COUNT);
        assert!(response.fallback);
    }

    #[tokio::test]
    async fn test_rate_limited_queries_are_skipped_not_fatal() {
        let mut provider = MockMovieSearchProvider::new();
        provider
            .expect_search()
            .returning(|_, _| Err(SearchError::RateLimited));

        let response = aggregate(
            &provider,
            Mood::Happy,
            "",
            Preference::Mixed,
            TARGET_COUNT,
            &mut rng(),
        )
        .await
        .unwrap();

        assert_eq!(response.movies.len(), TARGET_COUNT);
        assert!(response.fallback);
    }

    #[tokio::test]
    async fn test_happy_scenario_three_live_plus_five_fallback() {
        // Live ratings [9.0, 7.0, 8.0] with the happy bias score as
        // [9.3, 7.3, 8.3] and sort to 9.0, 8.0, 7.0
        let batch = vec![
            record("live_1", "Nine", 9.0),
            record("live_2", "Seven", 7.0),
            record("live_3", "Eight", 8.0),
        ];
        let provider = first_call_provider(batch);

        let response = aggregate(
            &provider,
            Mood::Happy,
            "feeling great",
            Preference::Mixed,
            TARGET_COUNT,
            &mut rng(),
        )
        .await
        .unwrap();

        assert_eq!(response.movies.len(), TARGET_COUNT);
        assert!(response.fallback);
        assert_eq!(response.movies[0].title, "Nine");
        assert_eq!(response.movies[1].title, "Eight");
        assert_eq!(response.movies[2].title, "Seven");
        assert_eq!(response.queries.len(), 1);
        assert_eq!(response.total_movies, TARGET_COUNT);
    }

    #[tokio::test]
    async fn test_early_exit_after_target_reached() {
        let batch: Vec<MovieRecord> = (0..TARGET_COUNT)
            .map(|i| record(&format!("id_{}", i), &format!("Movie {}", i), 6.0))
            .collect();

        let mut provider = MockMovieSearchProvider::new();
        provider
            .expect_search()
            .times(1)
            .returning(move |_, _| Ok(batch.clone()));

        let response = aggregate(
            &provider,
            Mood::Bored,
            "",
            Preference::Mixed,
            TARGET_COUNT,
            &mut rng(),
        )
        .await
        .unwrap();

        assert_eq!(response.movies.len(), TARGET_COUNT);
        assert!(!response.fallback);
    }

    #[tokio::test]
    async fn test_batch_limit_shrinks_as_accumulator_fills() {
        let first_batch: Vec<MovieRecord> = (0..5)
            .map(|i| record(&format!("id_{}", i), &format!("Movie {}", i), 6.0))
            .collect();

        let calls = Arc::new(AtomicUsize::new(0));
        let observed_limits = Arc::new(std::sync::Mutex::new(Vec::new()));

        let mut provider = MockMovieSearchProvider::new();
        let limits = Arc::clone(&observed_limits);
        provider.expect_search().returning(move |_, limit| {
            limits.lock().unwrap().push(limit);
            if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                Ok(first_batch.clone())
            } else {
                Ok(Vec::new())
            }
        });

        aggregate(
            &provider,
            Mood::Relaxed,
            "",
            Preference::Mixed,
            TARGET_COUNT,
            &mut rng(),
        )
        .await
        .unwrap();

        let limits = observed_limits.lock().unwrap();
        // First ask covers the whole target; once 5 are in, only 3 are
        // missing but the floor keeps requests at 4
        assert_eq!(limits[0], 8);
        assert!(limits[1..].iter().all(|&l| l == 4));
    }

    #[tokio::test]
    async fn test_unidentifiable_records_are_dropped() {
        let keyless = MovieRecord {
            id: None,
            title: String::new(),
            overview: "mystery".to_string(),
            rating: 9.9,
            poster_url: None,
            release_date: "Unknown".to_string(),
        };
        let provider = first_call_provider(vec![keyless, record("a", "Named", 5.0)]);

        let response = aggregate(
            &provider,
            Mood::Relaxed,
            "",
            Preference::Mixed,
            TARGET_COUNT,
            &mut rng(),
        )
        .await
        .unwrap();

        assert!(response.movies.iter().all(|m| m.dedup_key().is_some()));
    }

    #[tokio::test]
    async fn test_short_but_nonempty_when_target_exceeds_catalog() {
        let mut provider = MockMovieSearchProvider::new();
        provider.expect_search().returning(|_, _| Ok(Vec::new()));

        let response = aggregate(
            &provider,
            Mood::Adventurous,
            "",
            Preference::Mixed,
            20,
            &mut rng(),
        )
        .await
        .unwrap();

        // Curated catalog tops out at 12 per mood; a shortfall with at
        // least one record is returned as-is, not an error
        assert_eq!(response.movies.len(), 12);
        assert!(response.fallback);
    }

    #[tokio::test]
    async fn test_fallback_skips_keys_already_selected() {
        // Live result collides with a curated catalog entry by id
        let batch = vec![record("f_h_1", "3 Idiots (live copy)", 9.5)];
        let provider = first_call_provider(batch);

        let response = aggregate(
            &provider,
            Mood::Happy,
            "",
            Preference::Mixed,
            TARGET_COUNT,
            &mut rng(),
        )
        .await
        .unwrap();

        let count = response
            .movies
            .iter()
            .filter(|m| m.id.as_deref() == Some("f_h_1"))
            .count();
        assert_eq!(count, 1);
        assert_eq!(response.movies.len(), TARGET_COUNT);
    }

    #[tokio::test]
    async fn test_recommend_rejects_empty_mood_text() {
        let provider = MockMovieSearchProvider::new();
        let request = RecommendationRequest {
            mood_text: "   ".to_string(),
            emoji: None,
            preference: Preference::Mixed,
            limit: None,
        };

        let result = recommend(&provider, &request, &mut rng()).await;
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_recommend_honors_emoji_override() {
        let mut provider = MockMovieSearchProvider::new();
        provider.expect_search().returning(|_, _| Ok(Vec::new()));

        let request = RecommendationRequest {
            mood_text: "what a wonderful amazing day".to_string(),
            emoji: Some("😠".to_string()),
            preference: Preference::Mixed,
            limit: None,
        };

        let response = recommend(&provider, &request, &mut rng()).await.unwrap();
        assert_eq!(response.mood, Mood::Angry);
        assert_eq!(response.emoji, "😠");
    }

    #[tokio::test]
    async fn test_recommend_raises_small_limits_to_target() {
        let mut provider = MockMovieSearchProvider::new();
        provider.expect_search().returning(|_, _| Ok(Vec::new()));

        let request = RecommendationRequest {
            mood_text: "fine".to_string(),
            emoji: None,
            preference: Preference::Mixed,
            limit: Some(4),
        };

        let response = recommend(&provider, &request, &mut rng()).await.unwrap();
        assert_eq!(response.movies.len(), TARGET_COUNT);
    }
}
