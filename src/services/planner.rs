//! Mood-driven search query planning.
//!
//! Produces the candidate queries the aggregator will try, ordered
//! randomly so repeated requests with the same mood don't always hit the
//! provider with the identical first query (and inherit its result bias).

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{Mood, Preference};

/// User text longer than this is too noisy to splice into a search query
const MAX_USER_TEXT_TOKENS: usize = 4;

/// Build the shuffled query list for one recommendation request.
///
/// The randomness source is injected so tests can seed it and assert the
/// generated set; callers must treat the order as unspecified.
pub fn plan<R: Rng>(
    mood: Mood,
    user_text: &str,
    preference: Preference,
    rng: &mut R,
) -> Vec<String> {
    let mut queries = Vec::new();

    if preference.includes_foreign() {
        queries.push(format!("{} movies", mood));
        if mood == Mood::Happy {
            queries.push(format!("{} comedy movies", mood));
        } else {
            queries.push(format!("{} drama movies", mood));
        }
        if mood.is_energetic() {
            queries.push(format!("{} action movies", mood));
        } else {
            queries.push(format!("{} romantic movies", mood));
        }
    }

    if preference.includes_local() {
        queries.push(format!("{} bollywood movies", mood));
        if mood.is_energetic() {
            queries.push(format!("{} bollywood action movies", mood));
        } else {
            queries.push(format!("{} bollywood romantic movies", mood));
        }
    }

    // Short user text gets spliced in for more specific matches
    let trimmed = user_text.trim();
    if !trimmed.is_empty() && trimmed.split_whitespace().count() <= MAX_USER_TEXT_TOKENS {
        let lowered = trimmed.to_lowercase();
        if preference.includes_foreign() {
            queries.push(format!("{} movies {}", mood, lowered));
        }
        if preference.includes_local() {
            queries.push(format!("{} bollywood {}", mood, lowered));
        }
    }

    queries.shuffle(rng);
    queries
}
