//! Lexicon-based mood classification.
//!
//! Polarity is scored from a weighted word list with simple negation
//! handling, then mapped onto a mood through fixed thresholds. Only five of
//! the ten moods are reachable from text alone (happy, excited, relaxed,
//! bored, sad); the rest require the emoji override. That narrowness is
//! intentional and must not be widened by retuning the thresholds.

use crate::models::Mood;

/// Negation markers flip the sign of the next scored word
const NEGATORS: &[&str] = &[
    "not", "no", "never", "nothing", "hardly", "dont", "don't", "cant", "can't", "wont", "won't",
    "isnt", "isn't", "wasnt", "wasn't",
];

/// How many tokens a negation marker stays armed for
const NEGATION_WINDOW: usize = 2;

/// Classify free text into a mood, honoring an explicit emoji override.
///
/// The override bypasses sentiment analysis entirely; an emoji outside the
/// override table falls through to text analysis.
pub fn classify(text: &str, emoji_override: Option<&str>) -> Mood {
    if let Some(emoji) = emoji_override.map(str::trim).filter(|e| !e.is_empty()) {
        if let Some(mood) = Mood::from_emoji(emoji) {
            return mood;
        }
    }
    mood_from_polarity(polarity(text))
}

/// Threshold mapping from polarity to mood, first match wins.
pub fn mood_from_polarity(polarity: f64) -> Mood {
    if polarity > 0.3 {
        Mood::Happy
    } else if polarity > 0.1 {
        Mood::Excited
    } else if polarity > -0.1 {
        Mood::Relaxed
    } else if polarity > -0.3 {
        Mood::Bored
    } else {
        Mood::Sad
    }
}

/// Sentiment polarity of the text in [-1.0, 1.0].
///
/// Mean weight of the sentiment-bearing words found, 0.0 when none match.
pub fn polarity(text: &str) -> f64 {
    let mut sum = 0.0;
    let mut matched = 0usize;
    let mut negation_armed = 0usize;

    for token in text.split_whitespace() {
        let token = normalize_token(token);
        if token.is_empty() {
            continue;
        }
        if NEGATORS.contains(&token.as_str()) {
            negation_armed = NEGATION_WINDOW;
            continue;
        }
        if let Some(weight) = word_weight(&token) {
            sum += if negation_armed > 0 { -weight } else { weight };
            matched += 1;
            negation_armed = 0;
        } else if negation_armed > 0 {
            negation_armed -= 1;
        }
    }

    if matched == 0 {
        0.0
    } else {
        (sum / matched as f64).clamp(-1.0, 1.0)
    }
}

fn normalize_token(token: &str) -> String {
    token
        .trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
        .to_lowercase()
}

fn word_weight(word: &str) -> Option<f64> {
    let weight = match word {
        // Positive
        "excellent" | "perfect" | "best" => 1.0,
        "amazing" | "awesome" | "fantastic" | "wonderful" | "delighted" => 0.9,
        "beautiful" => 0.85,
        "great" | "happy" | "joyful" | "cheerful" | "loving" => 0.8,
        "good" | "lovely" => 0.7,
        "love" | "loved" | "nice" | "thrilled" => 0.6,
        "fun" | "glad" | "excited" | "laugh" | "laughing" => 0.5,
        "enjoy" | "enjoyed" | "smile" | "smiling" | "pleasant" => 0.4,
        "cool" | "relaxed" | "peaceful" => 0.35,
        "hopeful" | "calm" => 0.3,
        "interested" | "interesting" => 0.25,
        "okay" | "fine" | "curious" => 0.2,
        "alright" | "decent" => 0.15,

        // Negative
        "terrible" | "awful" | "horrible" | "worst" => -1.0,
        "miserable" | "terrified" | "devastated" => -0.9,
        "heartbroken" => -0.85,
        "hate" | "hated" | "depressed" | "furious" => -0.8,
        "bad" => -0.7,
        "disappointed" => -0.65,
        "unhappy" | "crying" | "lonely" | "gloomy" | "boring" | "scared" | "afraid" => -0.6,
        "sick" => -0.55,
        "sad" | "bored" | "anxious" | "stressed" | "upset" | "hurt" | "pain" | "cry"
        | "exhausted" => -0.5,
        "annoyed" | "worried" | "dull" | "angry" => -0.4,
        "tired" | "down" | "lost" => -0.3,
        "meh" => -0.2,

        _ => return None,
    };
    Some(weight)
}
