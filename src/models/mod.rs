use std::fmt::Display;

use serde::{Deserialize, Serialize};

pub mod movie;

pub use movie::{MovieRecord, RawMovie};

/// Emotional categories driving query generation and fallback selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Angry,
    Relaxed,
    Bored,
    Excited,
    Romantic,
    Scared,
    Nostalgic,
    Adventurous,
}

impl Mood {
    pub const ALL: [Mood; 10] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Angry,
        Mood::Relaxed,
        Mood::Bored,
        Mood::Excited,
        Mood::Romantic,
        Mood::Scared,
        Mood::Nostalgic,
        Mood::Adventurous,
    ];

    /// Emoji shown alongside the detected mood
    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Sad => "😢",
            Mood::Angry => "😠",
            Mood::Relaxed => "😌",
            Mood::Bored => "😴",
            Mood::Excited => "🤩",
            Mood::Romantic => "💕",
            Mood::Scared => "😨",
            Mood::Nostalgic => "😌",
            Mood::Adventurous => "🏃‍♂️",
        }
    }

    /// Resolve an explicit emoji override picked by the user.
    ///
    /// This is a separate table from `emoji()`: it includes picker-only
    /// entries (🕵️, 🚀) and wins over sentiment analysis entirely.
    pub fn from_emoji(emoji: &str) -> Option<Mood> {
        match emoji {
            "😊" => Some(Mood::Happy),
            "😢" => Some(Mood::Sad),
            "😠" => Some(Mood::Angry),
            "😌" => Some(Mood::Relaxed),
            "😴" => Some(Mood::Bored),
            "🤩" => Some(Mood::Excited),
            "💕" => Some(Mood::Romantic),
            "😨" => Some(Mood::Scared),
            "🕵️" => Some(Mood::Bored),
            "🚀" => Some(Mood::Adventurous),
            _ => None,
        }
    }

    /// Curated Indian-flavored search phrase for this mood
    pub fn search_phrase(&self) -> &'static str {
        match self {
            Mood::Happy => "happy comedy movies bollywood",
            Mood::Sad => "sad drama movies indian",
            Mood::Angry => "action thriller movies bollywood",
            Mood::Relaxed => "calm relaxing movies indian",
            Mood::Bored => "exciting adventure movies bollywood",
            Mood::Excited => "action adventure movies indian",
            Mood::Romantic => "romantic movies bollywood",
            Mood::Scared => "horror thriller movies indian",
            Mood::Nostalgic => "classic vintage movies bollywood",
            Mood::Adventurous => "adventure action movies indian",
        }
    }

    /// The same phrase with the regional qualifiers stripped
    pub fn foreign_search_phrase(&self) -> String {
        self.search_phrase()
            .split_whitespace()
            .filter(|word| *word != "bollywood" && *word != "indian")
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Scoring bias applied on top of provider ratings
    pub fn score_bias(&self) -> f64 {
        match self {
            Mood::Happy | Mood::Romantic => 0.3,
            Mood::Angry | Mood::Excited | Mood::Adventurous => 0.2,
            _ => 0.0,
        }
    }

    /// High-energy moods get action-flavored queries instead of romantic ones
    pub fn is_energetic(&self) -> bool {
        matches!(self, Mood::Angry | Mood::Excited | Mood::Adventurous)
    }
}

impl Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Angry => "angry",
            Mood::Relaxed => "relaxed",
            Mood::Bored => "bored",
            Mood::Excited => "excited",
            Mood::Romantic => "romantic",
            Mood::Scared => "scared",
            Mood::Nostalgic => "nostalgic",
            Mood::Adventurous => "adventurous",
        };
        write!(f, "{}", name)
    }
}

/// Regional slant of the generated search queries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preference {
    #[default]
    Mixed,
    /// Bollywood/Indian catalog queries only
    Local,
    /// International catalog queries only
    Foreign,
}

impl Preference {
    pub fn includes_local(&self) -> bool {
        matches!(self, Preference::Mixed | Preference::Local)
    }

    pub fn includes_foreign(&self) -> bool {
        matches!(self, Preference::Mixed | Preference::Foreign)
    }
}

/// Recommendation request body
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationRequest {
    pub mood_text: String,
    #[serde(default)]
    pub emoji: Option<String>,
    #[serde(default)]
    pub preference: Preference,
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Seed phrases exposed so clients can show what drove the search
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchQueryHints {
    pub local: String,
    pub foreign: String,
}

impl SearchQueryHints {
    pub fn for_mood(mood: Mood) -> Self {
        Self {
            local: mood.search_phrase().to_string(),
            foreign: mood.foreign_search_phrase(),
        }
    }
}

/// Recommendation response payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub mood: Mood,
    pub emoji: String,
    pub movies: Vec<MovieRecord>,
    /// True when the curated catalog had to top up the live results
    pub fallback: bool,
    /// Queries that actually contributed results, in the order they ran
    pub queries: Vec<String>,
    pub search_queries: SearchQueryHints,
    pub total_movies: usize,
}
