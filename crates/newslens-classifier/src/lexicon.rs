//! Built-in word tables.

use newslens_core::{Lexicon, TopicKeywords};

pub const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "positive",
    "success",
    "win",
    "happy",
    "best",
    "hope",
    "improve",
    "better",
    "rise",
    "growth",
    "progress",
    "advance",
    "gain",
    "boost",
    "recover",
    "breakthrough",
    "celebrate",
    "achievement",
    "support",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "fail",
    "poor",
    "negative",
    "worse",
    "worst",
    "problem",
    "crisis",
    "trouble",
    "risk",
    "fear",
    "concern",
    "decline",
    "drop",
    "loss",
    "danger",
    "threat",
    "warning",
    "crash",
    "disaster",
    "conflict",
    "accident",
    "violence",
];

/// Topic vocabulary in output order. Keywords match as substrings.
pub const TOPIC_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "politics",
        &[
            "president",
            "government",
            "election",
            "congress",
            "senate",
            "democrat",
            "republican",
            "policy",
            "vote",
        ],
    ),
    (
        "technology",
        &[
            "tech",
            "apple",
            "google",
            "microsoft",
            "ai",
            "artificial intelligence",
            "software",
            "app",
            "device",
            "digital",
        ],
    ),
    (
        "health",
        &[
            "covid",
            "pandemic",
            "health",
            "disease",
            "vaccine",
            "hospital",
            "doctor",
            "medical",
            "medicine",
            "treatment",
        ],
    ),
    (
        "economy",
        &[
            "economy",
            "market",
            "stock",
            "inflation",
            "financial",
            "bank",
            "price",
            "investment",
            "trade",
            "economic",
        ],
    ),
    (
        "climate",
        &[
            "climate",
            "environment",
            "warming",
            "green",
            "carbon",
            "emission",
            "sustainable",
            "pollution",
            "energy",
        ],
    ),
    (
        "sports",
        &[
            "sports",
            "game",
            "player",
            "team",
            "win",
            "championship",
            "tournament",
            "league",
            "match",
            "score",
        ],
    ),
    (
        "entertainment",
        &[
            "film",
            "movie",
            "music",
            "celebrity",
            "star",
            "actor",
            "actress",
            "hollywood",
            "show",
            "award",
        ],
    ),
];

/// The built-in lexicon as owned configuration.
#[must_use]
pub fn default_lexicon() -> Lexicon {
    let owned = |words: &[&str]| -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    };
    Lexicon {
        positive: owned(POSITIVE_WORDS),
        negative: owned(NEGATIVE_WORDS),
        topics: TOPIC_KEYWORDS
            .iter()
            .map(|(name, keywords)| TopicKeywords::new(name, keywords))
            .collect(),
    }
}
