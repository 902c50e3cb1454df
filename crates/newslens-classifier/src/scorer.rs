//! Lexicon sentiment scorer.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ClassifierError;

/// Raw hit counts are divided by this before clamping. Fixed: long and short
/// texts are scored on the same scale.
pub const SCORE_DIVISOR: f64 = 5.0;

/// Scores strictly above this are positive.
pub const POSITIVE_THRESHOLD: f64 = 0.2;

/// Scores strictly below this are negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.2;

/// Discretized sentiment class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentBucket {
    Positive,
    Neutral,
    Negative,
}

impl SentimentBucket {
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score > POSITIVE_THRESHOLD {
            SentimentBucket::Positive
        } else if score < NEGATIVE_THRESHOLD {
            SentimentBucket::Negative
        } else {
            SentimentBucket::Neutral
        }
    }
}

impl std::fmt::Display for SentimentBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentBucket::Positive => write!(f, "positive"),
            SentimentBucket::Neutral => write!(f, "neutral"),
            SentimentBucket::Negative => write!(f, "negative"),
        }
    }
}

/// A string that names no [`SentimentBucket`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sentiment bucket '{0}'; expected positive, neutral, or negative")]
pub struct ParseBucketError(pub String);

impl std::str::FromStr for SentimentBucket {
    type Err = ParseBucketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "positive" => Ok(SentimentBucket::Positive),
            "neutral" => Ok(SentimentBucket::Neutral),
            "negative" => Ok(SentimentBucket::Negative),
            _ => Err(ParseBucketError(s.to_string())),
        }
    }
}

/// Counts whole-word lexicon hits in lower-cased text.
///
/// Each lexicon word gets its own pattern so every word is counted
/// independently, including words that overlap other entries. Word
/// boundaries are ASCII-only: a non-ASCII letter next to a word does not
/// stop it from matching.
#[derive(Debug, Clone)]
pub struct SentimentScorer {
    positive: Vec<Regex>,
    negative: Vec<Regex>,
}

impl SentimentScorer {
    /// Compile patterns for the given word lists. Words are expected to be
    /// lower-case already (see [`newslens_core::Lexicon::normalized`]).
    ///
    /// # Errors
    ///
    /// Returns [`ClassifierError::Pattern`] if a word cannot be compiled.
    pub fn new(positive: &[String], negative: &[String]) -> Result<Self, ClassifierError> {
        Ok(Self {
            positive: compile_words(positive)?,
            negative: compile_words(negative)?,
        })
    }

    /// Positive hits minus negative hits.
    #[must_use]
    pub fn raw_score(&self, text: &str) -> i64 {
        if text.is_empty() {
            return 0;
        }
        let lower = text.to_lowercase();
        let hits = |patterns: &[Regex]| -> i64 {
            patterns
                .iter()
                .map(|re| i64::try_from(re.find_iter(&lower).count()).unwrap_or(i64::MAX))
                .fold(0_i64, i64::saturating_add)
        };
        hits(&self.positive).saturating_sub(hits(&self.negative))
    }

    /// Normalized score in `[-1.0, 1.0]`: `clamp(raw / 5, -1, 1)`.
    /// Returns `0.0` for empty text.
    #[must_use]
    pub fn score(&self, text: &str) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let raw = self.raw_score(text) as f64;
        (raw / SCORE_DIVISOR).clamp(-1.0, 1.0)
    }
}

fn compile_words(words: &[String]) -> Result<Vec<Regex>, ClassifierError> {
    words
        .iter()
        .map(|word| {
            Regex::new(&format!(r"(?-u:\b){}(?-u:\b)", regex::escape(word))).map_err(|e| {
                ClassifierError::Pattern {
                    word: word.clone(),
                    source: e,
                }
            })
        })
        .collect()
}
