use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Category label for articles that match no topic.
pub const OTHER_CATEGORY: &str = "other";

/// One topic of the vocabulary and the substrings that trigger it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicKeywords {
    pub name: String,
    pub keywords: Vec<String>,
}

impl TopicKeywords {
    #[must_use]
    pub fn new(name: &str, keywords: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
        }
    }
}

/// Word tables driving sentiment scoring and topic extraction.
///
/// Topic order is significant: category output follows it, and ties between
/// equally frequent topics resolve in this order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
    pub topics: Vec<TopicKeywords>,
}

impl Lexicon {
    /// Lower-case and trim every entry so matching can run on lower-cased text.
    #[must_use]
    pub fn normalized(self) -> Self {
        let norm = |words: Vec<String>| -> Vec<String> {
            words.into_iter().map(|w| w.trim().to_lowercase()).collect()
        };
        Self {
            positive: norm(self.positive),
            negative: norm(self.negative),
            topics: self
                .topics
                .into_iter()
                .map(|t| TopicKeywords {
                    name: t.name.trim().to_lowercase(),
                    keywords: norm(t.keywords),
                })
                .collect(),
        }
    }

    /// Check the tables are usable.
    ///
    /// An empty keyword would match every text, and a topic named `other`
    /// would collide with the fallback category.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_words("positive", &self.positive)?;
        check_words("negative", &self.negative)?;

        if let Some(word) = self.positive.iter().find(|w| self.negative.contains(w)) {
            return Err(ConfigError::Validation(format!(
                "word '{word}' is listed as both positive and negative"
            )));
        }

        if self.topics.is_empty() {
            return Err(ConfigError::Validation(
                "lexicon must define at least one topic".to_string(),
            ));
        }

        let mut seen_topics = HashSet::new();
        for topic in &self.topics {
            if topic.name.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "topic name must be non-empty".to_string(),
                ));
            }
            if topic.name.eq_ignore_ascii_case(OTHER_CATEGORY) {
                return Err(ConfigError::Validation(format!(
                    "topic name '{OTHER_CATEGORY}' is reserved"
                )));
            }
            if !seen_topics.insert(topic.name.to_lowercase()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate topic: '{}'",
                    topic.name
                )));
            }
            if topic.keywords.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "topic '{}' has no keywords",
                    topic.name
                )));
            }
            if topic.keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(ConfigError::Validation(format!(
                    "topic '{}' has an empty keyword",
                    topic.name
                )));
            }
        }

        Ok(())
    }
}

fn check_words(list: &str, words: &[String]) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for word in words {
        if word.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "{list} word list contains an empty entry"
            )));
        }
        if !seen.insert(word.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate {list} word: '{word}'"
            )));
        }
    }
    Ok(())
}

/// Load, normalize, and validate a lexicon from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_lexicon(path: &Path) -> Result<Lexicon, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LexiconFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let lexicon: Lexicon = serde_yaml::from_str(&content)?;
    let lexicon = lexicon.normalized();
    lexicon.validate()?;

    tracing::debug!(
        path = %path.display(),
        positive = lexicon.positive.len(),
        negative = lexicon.negative.len(),
        topics = lexicon.topics.len(),
        "loaded lexicon"
    );

    Ok(lexicon)
}
