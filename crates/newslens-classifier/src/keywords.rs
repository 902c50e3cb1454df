//! Keyword frequency for the word cloud.

use std::collections::HashSet;

use newslens_core::Article;

use crate::aggregate::OrderedTally;
use crate::types::KeywordCount;

/// Keywords returned by [`keyword_cloud`].
pub const TOP_KEYWORDS: usize = 30;

/// Words must be longer than this many characters to count.
pub const MIN_KEYWORD_CHARS: usize = 3;

pub const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for", "from",
    "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself", "him",
    "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just", "me",
    "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once", "only",
    "or", "other", "our", "ours", "ourselves", "out", "over", "own", "same", "she", "should", "so",
    "some", "such", "than", "that", "the", "their", "theirs", "them", "themselves", "then",
    "there", "these", "they", "this", "those", "through", "to", "too", "under", "until", "up",
    "very", "was", "we", "were", "what", "when", "where", "which", "while", "who", "whom", "why",
    "will", "with", "would", "you", "your", "yours", "yourself", "yourselves",
];

/// Most frequent headline words, highest count first.
///
/// Reads title and description only. Text is lower-cased, every character
/// that is neither an ASCII word character nor whitespace is removed, and
/// the remainder is split on whitespace. Words of more than
/// [`MIN_KEYWORD_CHARS`] characters that are not stop words are counted.
/// Ties keep first-seen order; at most [`TOP_KEYWORDS`] are returned.
#[must_use]
pub fn keyword_cloud(articles: &[Article]) -> Vec<KeywordCount> {
    let stop: HashSet<&str> = STOP_WORDS.iter().copied().collect();
    let mut tally = OrderedTally::new();

    for article in articles {
        let cleaned: String = article
            .headline_text()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || c.is_whitespace())
            .collect();

        for word in cleaned.split_whitespace() {
            if word.chars().count() > MIN_KEYWORD_CHARS && !stop.contains(word) {
                tally.add(word.to_string());
            }
        }
    }

    tally
        .into_ranked()
        .into_iter()
        .take(TOP_KEYWORDS)
        .map(|(keyword, count)| KeywordCount { keyword, count })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn article(title: &str, description: Option<&str>) -> Article {
        let a = Article::new(
            title,
            "Wire",
            Utc.with_ymd_and_hms(2025, 3, 14, 12, 0, 0).unwrap(),
        );
        match description {
            Some(d) => a.with_description(d),
            None => a,
        }
    }

    fn pairs(cloud: &[KeywordCount]) -> Vec<(&str, usize)> {
        cloud
            .iter()
            .map(|k| (k.keyword.as_str(), k.count))
            .collect()
    }

    #[test]
    fn empty_input_is_empty() {
        assert!(keyword_cloud(&[]).is_empty());
    }

    #[test]
    fn counts_and_ranks_words() {
        let articles = vec![
            article("Markets rally again", Some("Markets close higher")),
            article("Rally continues", None),
        ];
        let cloud = keyword_cloud(&articles);
        assert_eq!(
            pairs(&cloud),
            vec![
                ("markets", 2),
                ("rally", 2),
                ("close", 1),
                ("higher", 1),
                ("continues", 1)
            ]
        );
    }

    #[test]
    fn short_words_and_stop_words_are_dropped() {
        let cloud = keyword_cloud(&[article("The cat and their dogs were here", None)]);
        // "cat" is too short; "the", "and", "their", "were", "here" are stop words
        assert_eq!(pairs(&cloud), vec![("dogs", 1)]);
    }

    #[test]
    fn punctuation_is_removed_not_split() {
        let cloud = keyword_cloud(&[article("Biden's plan: re-election", None)]);
        assert_eq!(pairs(&cloud), vec![("bidens", 1), ("plan", 1), ("reelection", 1)]);
    }

    #[test]
    fn non_ascii_letters_are_removed() {
        let cloud = keyword_cloud(&[article("Café owners protest", None)]);
        assert_eq!(pairs(&cloud), vec![("owners", 1), ("protest", 1)]);
    }

    #[test]
    fn content_is_ignored() {
        let articles = vec![article("Budget", None).with_content("inflation inflation inflation")];
        assert_eq!(pairs(&keyword_cloud(&articles)), vec![("budget", 1)]);
    }

    #[test]
    fn truncates_to_top_keywords() {
        let title: Vec<String> = (0..40).map(|i| format!("word{i:02}")).collect();
        let cloud = keyword_cloud(&[article(&title.join(" "), None)]);
        assert_eq!(cloud.len(), TOP_KEYWORDS);
        assert_eq!(cloud[0].keyword, "word00");
    }
}
