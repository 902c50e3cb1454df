//! Keyword topic extraction.

use newslens_core::TopicKeywords;

/// Tags text with every vocabulary topic whose keywords appear in it.
///
/// Keywords match as plain substrings of the lower-cased text, so short
/// keywords also fire inside longer words ("ai" in "said").
#[derive(Debug, Clone)]
pub struct TopicExtractor {
    topics: Vec<TopicKeywords>,
}

impl TopicExtractor {
    /// Keywords are expected to be lower-case already.
    #[must_use]
    pub fn new(topics: Vec<TopicKeywords>) -> Self {
        Self { topics }
    }

    /// Topic names in vocabulary order.
    pub fn topic_names(&self) -> impl Iterator<Item = &str> {
        self.topics.iter().map(|t| t.name.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Vocabulary indices of the matching topics, ascending.
    #[must_use]
    pub fn matching_indices(&self, text: &str) -> Vec<usize> {
        if text.is_empty() {
            return Vec::new();
        }
        let lower = text.to_lowercase();
        self.topics
            .iter()
            .enumerate()
            .filter(|(_, topic)| topic.keywords.iter().any(|k| lower.contains(k.as_str())))
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Names of the matching topics in vocabulary order. Empty when nothing
    /// matches.
    #[must_use]
    pub fn extract(&self, text: &str) -> Vec<&str> {
        self.matching_indices(text)
            .into_iter()
            .map(|idx| self.topics[idx].name.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::default_lexicon;

    fn extractor() -> TopicExtractor {
        TopicExtractor::new(default_lexicon().topics)
    }

    #[test]
    fn president_is_politics_only() {
        assert_eq!(
            extractor().extract("The president signed the bill"),
            vec!["politics"]
        );
    }

    #[test]
    fn empty_text_has_no_topics() {
        assert!(extractor().extract("").is_empty());
    }

    #[test]
    fn unrelated_text_has_no_topics() {
        assert!(extractor().extract("Local bakery opens").is_empty());
    }

    #[test]
    fn multiple_topics_in_vocabulary_order() {
        let e = extractor();
        let topics = e.extract("Hospital stocks surge after vaccine news");
        assert_eq!(topics, vec!["health", "economy"]);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(extractor().extract("GOOGLE unveils phone"), vec!["technology"]);
    }

    #[test]
    fn substring_matching_fires_inside_words() {
        // "said" contains "ai"; "stargazing" contains "star".
        let e = extractor();
        let topics = e.extract("She said stargazing");
        assert_eq!(topics, vec!["technology", "entertainment"]);
    }

    #[test]
    fn multi_word_keyword_matches() {
        assert_eq!(
            extractor().extract("artificial intelligence"),
            vec!["technology"]
        );
    }

    #[test]
    fn matching_indices_are_ascending() {
        // "win" is a sports keyword; "vote" is politics.
        assert_eq!(extractor().matching_indices("win the vote"), vec![0, 5]);
    }

    #[test]
    fn topic_names_follow_vocabulary() {
        let e = extractor();
        let names: Vec<&str> = e.topic_names().collect();
        assert_eq!(names.first(), Some(&"politics"));
        assert_eq!(names.last(), Some(&"entertainment"));
        assert_eq!(e.len(), 7);
    }
}
