use newslens_core::{Lexicon, OTHER_CATEGORY};

use crate::error::ClassifierError;
use crate::lexicon::default_lexicon;
use crate::scorer::{SentimentBucket, SentimentScorer};
use crate::topics::TopicExtractor;

/// Sentiment scorer and topic extractor built from one [`Lexicon`].
///
/// Holds no mutable state; every method is a pure function of its inputs
/// and the lexicon supplied at construction.
#[derive(Debug, Clone)]
pub struct TextClassifier {
    scorer: SentimentScorer,
    topics: TopicExtractor,
}

impl TextClassifier {
    /// Build a classifier from a lexicon. The lexicon is normalized
    /// (lower-cased, trimmed) and validated first.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifierError::Lexicon`] if the lexicon fails validation
    /// and [`ClassifierError::Pattern`] if a word cannot be compiled.
    pub fn new(lexicon: &Lexicon) -> Result<Self, ClassifierError> {
        let lexicon = lexicon.clone().normalized();
        lexicon.validate()?;

        let scorer = SentimentScorer::new(&lexicon.positive, &lexicon.negative)?;
        let topics = TopicExtractor::new(lexicon.topics);

        tracing::debug!(topics = topics.len(), "text classifier ready");
        Ok(Self { scorer, topics })
    }

    /// Classifier over the built-in word tables.
    ///
    /// # Panics
    ///
    /// Does not panic in practice: the built-in tables are covered by tests.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(&default_lexicon()).expect("built-in lexicon is valid")
    }

    /// Sentiment score in `[-1.0, 1.0]`; `0.0` for empty text.
    #[must_use]
    pub fn score(&self, text: &str) -> f64 {
        self.scorer.score(text)
    }

    #[must_use]
    pub fn bucket(&self, text: &str) -> SentimentBucket {
        SentimentBucket::from_score(self.score(text))
    }

    /// Matching topic names in vocabulary order.
    #[must_use]
    pub fn extract_topics(&self, text: &str) -> Vec<&str> {
        self.topics.extract(text)
    }

    #[must_use]
    pub fn topics(&self) -> &TopicExtractor {
        &self.topics
    }

    /// Category labels: every topic in vocabulary order, then `other`.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        self.topics
            .topic_names()
            .chain(std::iter::once(OTHER_CATEGORY))
            .collect()
    }
}

impl Default for TextClassifier {
    fn default() -> Self {
        Self::builtin()
    }
}
