//! Corpus-wide aggregates over article slices.
//!
//! Sentiment, trends, and categories all classify an article's full text
//! (title, description, content). Headline filtering uses title and
//! description only.

use std::collections::HashMap;
use std::hash::Hash;

use newslens_core::Article;

use crate::classifier::TextClassifier;
use crate::scorer::SentimentBucket;
use crate::types::{CategoryDistribution, SentimentData, SourceDistribution, TopicTrend};

/// Sources kept by [`source_distribution`].
pub const TOP_SOURCES: usize = 10;

/// Counts keys while remembering the order each key was first seen.
pub(crate) struct OrderedTally<K> {
    index: HashMap<K, usize>,
    entries: Vec<(K, usize)>,
}

impl<K: Eq + Hash + Clone> OrderedTally<K> {
    pub(crate) fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    pub(crate) fn add(&mut self, key: K) {
        if let Some(&pos) = self.index.get(&key) {
            self.entries[pos].1 += 1;
        } else {
            self.index.insert(key.clone(), self.entries.len());
            self.entries.push((key, 1));
        }
    }

    /// Entries by descending count; equal counts keep first-seen order.
    pub(crate) fn into_ranked(self) -> Vec<(K, usize)> {
        let mut entries = self.entries;
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }
}

/// Which headlines to keep in [`TextClassifier::filter_headlines`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadlineFilter {
    #[default]
    All,
    Bucket(SentimentBucket),
}

/// Top [`TOP_SOURCES`] source names by article count.
///
/// Articles with an empty source name are not counted. Ties keep the order
/// in which sources first appear.
#[must_use]
pub fn source_distribution(articles: &[Article]) -> Vec<SourceDistribution> {
    let mut tally = OrderedTally::new();
    for article in articles.iter().filter(|a| !a.source_name.is_empty()) {
        tally.add(article.source_name.as_str());
    }

    tally
        .into_ranked()
        .into_iter()
        .take(TOP_SOURCES)
        .map(|(name, count)| SourceDistribution {
            source_name: name.to_string(),
            article_count: count,
        })
        .collect()
}

impl TextClassifier {
    /// Bucket counts over each article's full text.
    ///
    /// `positive + neutral + negative` always equals `articles.len()`.
    #[must_use]
    pub fn aggregated_sentiment(&self, articles: &[Article]) -> SentimentData {
        let mut data = SentimentData::default();
        for article in articles {
            data.record(self.bucket(&article.full_text()));
        }
        data
    }

    /// Topic frequency and mean sentiment, most frequent first.
    ///
    /// Each (article, matched topic) pair adds one to the topic's count and
    /// the article's score to its running sum. Ties keep first-seen order.
    /// Not truncated.
    #[must_use]
    pub fn trending_topics(&self, articles: &[Article]) -> Vec<TopicTrend> {
        // (vocabulary index, count, sentiment sum) in first-seen order
        let mut seen: Vec<(usize, usize, f64)> = Vec::new();

        for article in articles {
            let text = article.full_text();
            let matched = self.topics().matching_indices(&text);
            if matched.is_empty() {
                continue;
            }
            let sentiment = self.score(&text);
            for idx in matched {
                if let Some(entry) = seen.iter_mut().find(|(i, _, _)| *i == idx) {
                    entry.1 += 1;
                    entry.2 += sentiment;
                } else {
                    seen.push((idx, 1, sentiment));
                }
            }
        }

        let names: Vec<&str> = self.topics().topic_names().collect();
        let mut trends: Vec<TopicTrend> = seen
            .into_iter()
            .map(|(idx, count, sum)| TopicTrend {
                topic: names[idx].to_string(),
                article_count: count,
                mean_sentiment: if count > 0 {
                    #[allow(clippy::cast_precision_loss)]
                    let denom = count as f64;
                    sum / denom
                } else {
                    0.0
                },
            })
            .collect();

        trends.sort_by(|a, b| b.article_count.cmp(&a.article_count));
        trends
    }

    /// Article counts per category in vocabulary order, `other` last.
    ///
    /// Categories are not exclusive: an article matching three topics adds
    /// one to each, so the total can exceed the article count. Articles with
    /// no topic count once toward `other`.
    #[must_use]
    pub fn category_distribution(&self, articles: &[Article]) -> Vec<CategoryDistribution> {
        let categories = self.categories();
        let other = categories.len() - 1;
        let mut counts = vec![0_usize; categories.len()];

        for article in articles {
            let matched = self.topics().matching_indices(&article.full_text());
            if matched.is_empty() {
                counts[other] += 1;
            } else {
                for idx in matched {
                    counts[idx] += 1;
                }
            }
        }

        categories
            .into_iter()
            .zip(counts)
            .map(|(category, article_count)| CategoryDistribution {
                category: category.to_string(),
                article_count,
            })
            .collect()
    }

    /// Articles whose headline text (title and description) falls in the
    /// requested bucket, in input order.
    #[must_use]
    pub fn filter_headlines<'a>(
        &self,
        articles: &'a [Article],
        filter: HeadlineFilter,
    ) -> Vec<&'a Article> {
        match filter {
            HeadlineFilter::All => articles.iter().collect(),
            HeadlineFilter::Bucket(bucket) => articles
                .iter()
                .filter(|a| self.bucket(&a.headline_text()) == bucket)
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod tests;
