use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use newslens_core::Article;

use crate::types::{HeadlineMetrics, SentimentData, SentimentRatio, TopicTrend};

/// Articles newer than this count as fresh.
pub const FRESHNESS_WINDOW_HOURS: i64 = 24;

/// Summary figures derived from the articles and their already-computed
/// aggregates.
///
/// `trends` must be ordered most frequent first, as returned by
/// [`crate::TextClassifier::trending_topics`].
#[must_use]
pub fn headline_metrics(
    articles: &[Article],
    sentiment: &SentimentData,
    trends: &[TopicTrend],
    now: DateTime<Utc>,
) -> HeadlineMetrics {
    let unique_sources = articles
        .iter()
        .map(|a| a.source_name.as_str())
        .collect::<HashSet<_>>()
        .len();

    let cutoff = now - Duration::hours(FRESHNESS_WINDOW_HOURS);
    let fresh = articles.iter().filter(|a| a.published_at >= cutoff).count();

    HeadlineMetrics {
        total_articles: articles.len(),
        unique_sources,
        leading_topic: trends.first().map(|t| t.topic.clone()),
        fresh_percentage: rounded_percentage(fresh, articles.len()),
        sentiment_ratio: SentimentRatio::from_counts(sentiment.positive, sentiment.negative),
    }
}

#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn rounded_percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    (part as f64 / whole as f64 * 100.0).round() as u32
}
