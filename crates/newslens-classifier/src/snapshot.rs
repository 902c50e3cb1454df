use chrono::{DateTime, Utc};
use newslens_core::Article;
use serde::{Deserialize, Serialize};

use crate::aggregate::source_distribution;
use crate::classifier::TextClassifier;
use crate::keywords::keyword_cloud;
use crate::metrics::headline_metrics;
use crate::types::{
    CategoryDistribution, HeadlineMetrics, KeywordCount, SentimentData, SourceDistribution,
    TopicTimelinePoint, TopicTrend,
};

/// Every dashboard aggregate, computed together from one article slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub generated_at: DateTime<Utc>,
    pub article_count: usize,
    pub sentiment: SentimentData,
    pub sources: Vec<SourceDistribution>,
    pub trending_topics: Vec<TopicTrend>,
    pub categories: Vec<CategoryDistribution>,
    pub keywords: Vec<KeywordCount>,
    pub timeline: Vec<TopicTimelinePoint>,
    pub metrics: HeadlineMetrics,
}

impl TextClassifier {
    /// Compute the full dashboard from scratch.
    ///
    /// `now` anchors freshness and the timeline window; the timeline plots
    /// the `timeline_topics` most frequent trending topics.
    #[must_use]
    pub fn summarize(
        &self,
        articles: &[Article],
        now: DateTime<Utc>,
        timeline_topics: usize,
    ) -> DashboardSnapshot {
        let sentiment = self.aggregated_sentiment(articles);
        let trending_topics = self.trending_topics(articles);

        let plotted: Vec<&str> = trending_topics
            .iter()
            .take(timeline_topics)
            .map(|t| t.topic.as_str())
            .collect();
        let timeline = self.topic_timeline(articles, &plotted, now.date_naive());

        let metrics = headline_metrics(articles, &sentiment, &trending_topics, now);

        tracing::debug!(
            articles = articles.len(),
            topics = trending_topics.len(),
            "computed dashboard snapshot"
        );

        DashboardSnapshot {
            generated_at: now,
            article_count: articles.len(),
            sentiment,
            sources: source_distribution(articles),
            categories: self.category_distribution(articles),
            keywords: keyword_cloud(articles),
            timeline,
            metrics,
            trending_topics,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::types::SentimentRatio;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 12, 0, 0).unwrap()
    }

    #[test]
    fn empty_snapshot() {
        let snap = TextClassifier::builtin().summarize(&[], now(), 3);
        assert_eq!(snap.article_count, 0);
        assert_eq!(snap.sentiment, SentimentData::default());
        assert!(snap.sources.is_empty());
        assert!(snap.trending_topics.is_empty());
        assert_eq!(snap.categories.len(), 8);
        assert!(snap.keywords.is_empty());
        assert!(snap.timeline.is_empty());
        assert_eq!(snap.metrics.leading_topic, None);
    }

    #[test]
    fn snapshot_combines_aggregates() {
        let c = TextClassifier::builtin();
        let at = |h: u32| Utc.with_ymd_and_hms(2025, 3, 14, h, 0, 0).unwrap();
        let articles = vec![
            Article::new("Senate passes budget", "Reuters", at(9)),
            Article::new("Senate vote breakthrough, great progress", "AP", at(10)),
            Article::new("Hospital crisis deepens", "AP", at(11)),
        ];

        let snap = c.summarize(&articles, now(), 1);
        assert_eq!(snap.generated_at, now());
        assert_eq!(snap.article_count, 3);
        assert_eq!(snap.sentiment.total(), 3);
        assert_eq!(snap.sources[0].source_name, "AP");
        assert_eq!(snap.trending_topics[0].topic, "politics");
        assert_eq!(snap.metrics.leading_topic.as_deref(), Some("politics"));
        assert_eq!(snap.metrics.fresh_percentage, 100);
        // one positive ("breakthrough, great progress"), no negatives
        assert_eq!(snap.sentiment.positive, 1);
        assert_eq!(snap.metrics.sentiment_ratio, SentimentRatio::Unbounded);

        // one plotted topic over seven days
        assert_eq!(snap.timeline.len(), 7);
        assert!(snap.timeline.iter().all(|p| p.topic == "politics"));
        assert_eq!(snap.timeline.last().map(|p| p.count), Some(2));
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let c = TextClassifier::builtin();
        let articles = vec![Article::new("Great win", "AP", now())];
        let snap = c.summarize(&articles, now(), 3);
        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["article_count"], 1);
        assert!(json["categories"].is_array());
        assert_eq!(json["sentiment"]["neutral"], 0);
    }
}
