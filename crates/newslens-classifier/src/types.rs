use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::scorer::SentimentBucket;

/// Article counts per sentiment bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentData {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl SentimentData {
    pub fn record(&mut self, bucket: SentimentBucket) {
        match bucket {
            SentimentBucket::Positive => self.positive += 1,
            SentimentBucket::Neutral => self.neutral += 1,
            SentimentBucket::Negative => self.negative += 1,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }
}

/// Article count for one source name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDistribution {
    pub source_name: String,
    pub article_count: usize,
}

/// How often a topic appears and the mean sentiment of its articles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicTrend {
    pub topic: String,
    pub article_count: usize,
    pub mean_sentiment: f64,
}

/// Article count for one category (a topic or `other`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDistribution {
    pub category: String,
    pub article_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCount {
    pub keyword: String,
    pub count: usize,
}

/// Articles published on `date` that mention `topic`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicTimelinePoint {
    pub date: NaiveDate,
    pub topic: String,
    pub count: usize,
}

/// Positive-to-negative article ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentRatio {
    Ratio(f64),
    /// Positive articles exist but no negative ones.
    Unbounded,
}

impl SentimentRatio {
    #[must_use]
    pub fn from_counts(positive: usize, negative: usize) -> Self {
        if negative > 0 {
            #[allow(clippy::cast_precision_loss)]
            let ratio = positive as f64 / negative as f64;
            SentimentRatio::Ratio(ratio)
        } else if positive > 0 {
            SentimentRatio::Unbounded
        } else {
            SentimentRatio::Ratio(0.0)
        }
    }
}

impl std::fmt::Display for SentimentRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentRatio::Ratio(r) => write!(f, "{r:.2}"),
            SentimentRatio::Unbounded => write!(f, "∞"),
        }
    }
}

/// Headline figures shown above the charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadlineMetrics {
    pub total_articles: usize,
    pub unique_sources: usize,
    /// Most frequent topic, if any article matched one.
    pub leading_topic: Option<String>,
    /// Share of articles published in the last 24 hours, rounded to a whole percent.
    pub fresh_percentage: u32,
    pub sentiment_ratio: SentimentRatio,
}
