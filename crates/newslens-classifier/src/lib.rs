//! Rule-based news classification for newslens.
//!
//! Scores article sentiment by counting whole-word hits against a
//! positive/negative lexicon, tags topics by keyword substring matching, and
//! computes the corpus-wide aggregates a dashboard renders. Everything here
//! is pure: the same articles and lexicon always give the same output, and
//! the clock is passed in rather than read.

pub mod aggregate;
pub mod classifier;
pub mod error;
pub mod keywords;
pub mod lexicon;
pub mod metrics;
pub mod scorer;
pub mod snapshot;
pub mod timeline;
pub mod topics;
pub mod types;

pub use aggregate::{source_distribution, HeadlineFilter, TOP_SOURCES};
pub use classifier::TextClassifier;
pub use error::ClassifierError;
pub use keywords::{keyword_cloud, TOP_KEYWORDS};
pub use lexicon::default_lexicon;
pub use metrics::headline_metrics;
pub use scorer::{ParseBucketError, SentimentBucket, SentimentScorer};
pub use snapshot::DashboardSnapshot;
pub use topics::TopicExtractor;
pub use types::{
    CategoryDistribution, HeadlineMetrics, KeywordCount, SentimentData, SentimentRatio,
    SourceDistribution, TopicTimelinePoint, TopicTrend,
};
