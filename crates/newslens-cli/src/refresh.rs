//! Loading, classifying, and publishing one dashboard refresh.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use newslens_classifier::{DashboardSnapshot, TextClassifier};
use newslens_core::{ArticleSource, SourceError};

use crate::state::DashboardState;

/// Everything a refresh needs, shared between the scheduler job, the stdin
/// trigger, and the startup run.
pub(crate) struct Refresher {
    source: Arc<dyn ArticleSource>,
    classifier: Arc<TextClassifier>,
    state: Arc<DashboardState>,
    timeline_topics: usize,
}

impl Refresher {
    pub(crate) fn new(
        source: Arc<dyn ArticleSource>,
        classifier: Arc<TextClassifier>,
        timeline_topics: usize,
    ) -> Self {
        Self {
            source,
            classifier,
            state: Arc::new(DashboardState::new()),
            timeline_topics,
        }
    }

    /// Digest of the snapshot the dashboard currently holds. A newer
    /// refresh may have published after the caller's own publish.
    pub(crate) fn current_summary(&self) -> Option<String> {
        self.state.latest().map(|snapshot| summary_line(&snapshot))
    }

    /// Run one refresh on the blocking pool and report the outcome.
    ///
    /// The ticket is taken before any work starts, so refreshes are ordered
    /// by when they were triggered, not by when they finish. Failures are
    /// logged and leave the published snapshot untouched.
    pub(crate) async fn refresh(self: Arc<Self>, trigger: &'static str) {
        let ticket = self.state.begin_refresh();
        tracing::debug!(trigger, ticket, "refresh: starting");

        let this = Arc::clone(&self);
        let outcome = tokio::task::spawn_blocking(move || {
            run_refresh(
                ticket,
                &*this.source,
                &this.classifier,
                &this.state,
                Utc::now(),
                this.timeline_topics,
            )
        })
        .await;

        match outcome {
            Ok(Ok(true)) => {
                tracing::info!(trigger, ticket, "refresh: published dashboard");
                if let Some(line) = self.current_summary() {
                    println!("{line}");
                }
            }
            Ok(Ok(false)) => {
                tracing::info!(
                    trigger,
                    ticket,
                    "refresh: newer result already published; discarded"
                );
            }
            Ok(Err(e)) => {
                tracing::error!(
                    trigger,
                    ticket,
                    source = %self.source.describe(),
                    error = %e,
                    "refresh: failed to load articles"
                );
            }
            Err(e) => {
                tracing::error!(trigger, ticket, error = %e, "refresh: task did not complete");
            }
        }
    }
}

/// Load, summarize, and publish under `ticket`.
///
/// Returns `true` when the snapshot was published, `false` when a later
/// refresh had already published.
///
/// # Errors
///
/// Returns [`SourceError`] if the articles cannot be loaded.
pub(crate) fn run_refresh(
    ticket: u64,
    source: &dyn ArticleSource,
    classifier: &TextClassifier,
    state: &DashboardState,
    now: DateTime<Utc>,
    timeline_topics: usize,
) -> Result<bool, SourceError> {
    let articles = source.load_articles()?;
    let snapshot = Arc::new(classifier.summarize(&articles, now, timeline_topics));
    Ok(state.publish(ticket, snapshot))
}

/// One-line digest printed after each published refresh.
pub(crate) fn summary_line(snapshot: &DashboardSnapshot) -> String {
    let leading = snapshot.metrics.leading_topic.as_deref().unwrap_or("none");
    format!(
        "[{}] {} articles from {} sources | +{} ={} -{} | leading topic: {} | fresh: {}% | ratio: {}",
        snapshot.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
        snapshot.article_count,
        snapshot.metrics.unique_sources,
        snapshot.sentiment.positive,
        snapshot.sentiment.neutral,
        snapshot.sentiment.negative,
        leading,
        snapshot.metrics.fresh_percentage,
        snapshot.metrics.sentiment_ratio,
    )
}
