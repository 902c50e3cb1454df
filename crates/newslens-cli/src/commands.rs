//! Command handlers for the CLI.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use newslens_classifier::{HeadlineFilter, SentimentBucket, TextClassifier};
use newslens_core::{AppConfig, Article, ArticleSource, JsonFileSource};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::refresh::Refresher;

pub(crate) const DEFAULT_HEADLINE_LIMIT: usize = 10;

/// Classifier from the configured lexicon file, or the built-in tables when
/// none is configured.
///
/// # Errors
///
/// Returns an error if the lexicon file cannot be read, fails validation,
/// or contains a word that cannot be compiled into a pattern.
pub(crate) fn build_classifier(config: &AppConfig) -> anyhow::Result<TextClassifier> {
    let Some(path) = &config.lexicon_path else {
        tracing::debug!("using built-in lexicon");
        return Ok(TextClassifier::builtin());
    };

    let lexicon = newslens_core::load_lexicon(path)?;
    let classifier = TextClassifier::new(&lexicon)?;
    tracing::info!(
        path = %path.display(),
        topics = classifier.topics().len(),
        "loaded lexicon"
    );
    Ok(classifier)
}

fn article_source(config: &AppConfig, articles: Option<PathBuf>) -> JsonFileSource {
    JsonFileSource::new(articles.unwrap_or_else(|| config.articles_path.clone()))
}

fn load(source: &JsonFileSource) -> anyhow::Result<Vec<Article>> {
    let articles = source.load_articles()?;
    tracing::info!(
        source = %source.describe(),
        count = articles.len(),
        "loaded articles"
    );
    Ok(articles)
}

/// Print the dashboard snapshot as JSON.
///
/// # Errors
///
/// Returns an error if the articles cannot be loaded or serialized.
pub(crate) fn run_analyze(
    config: &AppConfig,
    classifier: &TextClassifier,
    articles: Option<PathBuf>,
    pretty: bool,
) -> anyhow::Result<()> {
    let articles = load(&article_source(config, articles))?;
    let snapshot = classifier.summarize(&articles, Utc::now(), config.timeline_topics);

    let json = if pretty {
        serde_json::to_string_pretty(&snapshot)?
    } else {
        serde_json::to_string(&snapshot)?
    };
    println!("{json}");
    Ok(())
}

/// Print up to `limit` headlines, filtered by sentiment bucket.
///
/// # Errors
///
/// Returns an error if the articles cannot be loaded.
pub(crate) fn run_headlines(
    config: &AppConfig,
    classifier: &TextClassifier,
    articles: Option<PathBuf>,
    bucket: Option<SentimentBucket>,
    limit: usize,
) -> anyhow::Result<()> {
    let articles = load(&article_source(config, articles))?;
    let lines = headline_lines(classifier, &articles, bucket, limit);

    if lines.is_empty() {
        println!("no matching headlines");
    }
    for line in lines {
        println!("{line}");
    }
    Ok(())
}

fn headline_lines(
    classifier: &TextClassifier,
    articles: &[Article],
    bucket: Option<SentimentBucket>,
    limit: usize,
) -> Vec<String> {
    let filter = bucket.map_or(HeadlineFilter::All, HeadlineFilter::Bucket);
    classifier
        .filter_headlines(articles, filter)
        .into_iter()
        .take(limit)
        .map(|article| {
            let bucket = classifier.bucket(&article.headline_text());
            format!(
                "[{bucket}] {} ({}, {})",
                article.title,
                article.source_name,
                article.published_at.format("%Y-%m-%d %H:%M")
            )
        })
        .collect()
}

pub(crate) fn run_score(classifier: &TextClassifier, text: &str) {
    println!("{}", score_line(classifier, text));
}

fn score_line(classifier: &TextClassifier, text: &str) -> String {
    let score = classifier.score(text);
    format!("{score:.2} ({})", SentimentBucket::from_score(score))
}

pub(crate) fn run_topics(classifier: &TextClassifier, text: &str) {
    let topics = classifier.extract_topics(text);
    if topics.is_empty() {
        println!("(no topics)");
    }
    for topic in topics {
        println!("{topic}");
    }
}

/// Refresh the dashboard at startup, on the configured interval, and each
/// time a line is read from stdin, until a shutdown signal arrives.
///
/// # Errors
///
/// Returns an error if the scheduler cannot be started or stopped.
pub(crate) async fn run_watch(
    config: AppConfig,
    classifier: TextClassifier,
    articles: Option<PathBuf>,
    interval_secs: Option<u64>,
) -> anyhow::Result<()> {
    let source = article_source(&config, articles);
    let interval = Duration::from_secs(interval_secs.unwrap_or(config.refresh_interval_secs));
    tracing::info!(
        source = %source.describe(),
        interval_secs = interval.as_secs(),
        "watch: starting"
    );

    let refresher = Arc::new(Refresher::new(
        Arc::new(source),
        Arc::new(classifier),
        config.timeline_topics,
    ));
    Arc::clone(&refresher).refresh("startup").await;

    let mut scheduler =
        crate::scheduler::build_scheduler(Arc::clone(&refresher), interval).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;
    let shutdown = crate::shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            () = &mut shutdown => break,
            line = lines.next_line(), if stdin_open => match line {
                Ok(Some(_)) => {
                    tokio::spawn(Arc::clone(&refresher).refresh("manual"));
                }
                Ok(None) => {
                    tracing::debug!("watch: stdin closed; manual refresh disabled");
                    stdin_open = false;
                }
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        "watch: failed to read stdin; manual refresh disabled"
                    );
                    stdin_open = false;
                }
            },
        }
    }

    scheduler.shutdown().await?;
    Ok(())
}
