//! Article feed translation.
//!
//! Two JSON response shapes are accepted, both as written to disk by
//! whatever fetches them:
//!
//! ### mediastack `/v1/news`
//! `{"pagination": {...}, "data": [{"source", "author", "title", "description",
//! "url", "image", "published_at", "content"}]}`. Every string field may be
//! `null`. Failures come back as `{"error": {"code", "message"}}`.
//!
//! ### NewsAPI-style
//! `{"status": "ok", "totalResults": n, "articles": [{"source": {"id", "name"},
//! "author", "title", "description", "url", "urlToImage", "publishedAt",
//! "content"}]}`. Failures are `{"status": "error", "code", "message"}`.
//!
//! Missing or empty fields fall back to the dashboard's historical defaults:
//! `"Unknown source"`, `"Unknown author"`, and `""` for title and url.
//! Records whose timestamp is not RFC 3339 are dropped.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::articles::Article;
use crate::error::SourceError;

const UNKNOWN_SOURCE: &str = "Unknown source";
const UNKNOWN_AUTHOR: &str = "Unknown author";

/// Supplies the articles a refresh classifies.
pub trait ArticleSource: Send + Sync {
    /// Human-readable origin, used in log fields.
    fn describe(&self) -> String;

    /// Load the current article set, in feed order.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the articles cannot be read or decoded.
    fn load_articles(&self) -> Result<Vec<Article>, SourceError>;
}

/// Reads a feed dump from a JSON file on every load.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ArticleSource for JsonFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load_articles(&self) -> Result<Vec<Article>, SourceError> {
        let body = std::fs::read_to_string(&self.path).map_err(|e| SourceError::Io {
            path: self.path.display().to_string(),
            source: e,
        })?;
        parse_feed(&body)
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MediastackArticle {
    source: Option<String>,
    author: Option<String>,
    title: Option<String>,
    description: Option<String>,
    url: Option<String>,
    published_at: Option<String>,
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NewsApiSource {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewsApiArticle {
    source: Option<NewsApiSource>,
    author: Option<String>,
    title: Option<String>,
    description: Option<String>,
    url: Option<String>,
    published_at: Option<String>,
    content: Option<String>,
}

// Variant order matters: serde tries each in turn and error payloads must
// win over the looser success shapes.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FeedPayload {
    MediastackError { error: ApiErrorBody },
    NewsApi { articles: Vec<NewsApiArticle> },
    Mediastack { data: Vec<MediastackArticle> },
    NewsApiError { status: String, message: String },
}

/// Decode a feed body into articles.
///
/// # Errors
///
/// Returns [`SourceError::Api`] for provider error payloads and
/// [`SourceError::Parse`] for anything that is not a recognised shape.
pub fn parse_feed(body: &str) -> Result<Vec<Article>, SourceError> {
    let payload: FeedPayload = serde_json::from_str(body)?;

    let raw: Vec<RawArticle> = match payload {
        FeedPayload::MediastackError { error } => {
            let message = error.message.unwrap_or_else(|| "unknown error".to_string());
            return Err(SourceError::Api(match error.code {
                Some(code) => format!("{code}: {message}"),
                None => message,
            }));
        }
        FeedPayload::NewsApiError { status, message } => {
            return Err(SourceError::Api(format!("{status}: {message}")));
        }
        FeedPayload::Mediastack { data } => data
            .into_iter()
            .map(|a| RawArticle {
                source: a.source,
                author: a.author,
                title: a.title,
                description: a.description,
                url: a.url,
                published_at: a.published_at,
                content: a.content,
            })
            .collect(),
        FeedPayload::NewsApi { articles } => articles
            .into_iter()
            .map(|a| RawArticle {
                source: a.source.and_then(|s| s.name),
                author: a.author,
                title: a.title,
                description: a.description,
                url: a.url,
                published_at: a.published_at,
                content: a.content,
            })
            .collect(),
    };

    let total = raw.len();
    let articles: Vec<Article> = raw.into_iter().filter_map(normalize_article).collect();

    if articles.len() < total {
        tracing::warn!(
            total,
            kept = articles.len(),
            "dropped feed records with unparseable timestamps"
        );
    }

    Ok(articles)
}

struct RawArticle {
    source: Option<String>,
    author: Option<String>,
    title: Option<String>,
    description: Option<String>,
    url: Option<String>,
    published_at: Option<String>,
    content: Option<String>,
}

fn normalize_article(raw: RawArticle) -> Option<Article> {
    let non_empty = |s: Option<String>| s.filter(|v| !v.is_empty());

    let Some(published_at) = raw.published_at.as_deref().and_then(parse_timestamp) else {
        tracing::debug!(
            title = raw.title.as_deref().unwrap_or_default(),
            published_at = raw.published_at.as_deref().unwrap_or_default(),
            "skipping article with invalid timestamp"
        );
        return None;
    };

    Some(Article {
        title: raw.title.unwrap_or_default(),
        description: non_empty(raw.description),
        content: non_empty(raw.content),
        source_name: non_empty(raw.source).unwrap_or_else(|| UNKNOWN_SOURCE.to_string()),
        published_at,
        url: raw.url.unwrap_or_default(),
        author: Some(non_empty(raw.author).unwrap_or_else(|| UNKNOWN_AUTHOR.to_string())),
    })
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
