use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A news article as supplied by an [`crate::ArticleSource`].
///
/// Articles are immutable inputs: classification only ever borrows them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub description: Option<String>,
    pub content: Option<String>,
    pub source_name: String,
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub author: Option<String>,
}

impl Article {
    /// Build an article with only the fields classification reads.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        source_name: impl Into<String>,
        published_at: DateTime<Utc>,
    ) -> Self {
        Self {
            title: title.into(),
            description: None,
            content: None,
            source_name: source_name.into(),
            published_at,
            url: String::new(),
            author: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// `title + " " + description`, used for headline filtering and the
    /// topic timeline. A missing description counts as an empty string.
    #[must_use]
    pub fn headline_text(&self) -> String {
        format!(
            "{} {}",
            self.title,
            self.description.as_deref().unwrap_or_default()
        )
    }

    /// `title + " " + description + " " + content`, used by the corpus-wide
    /// aggregates.
    #[must_use]
    pub fn full_text(&self) -> String {
        format!(
            "{} {} {}",
            self.title,
            self.description.as_deref().unwrap_or_default(),
            self.content.as_deref().unwrap_or_default()
        )
    }

    /// UTC calendar day of publication.
    #[must_use]
    pub fn published_on(&self) -> NaiveDate {
        self.published_at.date_naive()
    }
}
