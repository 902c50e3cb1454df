use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read lexicon file {path}: {source}")]
    LexiconFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse lexicon file: {0}")]
    LexiconFileParse(#[from] serde_yaml::Error),

    #[error("lexicon validation failed: {0}")]
    Validation(String),
}

/// Errors returned while loading articles from an [`crate::ArticleSource`].
#[derive(Debug, Error)]
pub enum SourceError {
    /// The feed file could not be read.
    #[error("failed to read article feed {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The feed body is not one of the supported JSON shapes.
    #[error("JSON deserialization error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The feed provider reported an error instead of articles.
    #[error("news API error: {0}")]
    Api(String),
}
