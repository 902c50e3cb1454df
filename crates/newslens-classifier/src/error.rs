use newslens_core::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("invalid lexicon: {0}")]
    Lexicon(#[from] ConfigError),

    #[error("failed to compile pattern for '{word}': {source}")]
    Pattern {
        word: String,
        #[source]
        source: regex::Error,
    },
}
