use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Feed dump read by the file-backed article source.
    pub articles_path: PathBuf,
    /// Optional YAML lexicon replacing the built-in word tables.
    pub lexicon_path: Option<PathBuf>,
    pub refresh_interval_secs: u64,
    /// Number of trending topics plotted on the timeline.
    pub timeline_topics: usize,
}
