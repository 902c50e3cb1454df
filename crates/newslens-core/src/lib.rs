pub mod app_config;
pub mod articles;
pub mod config;
pub mod error;
pub mod feed;
pub mod lexicon;

pub use app_config::{AppConfig, Environment};
pub use articles::Article;
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{ConfigError, SourceError};
pub use feed::{parse_feed, ArticleSource, JsonFileSource};
pub use lexicon::{load_lexicon, Lexicon, TopicKeywords, OTHER_CATEGORY};
