mod commands;
mod refresh;
mod scheduler;
mod state;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use newslens_classifier::SentimentBucket;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "newslens")]
#[command(about = "Keyword sentiment and topic analysis for news feeds")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the full dashboard snapshot as JSON
    Analyze {
        /// Feed dump to read (defaults to `NEWSLENS_ARTICLES_PATH`)
        #[arg(long)]
        articles: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// List headlines, optionally restricted to one sentiment bucket
    Headlines {
        /// Feed dump to read (defaults to `NEWSLENS_ARTICLES_PATH`)
        #[arg(long)]
        articles: Option<PathBuf>,

        /// Only show positive, neutral, or negative headlines
        #[arg(long)]
        bucket: Option<SentimentBucket>,

        /// Maximum number of headlines to print
        #[arg(long, default_value_t = commands::DEFAULT_HEADLINE_LIMIT)]
        limit: usize,
    },
    /// Score a piece of text
    Score {
        text: String,
    },
    /// List the topics a piece of text matches
    Topics {
        text: String,
    },
    /// Refresh the dashboard on a timer and whenever a line is entered
    Watch {
        /// Feed dump to read (defaults to `NEWSLENS_ARTICLES_PATH`)
        #[arg(long)]
        articles: Option<PathBuf>,

        /// Seconds between refreshes (defaults to `NEWSLENS_REFRESH_INTERVAL_SECS`)
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        interval_secs: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = newslens_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let classifier = commands::build_classifier(&config)?;

    match cli.command {
        Some(Commands::Analyze { articles, pretty }) => {
            commands::run_analyze(&config, &classifier, articles, pretty)?;
        }
        Some(Commands::Headlines {
            articles,
            bucket,
            limit,
        }) => {
            commands::run_headlines(&config, &classifier, articles, bucket, limit)?;
        }
        Some(Commands::Score { text }) => commands::run_score(&classifier, &text),
        Some(Commands::Topics { text }) => commands::run_topics(&classifier, &text),
        Some(Commands::Watch {
            articles,
            interval_secs,
        }) => {
            commands::run_watch(config, classifier, articles, interval_secs).await?;
        }
        None => println!("newslens: no command given; see `newslens --help`"),
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, stopping refreshes");
}
