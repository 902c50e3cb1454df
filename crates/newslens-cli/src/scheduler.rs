//! Background refresh scheduler for `newslens watch`.

use std::sync::Arc;
use std::time::Duration;

use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};

use crate::refresh::Refresher;

/// Builds and starts the refresh scheduler.
///
/// Registers one repeated job that refreshes the dashboard every `interval`.
/// The returned [`JobScheduler`] must be kept alive for as long as refreshes
/// should run.
///
/// # Errors
///
/// Returns [`JobSchedulerError`] if the scheduler cannot be initialised,
/// the job cannot be registered, or the scheduler fails to start.
pub(crate) async fn build_scheduler(
    refresher: Arc<Refresher>,
    interval: Duration,
) -> Result<JobScheduler, JobSchedulerError> {
    let scheduler = JobScheduler::new().await?;
    register_refresh_job(&scheduler, refresher, interval).await?;
    scheduler.start().await?;
    Ok(scheduler)
}

async fn register_refresh_job(
    scheduler: &JobScheduler,
    refresher: Arc<Refresher>,
    interval: Duration,
) -> Result<(), JobSchedulerError> {
    let job = Job::new_repeated_async(interval, move |_uuid, _lock| {
        let refresher = Arc::clone(&refresher);

        Box::pin(async move {
            tracing::info!("scheduler: starting periodic refresh");
            refresher.refresh("timer").await;
        })
    })?;

    scheduler.add(job).await?;
    tracing::info!(
        interval_secs = interval.as_secs(),
        "scheduler: registered periodic refresh"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use newslens_classifier::TextClassifier;
    use newslens_core::{Article, ArticleSource, SourceError};

    use super::*;

    struct EmptySource;

    impl ArticleSource for EmptySource {
        fn describe(&self) -> String {
            "empty".to_string()
        }

        fn load_articles(&self) -> Result<Vec<Article>, SourceError> {
            Ok(Vec::new())
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn scheduler_starts_and_shuts_down() {
        let refresher = Arc::new(Refresher::new(
            Arc::new(EmptySource),
            Arc::new(TextClassifier::builtin()),
            3,
        ));
        let mut scheduler = build_scheduler(refresher, Duration::from_secs(3600))
            .await
            .expect("scheduler should start");
        scheduler.shutdown().await.expect("scheduler should stop");
    }
}
