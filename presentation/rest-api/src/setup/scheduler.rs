use std::sync::Arc;

use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::info;

use business::domain::currency::use_cases::refresh::RefreshCurrencyRateUseCase;

/// Registers and starts the cron job that refreshes the currency cache.
///
/// The job itself never fails: the refresh use case absorbs and logs any
/// populate error, so a failed tick only means the cache keeps its previous
/// value until the next one.
pub async fn start(
    cron: &str,
    refresh_use_case: Arc<dyn RefreshCurrencyRateUseCase>,
) -> anyhow::Result<JobScheduler> {
    info!(target: "Catalog -- ", "Starting currency refresh scheduler with cron {}", cron);

    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(cron, move |_uuid, _lock| {
        let refresh_use_case = refresh_use_case.clone();
        Box::pin(async move {
            refresh_use_case.execute().await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    Ok(scheduler)
}
