use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::{app_config::AppConfig, database_config, scheduler_config::SchedulerConfig};
use setup::{dependency_injection::DependencyContainer, scheduler, server::Server};

/// REST API Entry Point
///
/// Initializes the application, wires dependencies, starts the currency
/// refresh scheduler, and runs the HTTP server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Initialize database
    let pool = database_config::init_database().await?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(pool).await?;

    // 6. Start the scheduled currency refresh
    let scheduler_config = SchedulerConfig::from_env();
    let _scheduler =
        scheduler::start(&scheduler_config.cron, container.refresh_use_case.clone()).await?;

    // 7. Run server
    Server::run(config, container).await?;

    Ok(())
}
