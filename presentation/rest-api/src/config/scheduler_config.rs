use std::env;

/// Configuration for the currency cache refresh scheduler
#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    pub cron: String,
    /// Refresh is opt-in: anything other than an explicit "true" disables it.
    pub enabled: bool,
}

impl SchedulerConfig {
    /// Load scheduler configuration from environment variables
    ///
    /// Environment variables:
    /// - SCHEDULER_CRON: Cron expression for the refresh job (default: hourly)
    /// - SCHEDULER_ENABLED: "true" to enable the refresh (default: false)
    pub fn from_env() -> Self {
        let cron = env::var("SCHEDULER_CRON").unwrap_or_else(|_| "0 0 * * * *".to_string());
        let enabled = parse_enabled(env::var("SCHEDULER_ENABLED").ok());

        Self { cron, enabled }
    }
}

fn parse_enabled(value: Option<String>) -> bool {
    value
        .map(|value| value.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}
