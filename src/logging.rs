use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "CELLFILL_LOG";

/// Installs a fmt subscriber filtered by `CELLFILL_LOG` (default `info`).
///
/// Does nothing if a global subscriber is already set.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
