use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{EnvFilter, fmt};

use work_schedule::modules::schedule::adapters::outbound::store_in_memory::InMemoryScheduleStore;
use work_schedule::shared::core::clock::{Clock, SystemClock};
use work_schedule::shared::infrastructure::activity_log::in_memory::InMemoryActivityLog;
use work_schedule::shell::config::AppConfig;
use work_schedule::shell::http::app;
use work_schedule::shell::state::AppState;
use work_schedule::shell::workers::spawn_cache_refresher;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // In-memory deps for now
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let state = AppState::new(
        Arc::new(InMemoryScheduleStore::new().with_clock(clock.clone())),
        Arc::new(InMemoryActivityLog::new()),
        clock,
        config.activity_page_size,
    );
    spawn_cache_refresher(state.clone(), Duration::from_secs(config.cache_refresh_secs.max(1)));

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("REST on http://{addr}, GraphQL endpoint: http://{addr}/gql");
    axum::serve(listener, app(state)).await?;
    Ok(())
}
