use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, warn};

use crate::shell::state::AppState;

/// Refreshes the schedule cache every `period`. The first tick fires immediately so
/// the cache is warm before the first request. Failed refreshes keep the previous
/// snapshot and are retried on the next tick.
pub fn spawn_cache_refresher(state: AppState, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            match state.refresh_cache().await {
                Ok(()) => debug!("schedule cache polled"),
                Err(err) => warn!(error = %err, "schedule cache refresh failed"),
            }
        }
    })
}
