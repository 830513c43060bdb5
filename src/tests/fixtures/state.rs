use std::sync::Arc;

use chrono::NaiveDate;

use crate::modules::schedule::adapters::outbound::store_in_memory::InMemoryScheduleStore;
use crate::shared::core::clock::{Clock, FixedClock};
use crate::shared::infrastructure::activity_log::in_memory::InMemoryActivityLog;
use crate::shell::state::AppState;

pub const TEST_PAGE_SIZE: u64 = 20;

/// Today for every state built here.
pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 5).unwrap()
}

pub fn test_clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock::on(test_today()))
}

/// App state over fresh in-memory adapters, returned alongside them for seeding
/// and inspection.
pub fn make_test_state() -> (AppState, Arc<InMemoryScheduleStore>, Arc<InMemoryActivityLog>) {
    let store = Arc::new(InMemoryScheduleStore::new().with_clock(test_clock()));
    let log = Arc::new(InMemoryActivityLog::new());
    let state = AppState::new(store.clone(), log.clone(), test_clock(), TEST_PAGE_SIZE);
    (state, store, log)
}

/// App state over adapters prepared by the caller (offline, failing dates).
pub fn make_state_with(store: InMemoryScheduleStore, log: InMemoryActivityLog) -> AppState {
    AppState::new(Arc::new(store), Arc::new(log), test_clock(), TEST_PAGE_SIZE)
}
