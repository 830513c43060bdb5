use std::sync::Arc;

use axum::http::HeaderMap;

use crate::modules::schedule::adapters::outbound::schedule_cache::ScheduleCache;
use crate::modules::schedule::adapters::outbound::store::StoreError;
use crate::modules::schedule::adapters::outbound::store_in_memory::InMemoryScheduleStore;
use crate::modules::schedule::use_cases::commit_schedule::handler::CommitScheduleHandler;
use crate::modules::schedule::use_cases::edit_schedule::handler::EditScheduleHandler;
use crate::modules::schedule::use_cases::record_work_hours::handler::RecordWorkHoursHandler;
use crate::modules::schedule::use_cases::view_calendar::queries_port::ScheduleQueries;
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::activity_log::ActivityQueries;
use crate::shared::infrastructure::activity_log::in_memory::InMemoryActivityLog;

pub const ACTOR_HEADER: &str = "x-user-id";

/// Who asked for a change. Read from `x-user-id`; requests without it are anonymous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor(pub String);

impl Default for Actor {
    fn default() -> Self {
        Self("anonymous".to_string())
    }
}

impl Actor {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        headers
            .get(ACTOR_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(|value| Self(value.to_string()))
            .unwrap_or_default()
    }
}

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<InMemoryScheduleStore>,
    pub cache: Arc<ScheduleCache>,
    pub queries: Arc<dyn ScheduleQueries + Send + Sync>,
    pub activity: Arc<dyn ActivityQueries + Send + Sync>,
    pub commit_handler: Arc<CommitScheduleHandler<InMemoryScheduleStore, InMemoryActivityLog>>,
    pub record_handler: Arc<RecordWorkHoursHandler<InMemoryScheduleStore, InMemoryActivityLog>>,
    pub edit_handler: Arc<EditScheduleHandler<InMemoryScheduleStore, InMemoryActivityLog>>,
    pub clock: Arc<dyn Clock>,
    pub activity_page_size: u64,
}

impl AppState {
    pub fn new(
        store: Arc<InMemoryScheduleStore>,
        activity_log: Arc<InMemoryActivityLog>,
        clock: Arc<dyn Clock>,
        activity_page_size: u64,
    ) -> Self {
        let cache = Arc::new(ScheduleCache::new());
        let commit_handler = Arc::new(CommitScheduleHandler::new(
            store.clone(),
            activity_log.clone(),
            clock.clone(),
        ));
        let record_handler = Arc::new(RecordWorkHoursHandler::new(
            store.clone(),
            activity_log.clone(),
            clock.clone(),
        ));
        let edit_handler = Arc::new(EditScheduleHandler::new(
            cache.clone(),
            commit_handler.clone(),
            clock.clone(),
        ));
        Self {
            store,
            queries: cache.clone(),
            cache,
            activity: activity_log,
            commit_handler,
            record_handler,
            edit_handler,
            clock,
            activity_page_size,
        }
    }

    pub async fn refresh_cache(&self) -> Result<(), StoreError> {
        self.cache
            .refresh(self.store.as_ref(), self.clock.now_millis())
            .await
    }
}
