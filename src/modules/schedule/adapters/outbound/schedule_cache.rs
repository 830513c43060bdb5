// Process-wide snapshot of every employee's work days and hours.
//
// Populated by an initial refresh, then kept current by the polling worker in
// shell::workers and by inline refreshes after mutations made through this service.
// Staleness is bounded by the polling interval for changes made by other clients.
// Commits never read from here.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::modules::schedule::adapters::outbound::store::{
    ScheduleFilter, StoreError, WorkDayStore, WorkHoursStore,
};
use crate::modules::schedule::core::work_day::WorkDay;
use crate::modules::schedule::core::work_hours::WorkHoursEntry;
use crate::modules::schedule::use_cases::view_calendar::queries_port::ScheduleQueries;

#[derive(Debug, Clone, Default)]
struct Snapshot {
    work_days: Vec<WorkDay>,
    work_hours: Vec<WorkHoursEntry>,
    refreshed_at: Option<i64>,
}

#[derive(Default)]
pub struct ScheduleCache {
    snapshot: RwLock<Snapshot>,
}

impl ScheduleCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the snapshot with a full read of the store. On failure the previous
    /// snapshot stays in place.
    pub async fn refresh<TStore>(&self, store: &TStore, now_millis: i64) -> Result<(), StoreError>
    where
        TStore: WorkDayStore + WorkHoursStore,
    {
        let all = ScheduleFilter::default();
        let work_days = store.list_work_days(&all).await?;
        let work_hours = store.list_work_hours(&all).await?;
        debug!(
            work_days = work_days.len(),
            work_hours = work_hours.len(),
            "schedule cache refreshed"
        );
        *self.snapshot.write().await = Snapshot {
            work_days,
            work_hours,
            refreshed_at: Some(now_millis),
        };
        Ok(())
    }

    pub async fn refreshed_at(&self) -> Option<i64> {
        self.snapshot.read().await.refreshed_at
    }
}

#[async_trait]
impl ScheduleQueries for ScheduleCache {
    async fn work_days(&self, filter: &ScheduleFilter) -> anyhow::Result<Vec<WorkDay>> {
        Ok(self
            .snapshot
            .read()
            .await
            .work_days
            .iter()
            .filter(|day| filter.matches(&day.employee_id, day.date))
            .cloned()
            .collect())
    }

    async fn work_hours(&self, filter: &ScheduleFilter) -> anyhow::Result<Vec<WorkHoursEntry>> {
        Ok(self
            .snapshot
            .read()
            .await
            .work_hours
            .iter()
            .filter(|entry| filter.matches(&entry.employee_id, entry.date))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod schedule_cache_tests {
    use super::*;
    use crate::modules::schedule::adapters::outbound::store_in_memory::InMemoryScheduleStore;
    use crate::tests::fixtures::work_day::make_work_day;
    use crate::tests::fixtures::work_hours::WorkHoursEntryBuilder;
    use chrono::NaiveDate;
    use rstest::rstest;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_be_empty_before_the_first_refresh() {
        let cache = ScheduleCache::new();
        assert_eq!(cache.refreshed_at().await, None);
        assert!(cache.work_days(&ScheduleFilter::default()).await.unwrap().is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_serve_the_refreshed_snapshot() {
        let store = InMemoryScheduleStore::new();
        store.seed_work_day(make_work_day("emp-1", date(10))).await;
        store.seed_work_day(make_work_day("emp-2", date(11))).await;
        store
            .create_work_hours(WorkHoursEntryBuilder::new().employee_id("emp-1").build())
            .await
            .unwrap();

        let cache = ScheduleCache::new();
        cache.refresh(&store, 7).await.unwrap();

        assert_eq!(cache.refreshed_at().await, Some(7));
        let days = cache
            .work_days(&ScheduleFilter::for_employee("emp-1"))
            .await
            .unwrap();
        assert_eq!(days.len(), 1);
        let hours = cache
            .work_hours(&ScheduleFilter::for_employee("emp-2"))
            .await
            .unwrap();
        assert!(hours.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_keep_the_old_snapshot_when_the_store_is_offline() {
        let mut store = InMemoryScheduleStore::new();
        store.seed_work_day(make_work_day("emp-1", date(10))).await;
        let cache = ScheduleCache::new();
        cache.refresh(&store, 1).await.unwrap();

        store.toggle_offline();
        assert!(cache.refresh(&store, 2).await.is_err());
        assert_eq!(cache.refreshed_at().await, Some(1));
        assert_eq!(
            cache.work_days(&ScheduleFilter::default()).await.unwrap().len(),
            1
        );
    }
}
