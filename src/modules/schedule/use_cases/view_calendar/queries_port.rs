use crate::modules::schedule::adapters::outbound::store::ScheduleFilter;
use crate::modules::schedule::core::work_day::WorkDay;
use crate::modules::schedule::core::work_hours::WorkHoursEntry;
use async_trait::async_trait;

/// Read side used by views. May be served from a cache; writes never consult it.
#[async_trait]
pub trait ScheduleQueries {
    async fn work_days(&self, filter: &ScheduleFilter) -> anyhow::Result<Vec<WorkDay>>;

    async fn work_hours(&self, filter: &ScheduleFilter) -> anyhow::Result<Vec<WorkHoursEntry>>;
}
