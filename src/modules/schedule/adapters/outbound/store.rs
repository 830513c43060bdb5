// Ports to the external object store holding work days and work hours.
//
// Every call may fail independently. `create_work_days` answers per date so one bad
// date never hides the outcome of its siblings.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use crate::modules::schedule::core::work_day::WorkDay;
use crate::modules::schedule::core::work_hours::WorkHoursEntry;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: String },

    #[error("work day already exists for {employee_id} on {date}")]
    Duplicate { employee_id: String, date: NaiveDate },

    #[error("backend error: {0}")]
    Backend(String),
}

/// Optional employee plus an inclusive date range. Empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ScheduleFilter {
    pub employee_id: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl ScheduleFilter {
    pub fn for_employee(employee_id: impl Into<String>) -> Self {
        Self {
            employee_id: Some(employee_id.into()),
            ..Self::default()
        }
    }

    pub fn between(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.from = Some(from);
        self.to = Some(to);
        self
    }

    pub fn matches(&self, employee_id: &str, date: NaiveDate) -> bool {
        self.employee_id.as_deref().is_none_or(|id| id == employee_id)
            && self.from.is_none_or(|from| date >= from)
            && self.to.is_none_or(|to| date <= to)
    }
}

#[async_trait]
pub trait WorkDayStore: Send + Sync {
    async fn list_work_days(&self, filter: &ScheduleFilter) -> Result<Vec<WorkDay>, StoreError>;

    async fn create_work_days(
        &self,
        employee_id: &str,
        dates: &[NaiveDate],
        notes: Option<&str>,
    ) -> Vec<Result<WorkDay, StoreError>>;

    async fn delete_work_day(&self, id: &str) -> Result<(), StoreError>;
}

#[async_trait]
pub trait WorkHoursStore: Send + Sync {
    async fn list_work_hours(
        &self,
        filter: &ScheduleFilter,
    ) -> Result<Vec<WorkHoursEntry>, StoreError>;

    async fn create_work_hours(&self, entry: WorkHoursEntry) -> Result<WorkHoursEntry, StoreError>;

    async fn update_work_hours(
        &self,
        id: &str,
        entry: WorkHoursEntry,
    ) -> Result<WorkHoursEntry, StoreError>;

    async fn delete_work_hours(&self, id: &str) -> Result<(), StoreError>;
}
