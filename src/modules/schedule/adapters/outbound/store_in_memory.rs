// In memory work day and work hours store.
//
// Purpose
// - Exercise the commit executor and recording handlers without a database.
//
// Responsibilities
// - Reject a second work day for the same (employee, date), like a unique index.
// - Simulate an unreachable backend (`toggle_offline`) and single failing dates
//   (`fail_writes_on`) for per-item error handling.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::modules::schedule::adapters::outbound::store::{
    ScheduleFilter, StoreError, WorkDayStore, WorkHoursStore,
};
use crate::modules::schedule::core::work_day::{WorkDay, WorkDayStatus};
use crate::modules::schedule::core::work_hours::WorkHoursEntry;
use crate::modules::schedule::use_cases::view_calendar::queries_port::ScheduleQueries;
use crate::shared::core::clock::{Clock, SystemClock};

pub struct InMemoryScheduleStore {
    work_days: RwLock<HashMap<String, WorkDay>>,
    work_hours: RwLock<HashMap<String, WorkHoursEntry>>,
    failing_dates: HashSet<NaiveDate>,
    is_offline: bool,
    clock: Arc<dyn Clock>,
}

impl Default for InMemoryScheduleStore {
    fn default() -> Self {
        Self {
            work_days: RwLock::default(),
            work_hours: RwLock::default(),
            failing_dates: HashSet::new(),
            is_offline: false,
            clock: Arc::new(SystemClock),
        }
    }
}

impl InMemoryScheduleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamps `created_at` of new work days from `clock`.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn fail_writes_on(&mut self, date: NaiveDate) {
        self.failing_dates.insert(date);
    }

    pub async fn seed_work_day(&self, work_day: WorkDay) {
        self.work_days
            .write()
            .await
            .insert(work_day.id.clone(), work_day);
    }

    fn check_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Schedule store offline".into()));
        }
        Ok(())
    }

    fn check_writable(&self, date: NaiveDate) -> Result<(), StoreError> {
        self.check_online()?;
        if self.failing_dates.contains(&date) {
            return Err(StoreError::Backend(format!("write rejected for {date}")));
        }
        Ok(())
    }
}

#[async_trait]
impl WorkDayStore for InMemoryScheduleStore {
    async fn list_work_days(&self, filter: &ScheduleFilter) -> Result<Vec<WorkDay>, StoreError> {
        self.check_online()?;
        let mut days: Vec<WorkDay> = self
            .work_days
            .read()
            .await
            .values()
            .filter(|day| filter.matches(&day.employee_id, day.date))
            .cloned()
            .collect();
        days.sort_by(|a, b| (a.date, &a.employee_id).cmp(&(b.date, &b.employee_id)));
        Ok(days)
    }

    async fn create_work_days(
        &self,
        employee_id: &str,
        dates: &[NaiveDate],
        notes: Option<&str>,
    ) -> Vec<Result<WorkDay, StoreError>> {
        let mut guard = self.work_days.write().await;
        let mut results = Vec::with_capacity(dates.len());
        for date in dates {
            if let Err(err) = self.check_writable(*date) {
                results.push(Err(err));
                continue;
            }
            let taken = guard
                .values()
                .any(|day| day.employee_id == employee_id && day.date == *date);
            if taken {
                results.push(Err(StoreError::Duplicate {
                    employee_id: employee_id.to_string(),
                    date: *date,
                }));
                continue;
            }
            let day = WorkDay {
                id: Uuid::now_v7().to_string(),
                employee_id: employee_id.to_string(),
                date: *date,
                status: WorkDayStatus::Scheduled,
                notes: notes.map(str::to_string),
                created_at: self.clock.now_millis(),
            };
            guard.insert(day.id.clone(), day.clone());
            results.push(Ok(day));
        }
        results
    }

    async fn delete_work_day(&self, id: &str) -> Result<(), StoreError> {
        self.check_online()?;
        let mut guard = self.work_days.write().await;
        let date = guard
            .get(id)
            .map(|day| day.date)
            .ok_or_else(|| StoreError::NotFound {
                kind: "work day",
                id: id.to_string(),
            })?;
        self.check_writable(date)?;
        guard.remove(id);
        Ok(())
    }
}

#[async_trait]
impl WorkHoursStore for InMemoryScheduleStore {
    async fn list_work_hours(
        &self,
        filter: &ScheduleFilter,
    ) -> Result<Vec<WorkHoursEntry>, StoreError> {
        self.check_online()?;
        let mut entries: Vec<WorkHoursEntry> = self
            .work_hours
            .read()
            .await
            .values()
            .filter(|entry| filter.matches(&entry.employee_id, entry.date))
            .cloned()
            .collect();
        entries.sort_by(|a, b| (a.date, a.start_time).cmp(&(b.date, b.start_time)));
        Ok(entries)
    }

    async fn create_work_hours(&self, entry: WorkHoursEntry) -> Result<WorkHoursEntry, StoreError> {
        self.check_writable(entry.date)?;
        self.work_hours
            .write()
            .await
            .insert(entry.id.clone(), entry.clone());
        Ok(entry)
    }

    async fn update_work_hours(
        &self,
        id: &str,
        entry: WorkHoursEntry,
    ) -> Result<WorkHoursEntry, StoreError> {
        self.check_writable(entry.date)?;
        let mut guard = self.work_hours.write().await;
        let slot = guard.get_mut(id).ok_or_else(|| StoreError::NotFound {
            kind: "work hours entry",
            id: id.to_string(),
        })?;
        *slot = WorkHoursEntry {
            id: id.to_string(),
            created_at: slot.created_at,
            ..entry
        };
        Ok(slot.clone())
    }

    async fn delete_work_hours(&self, id: &str) -> Result<(), StoreError> {
        self.check_online()?;
        self.work_hours
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound {
                kind: "work hours entry",
                id: id.to_string(),
            })
    }
}

#[async_trait]
impl ScheduleQueries for InMemoryScheduleStore {
    async fn work_days(&self, filter: &ScheduleFilter) -> anyhow::Result<Vec<WorkDay>> {
        Ok(self.list_work_days(filter).await?)
    }

    async fn work_hours(&self, filter: &ScheduleFilter) -> anyhow::Result<Vec<WorkHoursEntry>> {
        Ok(self.list_work_hours(filter).await?)
    }
}
