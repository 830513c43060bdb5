// Shared test fixture for the CommitSchedule command.

use chrono::NaiveDate;
use std::collections::BTreeSet;

use crate::modules::schedule::use_cases::commit_schedule::command::CommitSchedule;

pub struct CommitScheduleBuilder {
    inner: CommitSchedule,
}

impl Default for CommitScheduleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CommitScheduleBuilder {
    pub fn new() -> Self {
        Self {
            inner: CommitSchedule {
                employee_id: "emp-fixed-0001".to_string(),
                additions: BTreeSet::new(),
                removals: BTreeSet::new(),
                notes: None,
                requested_by: "manager-fixed-0001".to_string(),
            },
        }
    }

    pub fn employee_id(mut self, v: impl Into<String>) -> Self {
        self.inner.employee_id = v.into();
        self
    }

    pub fn add(mut self, date: NaiveDate) -> Self {
        self.inner.additions.insert(date);
        self
    }

    pub fn remove(mut self, date: NaiveDate) -> Self {
        self.inner.removals.insert(date);
        self
    }

    pub fn notes(mut self, v: impl Into<String>) -> Self {
        self.inner.notes = Some(v.into());
        self
    }

    pub fn requested_by(mut self, v: impl Into<String>) -> Self {
        self.inner.requested_by = v.into();
        self
    }

    pub fn build(self) -> CommitSchedule {
        self.inner
    }
}
