// Shared test fixture for WorkHoursEntry, seeded from json/work_hours_entry.json.

use chrono::{NaiveDate, NaiveTime};
use std::fs;

use crate::modules::schedule::core::work_hours::WorkHoursEntry;

const FIXTURE: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/src/tests/fixtures/json/work_hours_entry.json"
);

pub struct WorkHoursEntryBuilder {
    inner: WorkHoursEntry,
}

impl Default for WorkHoursEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl WorkHoursEntryBuilder {
    pub fn new() -> Self {
        let json_str = fs::read_to_string(FIXTURE).unwrap();
        Self {
            inner: serde_json::from_str(&json_str).unwrap(),
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn employee_id(mut self, v: impl Into<String>) -> Self {
        self.inner.employee_id = v.into();
        self
    }

    pub fn date(mut self, v: NaiveDate) -> Self {
        self.inner.date = v;
        self
    }

    pub fn times(mut self, start: NaiveTime, end: NaiveTime) -> Self {
        self.inner.start_time = start;
        self.inner.end_time = end;
        self
    }

    pub fn total_hours(mut self, v: f64) -> Self {
        self.inner.total_hours = v;
        self
    }

    pub fn build(self) -> WorkHoursEntry {
        self.inner
    }
}

#[cfg(test)]
mod work_hours_entry_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = WorkHoursEntryBuilder::default().build();
        assert_eq!(built.id, "wh-fixed-0001");
        assert_eq!(built.employee_id, "emp-fixed-0001");
        assert_eq!(built.date, NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
        assert_eq!(built.start_time, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(built.total_hours, 8.0);
        assert_eq!(built.notes, None);
    }

    #[rstest]
    fn setters_override_fields() {
        let date = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
        let start = NaiveTime::from_hms_opt(6, 0, 0).unwrap();
        let end = NaiveTime::from_hms_opt(7, 0, 0).unwrap();
        let built = WorkHoursEntryBuilder::new()
            .id("wh-9")
            .employee_id("emp-9")
            .date(date)
            .times(start, end)
            .total_hours(1.0)
            .build();
        assert_eq!(built.id, "wh-9");
        assert_eq!(built.employee_id, "emp-9");
        assert_eq!(built.date, date);
        assert_eq!((built.start_time, built.end_time), (start, end));
        assert_eq!(built.total_hours, 1.0);
    }
}
