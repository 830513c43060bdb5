// Shared test fixture for the RecordWorkHours command.

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use std::fs;

use crate::modules::schedule::use_cases::record_work_hours::command::RecordWorkHours;
use crate::shared::core::primitives::hh_mm;

const FIXTURE: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/src/tests/fixtures/commands/json/record_work_hours.json"
);

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct RecordWorkHoursDto {
    pub employee_id: String,
    pub date: NaiveDate,
    #[serde(with = "hh_mm")]
    pub start_time: NaiveTime,
    #[serde(with = "hh_mm")]
    pub end_time: NaiveTime,
    pub break_minutes: u32,
    pub notes: Option<String>,
}

pub struct RecordWorkHoursBuilder {
    inner: RecordWorkHours,
}

impl Default for RecordWorkHoursBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RecordWorkHoursBuilder {
    pub fn new() -> Self {
        let json_str = fs::read_to_string(FIXTURE).unwrap();
        let dto: RecordWorkHoursDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: RecordWorkHours {
                employee_id: dto.employee_id,
                date: dto.date,
                start_time: dto.start_time,
                end_time: dto.end_time,
                break_minutes: dto.break_minutes,
                notes: dto.notes,
                requested_by: "manager-fixed-0001".to_string(),
            },
        }
    }

    pub fn employee_id(mut self, v: impl Into<String>) -> Self {
        self.inner.employee_id = v.into();
        self
    }

    pub fn date(mut self, v: NaiveDate) -> Self {
        self.inner.date = v;
        self
    }

    pub fn start_time(mut self, v: NaiveTime) -> Self {
        self.inner.start_time = v;
        self
    }

    pub fn end_time(mut self, v: NaiveTime) -> Self {
        self.inner.end_time = v;
        self
    }

    pub fn break_minutes(mut self, v: u32) -> Self {
        self.inner.break_minutes = v;
        self
    }

    pub fn requested_by(mut self, v: impl Into<String>) -> Self {
        self.inner.requested_by = v.into();
        self
    }

    pub fn build(self) -> RecordWorkHours {
        self.inner
    }
}

#[cfg(test)]
mod record_work_hours_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = RecordWorkHoursBuilder::default().build();
        assert_eq!(built.employee_id, "emp-fixed-0001");
        assert_eq!(built.date, NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
        assert_eq!(built.start_time, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(built.end_time, NaiveTime::from_hms_opt(17, 0, 0).unwrap());
        assert_eq!(built.break_minutes, 0);
        assert_eq!(built.notes.as_deref(), Some("front desk"));
        assert_eq!(built.requested_by, "manager-fixed-0001");
    }
}
