use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::core::primitives::hh_mm;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HoursError {
    #[error("end time must be after start time")]
    InvalidInterval,
}

/// One logged shift. `total_hours` is derived once at write time and stored with the
/// entry so aggregation never recomputes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkHoursEntry {
    pub id: String,
    pub employee_id: String,
    pub date: NaiveDate,
    #[serde(with = "hh_mm")]
    pub start_time: NaiveTime,
    #[serde(with = "hh_mm")]
    pub end_time: NaiveTime,
    pub break_minutes: u32,
    pub total_hours: f64,
    pub notes: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

pub fn round_hours(hours: f64) -> f64 {
    (hours * 100.0).round() / 100.0
}

/// Hours worked between `start` and `end` minus the break. A break longer than the
/// shift zeroes the shift instead of going negative.
pub fn compute_entry_hours(
    start: NaiveTime,
    end: NaiveTime,
    break_minutes: u32,
) -> Result<f64, HoursError> {
    if end <= start {
        return Err(HoursError::InvalidInterval);
    }
    let worked = ((end - start).num_minutes() - i64::from(break_minutes)).max(0);
    Ok(round_hours(worked as f64 / 60.0))
}

pub fn total_hours(entries: &[WorkHoursEntry]) -> f64 {
    let sum: f64 = entries.iter().map(|entry| entry.total_hours).sum();
    round_hours(sum.max(0.0))
}
