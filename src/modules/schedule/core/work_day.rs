use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::modules::schedule::core::work_hours::{WorkHoursEntry, total_hours};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkDayStatus {
    Scheduled,
    Confirmed,
    Cancelled,
}

/// A scheduled working day, independent of any logged hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkDay {
    pub id: String,
    pub employee_id: String,
    pub date: NaiveDate,
    pub status: WorkDayStatus,
    pub notes: Option<String>,
    pub created_at: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DayStatus {
    Unscheduled,
    ScheduledUnlogged,
    ScheduledLogged,
    Cancelled,
}

/// Classifies a (employee, date) pair for rendering. Entries on a cancelled day are
/// ignored here, not deleted; entries without a work day do not make it scheduled.
pub fn day_status(work_day: Option<&WorkDay>, entries: &[WorkHoursEntry]) -> DayStatus {
    match work_day {
        None => DayStatus::Unscheduled,
        Some(day) if day.status == WorkDayStatus::Cancelled => DayStatus::Cancelled,
        Some(_) if total_hours(entries) > 0.0 => DayStatus::ScheduledLogged,
        Some(_) => DayStatus::ScheduledUnlogged,
    }
}
