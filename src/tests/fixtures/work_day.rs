use chrono::NaiveDate;

use crate::modules::schedule::core::work_day::{WorkDay, WorkDayStatus};

/// A scheduled work day with an id derived from its key, so seeding the same
/// (employee, date) twice in a test is visible.
pub fn make_work_day(employee_id: &str, date: NaiveDate) -> WorkDay {
    WorkDay {
        id: format!("wd-{employee_id}-{date}"),
        employee_id: employee_id.to_string(),
        date,
        status: WorkDayStatus::Scheduled,
        notes: None,
        created_at: 1_741_564_800_000,
    }
}
