use thiserror::Error;

use crate::modules::schedule::core::work_hours::{HoursError, WorkHoursEntry, compute_entry_hours};
use crate::modules::schedule::use_cases::record_work_hours::command::RecordWorkHours;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("no employee selected")]
    MissingEmployee,

    #[error(transparent)]
    Hours(#[from] HoursError),
}

/// Turns a validated command into the entry to persist, with `total_hours` derived
/// here and nowhere else.
pub fn decide_record(
    command: RecordWorkHours,
    id: String,
    now_millis: i64,
) -> Result<WorkHoursEntry, DecideError> {
    if command.employee_id.trim().is_empty() {
        return Err(DecideError::MissingEmployee);
    }
    let total_hours =
        compute_entry_hours(command.start_time, command.end_time, command.break_minutes)?;
    Ok(WorkHoursEntry {
        id,
        employee_id: command.employee_id,
        date: command.date,
        start_time: command.start_time,
        end_time: command.end_time,
        break_minutes: command.break_minutes,
        total_hours,
        notes: command.notes,
        created_at: now_millis,
        updated_at: now_millis,
    })
}
