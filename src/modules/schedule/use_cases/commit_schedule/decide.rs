// Validation run before the store is touched. A rejected commit changes nothing.

use chrono::NaiveDate;

use crate::modules::schedule::use_cases::commit_schedule::command::CommitSchedule;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("no employee selected")]
    MissingEmployee,

    #[error("no dates staged")]
    NothingStaged,

    #[error("date {0} is in the past")]
    PastDate(NaiveDate),
}

pub fn validate_commit(command: &CommitSchedule, today: NaiveDate) -> Result<(), DecideError> {
    if command.employee_id.trim().is_empty() {
        return Err(DecideError::MissingEmployee);
    }
    if command.additions.is_empty() && command.removals.is_empty() {
        return Err(DecideError::NothingStaged);
    }
    let earliest = command
        .additions
        .iter()
        .chain(command.removals.iter())
        .min()
        .copied();
    match earliest {
        Some(date) if date < today => Err(DecideError::PastDate(date)),
        _ => Ok(()),
    }
}
