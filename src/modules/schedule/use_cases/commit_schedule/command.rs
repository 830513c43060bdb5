use std::collections::BTreeSet;

use chrono::NaiveDate;

/// Staged schedule edits of one employee, ready to be reconciled and applied.
/// Transport independent: built by the edit session, HTTP, or GraphQL alike.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitSchedule {
    pub employee_id: String,
    pub additions: BTreeSet<NaiveDate>,
    pub removals: BTreeSet<NaiveDate>,
    pub notes: Option<String>,
    pub requested_by: String,
}
