use chrono::{NaiveDate, NaiveTime};

/// A shift to log for one employee. Also used to replace an existing entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordWorkHours {
    pub employee_id: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub break_minutes: u32,
    pub notes: Option<String>,
    pub requested_by: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteWorkHours {
    pub id: String,
    pub employee_id: String,
    pub requested_by: String,
}
