use chrono::NaiveDate;

use crate::modules::schedule::core::work_hours::WorkHoursEntry;

/// Activity produced by the use case handlers once a mutation went through.
/// The outbound activity_log adapter translates these into ActivityRows.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleIntent {
    PublishWorkDaysScheduled {
        employee_id: String,
        dates: Vec<NaiveDate>,
    },
    PublishWorkDaysUnscheduled {
        employee_id: String,
        dates: Vec<NaiveDate>,
    },
    PublishWorkHoursRecorded {
        entry: WorkHoursEntry,
    },
    PublishWorkHoursUpdated {
        entry: WorkHoursEntry,
    },
    PublishWorkHoursDeleted {
        id: String,
        employee_id: String,
    },
}
