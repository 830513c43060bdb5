use serde_json::json;
use uuid::Uuid;

use crate::modules::schedule::core::intents::ScheduleIntent;
use crate::shared::infrastructure::activity_log::{ActivityLog, ActivityLogError, ActivityRow};

fn to_row(
    intent: ScheduleIntent,
    actor: &str,
    occurred_at: i64,
) -> Result<ActivityRow, ActivityLogError> {
    let (action, employee_id, payload) = match intent {
        ScheduleIntent::PublishWorkDaysScheduled { employee_id, dates } => {
            ("WorkDaysScheduled", employee_id, json!({ "dates": dates }))
        }
        ScheduleIntent::PublishWorkDaysUnscheduled { employee_id, dates } => {
            ("WorkDaysUnscheduled", employee_id, json!({ "dates": dates }))
        }
        ScheduleIntent::PublishWorkHoursRecorded { entry } => {
            let employee_id = entry.employee_id.clone();
            ("WorkHoursRecorded", employee_id, serde_json::to_value(entry)?)
        }
        ScheduleIntent::PublishWorkHoursUpdated { entry } => {
            let employee_id = entry.employee_id.clone();
            ("WorkHoursUpdated", employee_id, serde_json::to_value(entry)?)
        }
        ScheduleIntent::PublishWorkHoursDeleted { id, employee_id } => {
            ("WorkHoursDeleted", employee_id, json!({ "id": id }))
        }
    };
    Ok(ActivityRow {
        activity_id: Uuid::now_v7().to_string(),
        action: action.to_string(),
        employee_id,
        actor: actor.to_string(),
        occurred_at,
        payload,
    })
}

/// Translate a list of schedule intents into activity rows and record them.
/// Every row gets a fresh v7 id so rows sort by creation when timestamps tie.
/// Each intent is recorded on its own; the first failure is returned after all of
/// them were tried.
pub async fn dispatch_intents(
    log: &impl ActivityLog,
    actor: &str,
    occurred_at: i64,
    intents: Vec<ScheduleIntent>,
) -> Result<(), ActivityLogError> {
    let mut first_error = None;
    for intent in intents {
        let recorded = match to_row(intent, actor, occurred_at) {
            Ok(row) => log.record(row).await,
            Err(err) => Err(err),
        };
        if let Err(err) = recorded {
            first_error.get_or_insert(err);
        }
    }
    first_error.map_or(Ok(()), Err)
}
