use serde_json::json;

use crate::shared::infrastructure::activity_log::ActivityRow;

pub fn make_activity_row(
    activity_id: &str,
    employee_id: &str,
    action: &str,
    occurred_at: i64,
) -> ActivityRow {
    ActivityRow {
        activity_id: activity_id.to_string(),
        action: action.to_string(),
        employee_id: employee_id.to_string(),
        actor: "manager-fixed-0001".to_string(),
        occurred_at,
        payload: json!({ "dates": ["2025-03-10"] }),
    }
}
