use crate::shared::infrastructure::activity_log::{
    ActivityFilter, ActivityLog, ActivityLogError, ActivityQueries, ActivityRow,
};
use std::collections::HashSet;
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryActivityLog {
    pub rows: Mutex<Vec<ActivityRow>>,
    seen: Mutex<HashSet<String>>,
    failing_actions: HashSet<String>,
    is_offline: bool,
}

impl InMemoryActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn fail_records_of(&mut self, action: impl Into<String>) {
        self.failing_actions.insert(action.into());
    }
}

#[async_trait::async_trait]
impl ActivityLog for InMemoryActivityLog {
    async fn record(&self, row: ActivityRow) -> Result<(), ActivityLogError> {
        if self.is_offline {
            return Err(ActivityLogError::Backend("Activity log offline".into()));
        }
        if self.failing_actions.contains(&row.action) {
            return Err(ActivityLogError::Backend(format!(
                "Activity log rejected {}",
                row.action
            )));
        }
        {
            let mut seen = self.seen.lock().await;
            if !seen.insert(row.activity_id.clone()) {
                return Err(ActivityLogError::Duplicate {
                    activity_id: row.activity_id,
                });
            }
        }
        self.rows.lock().await.push(row);
        Ok(())
    }
}

#[async_trait::async_trait]
impl ActivityQueries for InMemoryActivityLog {
    async fn list(
        &self,
        filter: &ActivityFilter,
        offset: u64,
        limit: u64,
        sort_by_occurred_at_desc: bool,
    ) -> anyhow::Result<Vec<ActivityRow>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Activity log offline"));
        }

        let mut items: Vec<ActivityRow> = self
            .rows
            .lock()
            .await
            .iter()
            .filter(|row| filter.matches(row))
            .cloned()
            .collect();

        // Stable sort keeps insertion order for rows recorded in the same millisecond.
        items.sort_by_key(|row| row.occurred_at);
        if sort_by_occurred_at_desc {
            items.reverse();
        }

        let start = offset as usize;
        if start >= items.len() {
            return Ok(Vec::new());
        }
        let end = start.saturating_add(limit as usize).min(items.len());
        Ok(items[start..end].to_vec())
    }
}
