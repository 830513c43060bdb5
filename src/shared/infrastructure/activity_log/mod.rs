use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value as Json;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRow {
    pub activity_id: String,
    pub action: String,
    pub employee_id: String,
    pub actor: String,
    pub occurred_at: i64,
    pub payload: Json,
}

#[derive(Debug, Error)]
pub enum ActivityLogError {
    #[error("duplicate activity row {activity_id}")]
    Duplicate { activity_id: String },

    #[error("payload serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ActivityFilter {
    pub employee_id: Option<String>,
    pub action: Option<String>,
}

impl ActivityFilter {
    pub fn matches(&self, row: &ActivityRow) -> bool {
        self.employee_id
            .as_deref()
            .is_none_or(|employee_id| row.employee_id == employee_id)
            && self.action.as_deref().is_none_or(|action| row.action == action)
    }
}

#[async_trait]
pub trait ActivityLog: Send + Sync {
    async fn record(&self, row: ActivityRow) -> Result<(), ActivityLogError>;
}

#[async_trait]
pub trait ActivityQueries {
    async fn list(
        &self,
        filter: &ActivityFilter,
        offset: u64,
        limit: u64,
        sort_by_occurred_at_desc: bool,
    ) -> anyhow::Result<Vec<ActivityRow>>;
}

pub mod in_memory;
