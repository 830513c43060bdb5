use async_graphql::{Context, Object, Result as GqlResult};

use crate::shared::infrastructure::activity_log::{ActivityFilter, ActivityRow};
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlActivity {
    pub activity_id: String,
    pub action: String,
    pub employee_id: String,
    pub actor: String,
    pub occurred_at: i64,
    pub payload: async_graphql::Json<serde_json::Value>,
}

impl From<ActivityRow> for GqlActivity {
    fn from(r: ActivityRow) -> Self {
        Self {
            activity_id: r.activity_id,
            action: r.action,
            employee_id: r.employee_id,
            actor: r.actor,
            occurred_at: r.occurred_at,
            payload: async_graphql::Json(r.payload),
        }
    }
}

#[derive(Default)]
pub struct ActivityQuery;

#[Object]
impl ActivityQuery {
    async fn activity(
        &self,
        context: &Context<'_>,
        employee_id: Option<String>,
        action: Option<String>,
        offset: Option<i64>,
        limit: Option<i64>,
        sort_desc: Option<bool>,
    ) -> GqlResult<Vec<GqlActivity>> {
        let state = context.data_unchecked::<AppState>();
        let rows = state
            .activity
            .list(
                &ActivityFilter {
                    employee_id,
                    action,
                },
                offset.unwrap_or(0).max(0) as u64,
                limit.map_or(state.activity_page_size, |l| l.max(0) as u64),
                sort_desc.unwrap_or(true),
            )
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
