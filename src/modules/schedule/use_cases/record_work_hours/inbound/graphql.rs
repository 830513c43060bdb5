use async_graphql::{Context, Object, Result as GqlResult};
use tracing::warn;

use crate::modules::schedule::adapters::outbound::store::ScheduleFilter;
use crate::modules::schedule::core::work_hours::WorkHoursEntry;
use crate::modules::schedule::use_cases::record_work_hours::command::RecordWorkHours;
use crate::shared::core::primitives::{format_date, format_time, parse_date, parse_time};
use crate::shell::state::{Actor, AppState};

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlWorkHoursEntry {
    pub id: String,
    pub employee_id: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub break_minutes: u32,
    pub total_hours: f64,
    pub notes: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<WorkHoursEntry> for GqlWorkHoursEntry {
    fn from(e: WorkHoursEntry) -> Self {
        Self {
            id: e.id,
            employee_id: e.employee_id,
            date: format_date(e.date),
            start_time: format_time(e.start_time),
            end_time: format_time(e.end_time),
            break_minutes: e.break_minutes,
            total_hours: e.total_hours,
            notes: e.notes,
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

fn gql_error(e: impl std::fmt::Display) -> async_graphql::Error {
    async_graphql::Error::new(e.to_string())
}

#[derive(Default)]
pub struct WorkHoursQuery;

#[Object]
impl WorkHoursQuery {
    async fn work_hours(
        &self,
        context: &Context<'_>,
        employee_id: Option<String>,
        from: Option<String>,
        to: Option<String>,
    ) -> GqlResult<Vec<GqlWorkHoursEntry>> {
        let state = context.data_unchecked::<AppState>();
        let filter = ScheduleFilter {
            employee_id,
            from: from.as_deref().map(parse_date).transpose().map_err(gql_error)?,
            to: to.as_deref().map(parse_date).transpose().map_err(gql_error)?,
        };
        let entries = state.queries.work_hours(&filter).await?;
        Ok(entries.into_iter().map(Into::into).collect())
    }
}

#[derive(Default)]
pub struct WorkHoursMutation;

#[Object]
impl WorkHoursMutation {
    #[allow(clippy::too_many_arguments)]
    async fn record_work_hours(
        &self,
        context: &Context<'_>,
        employee_id: String,
        date: String,
        start_time: String,
        end_time: String,
        break_minutes: Option<u32>,
        notes: Option<String>,
    ) -> GqlResult<GqlWorkHoursEntry> {
        let state = context.data_unchecked::<AppState>();
        let actor = context.data_opt::<Actor>().cloned().unwrap_or_default();

        let command = RecordWorkHours {
            employee_id,
            date: parse_date(&date).map_err(gql_error)?,
            start_time: parse_time(&start_time).map_err(gql_error)?,
            end_time: parse_time(&end_time).map_err(gql_error)?,
            break_minutes: break_minutes.unwrap_or(0),
            notes,
            requested_by: actor.0,
        };

        let entry = state
            .record_handler
            .register(command)
            .await
            .map_err(gql_error)?;

        // Inline refresh so queries see the new row immediately
        if let Err(err) = state.refresh_cache().await {
            warn!(error = %err, "schedule cache refresh failed");
        }

        Ok(entry.into())
    }
}
