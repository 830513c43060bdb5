use std::collections::BTreeSet;

use async_graphql::{Context, Object, Result as GqlResult};
use chrono::NaiveDate;
use tracing::warn;

use crate::modules::schedule::use_cases::commit_schedule::command::CommitSchedule;
use crate::modules::schedule::use_cases::commit_schedule::handler::{CommitSummary, DateFailure};
use crate::shared::core::primitives::{format_date, parse_date};
use crate::shell::state::{Actor, AppState};

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlDateFailure {
    pub date: String,
    pub reason: String,
}

impl From<DateFailure> for GqlDateFailure {
    fn from(f: DateFailure) -> Self {
        Self {
            date: format_date(f.date),
            reason: f.reason,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlCommitSummary {
    pub created: Vec<String>,
    pub deleted: Vec<String>,
    pub skipped: Vec<String>,
    pub failed_creates: Vec<GqlDateFailure>,
    pub failed_deletes: Vec<GqlDateFailure>,
    pub complete: bool,
}

impl From<CommitSummary> for GqlCommitSummary {
    fn from(s: CommitSummary) -> Self {
        let complete = s.is_complete();
        let dates = |list: Vec<NaiveDate>| list.into_iter().map(format_date).collect();
        Self {
            created: dates(s.created),
            deleted: dates(s.deleted),
            skipped: dates(s.skipped),
            failed_creates: s.failed_creates.into_iter().map(Into::into).collect(),
            failed_deletes: s.failed_deletes.into_iter().map(Into::into).collect(),
            complete,
        }
    }
}

fn parse_dates(raw: &[String]) -> GqlResult<BTreeSet<NaiveDate>> {
    raw.iter()
        .map(|value| parse_date(value).map_err(|e| async_graphql::Error::new(e.to_string())))
        .collect()
}

#[derive(Default)]
pub struct ScheduleMutation;

#[Object]
impl ScheduleMutation {
    /// Applies staged additions and removals in one call, without an edit session.
    async fn commit_schedule(
        &self,
        context: &Context<'_>,
        employee_id: String,
        additions: Vec<String>,
        removals: Vec<String>,
        notes: Option<String>,
    ) -> GqlResult<GqlCommitSummary> {
        let state = context.data_unchecked::<AppState>();
        let actor = context.data_opt::<Actor>().cloned().unwrap_or_default();

        let command = CommitSchedule {
            employee_id,
            additions: parse_dates(&additions)?,
            removals: parse_dates(&removals)?,
            notes,
            requested_by: actor.0,
        };

        let summary = state
            .commit_handler
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        // Inline refresh so queries see the new schedule immediately
        if let Err(err) = state.refresh_cache().await {
            warn!(error = %err, "schedule cache refresh failed");
        }

        Ok(summary.into())
    }
}
