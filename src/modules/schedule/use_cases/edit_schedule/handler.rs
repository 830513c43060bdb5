// Server-side schedule edit sessions.
//
// Responsibilities
// - Open a session against the employee's cached work days.
// - Apply staging operations under the registry lock.
// - Run the commit outside the lock; the session sits in Committing meanwhile and
//   rejects further edits.
// - Drop sessions that finished (complete commit or abandon).

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, instrument};

use crate::modules::schedule::adapters::outbound::store::{ScheduleFilter, WorkDayStore};
use crate::modules::schedule::core::calendar::Direction;
use crate::modules::schedule::core::session::{ScheduleSession, SessionError, SessionState};
use crate::modules::schedule::use_cases::commit_schedule::command::CommitSchedule;
use crate::modules::schedule::use_cases::commit_schedule::handler::{
    CommitScheduleHandler, CommitSummary,
};
use crate::modules::schedule::use_cases::edit_schedule::registry::SessionRegistry;
use crate::modules::schedule::use_cases::errors::ApplicationError;
use crate::modules::schedule::use_cases::view_calendar::queries_port::ScheduleQueries;
use crate::shared::core::clock::Clock;
use crate::shared::core::primitives::{PrimitiveError, weekdays_from_indices};
use crate::shared::infrastructure::activity_log::ActivityLog;

#[derive(Debug, Error)]
pub enum EditError {
    #[error("schedule session {0} not found")]
    UnknownSession(String),

    #[error("no employee selected")]
    MissingEmployee,

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Weekday(#[from] PrimitiveError),

    #[error(transparent)]
    Commit(#[from] ApplicationError),

    #[error("schedule queries failed: {0}")]
    Queries(#[from] anyhow::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionPhase {
    Idle,
    Editing,
    Committing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionView {
    pub session_id: String,
    pub employee_id: String,
    pub month: NaiveDate,
    pub phase: SessionPhase,
    pub additions: Vec<NaiveDate>,
    pub removals: Vec<NaiveDate>,
    /// Sunday = 0.
    pub weekdays: Vec<u8>,
}

impl SessionView {
    fn of(session_id: &str, session: &ScheduleSession) -> Self {
        let phase = match session.state() {
            SessionState::Idle => SessionPhase::Idle,
            SessionState::Editing(_) => SessionPhase::Editing,
            SessionState::Committing(_) => SessionPhase::Committing,
        };
        let (additions, removals, weekdays) = match session.selection() {
            Some(selection) => (
                selection.additions.iter().copied().collect(),
                selection.removals.iter().copied().collect(),
                selection
                    .weekdays
                    .iter()
                    .map(|weekday| weekday.num_days_from_sunday() as u8)
                    .collect(),
            ),
            None => (Vec::new(), Vec::new(), Vec::new()),
        };
        Self {
            session_id: session_id.to_string(),
            employee_id: session.employee_id().to_string(),
            month: session.month(),
            phase,
            additions,
            removals,
            weekdays,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateOutcome {
    pub added: Vec<NaiveDate>,
    pub session: SessionView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitOutcome {
    pub summary: CommitSummary,
    pub session: SessionView,
}

pub struct EditScheduleHandler<TStore, TActivityLog>
where
    TStore: WorkDayStore + Send + Sync + 'static,
    TActivityLog: ActivityLog + Send + Sync + 'static,
{
    registry: SessionRegistry,
    queries: Arc<dyn ScheduleQueries + Send + Sync>,
    committer: Arc<CommitScheduleHandler<TStore, TActivityLog>>,
    clock: Arc<dyn Clock>,
}

impl<TStore, TActivityLog> EditScheduleHandler<TStore, TActivityLog>
where
    TStore: WorkDayStore + Send + Sync + 'static,
    TActivityLog: ActivityLog + Send + Sync + 'static,
{
    pub fn new(
        queries: Arc<dyn ScheduleQueries + Send + Sync>,
        committer: Arc<CommitScheduleHandler<TStore, TActivityLog>>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            registry: SessionRegistry::new(),
            queries,
            committer,
            clock,
        }
    }

    pub async fn open_sessions(&self) -> usize {
        self.registry.len().await
    }

    #[instrument(skip(self))]
    pub async fn open(
        &self,
        employee_id: &str,
        month: Option<NaiveDate>,
    ) -> Result<SessionView, EditError> {
        if employee_id.trim().is_empty() {
            return Err(EditError::MissingEmployee);
        }
        let persisted: BTreeSet<NaiveDate> = self
            .queries
            .work_days(&ScheduleFilter::for_employee(employee_id))
            .await?
            .into_iter()
            .map(|day| day.date)
            .collect();
        let month = month.unwrap_or_else(|| self.clock.today());
        let session = ScheduleSession::open(employee_id, month, persisted);
        let id = self.registry.insert(session.clone()).await;
        info!(session_id = %id, "schedule session opened");
        Ok(SessionView::of(&id, &session))
    }

    async fn edit<R>(
        &self,
        id: &str,
        f: impl FnOnce(&mut ScheduleSession) -> Result<R, SessionError>,
    ) -> Result<(R, SessionView), EditError> {
        let outcome = self
            .registry
            .update(id, |session| {
                f(session).map(|value| (value, SessionView::of(id, session)))
            })
            .await
            .ok_or_else(|| EditError::UnknownSession(id.to_string()))?;
        Ok(outcome?)
    }

    pub async fn toggle(&self, id: &str, date: NaiveDate) -> Result<SessionView, EditError> {
        let today = self.clock.today();
        let ((), view) = self.edit(id, |session| session.toggle_date(date, today)).await?;
        Ok(view)
    }

    pub async fn template(&self, id: &str, weekdays: &[u8]) -> Result<TemplateOutcome, EditError> {
        let weekdays = weekdays_from_indices(weekdays)?;
        let today = self.clock.today();
        let (added, session) = self
            .edit(id, |session| session.apply_template(weekdays, today))
            .await?;
        Ok(TemplateOutcome {
            added: added.into_iter().collect(),
            session,
        })
    }

    pub async fn navigate(&self, id: &str, direction: Direction) -> Result<SessionView, EditError> {
        let (_, view) = self.edit(id, |session| session.navigate(direction)).await?;
        Ok(view)
    }

    pub async fn abandon(&self, id: &str) -> Result<(), EditError> {
        self.edit(id, ScheduleSession::abandon).await?;
        self.registry.remove(id).await;
        info!(session_id = %id, "schedule session abandoned");
        Ok(())
    }

    #[instrument(skip(self, notes))]
    pub async fn commit(
        &self,
        id: &str,
        notes: Option<String>,
        requested_by: &str,
    ) -> Result<CommitOutcome, EditError> {
        let ((employee_id, selection), _) = self
            .edit(id, |session| {
                let employee_id = session.employee_id().to_string();
                session.begin_commit().map(|selection| (employee_id, selection))
            })
            .await?;

        let result = self
            .committer
            .handle(CommitSchedule {
                employee_id,
                additions: selection.additions,
                removals: selection.removals,
                notes,
                requested_by: requested_by.to_string(),
            })
            .await;

        let (complete, stored, unstored) = match &result {
            Ok(summary) => (
                summary.is_complete(),
                summary
                    .created
                    .iter()
                    .chain(&summary.skipped)
                    .copied()
                    .collect::<Vec<_>>(),
                summary.deleted.clone(),
            ),
            Err(_) => (false, Vec::new(), Vec::new()),
        };
        let session = self
            .registry
            .update(id, |session| {
                session.finish_commit(complete, &stored, &unstored);
                SessionView::of(id, session)
            })
            .await
            .ok_or_else(|| EditError::UnknownSession(id.to_string()))?;
        if complete {
            self.registry.remove(id).await;
        }

        Ok(CommitOutcome {
            summary: result?,
            session,
        })
    }
}
