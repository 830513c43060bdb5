// Commit executor for staged schedule edits.
//
// Responsibilities
// - Validate before any store call.
// - Fetch the employee's work days fresh and reconcile the staged sets against them.
// - Issue removals before additions; every item succeeds or fails on its own.
// - Summarise the batch instead of failing it, and record activity for what went through.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::modules::schedule::adapters::outbound::activity_log::dispatch_intents;
use crate::modules::schedule::adapters::outbound::store::{ScheduleFilter, WorkDayStore};
use crate::modules::schedule::core::intents::ScheduleIntent;
use crate::modules::schedule::core::schedule_diff::reconcile;
use crate::modules::schedule::use_cases::commit_schedule::command::CommitSchedule;
use crate::modules::schedule::use_cases::commit_schedule::decide::validate_commit;
use crate::modules::schedule::use_cases::errors::ApplicationError;
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::activity_log::ActivityLog;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateFailure {
    pub date: NaiveDate,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommitSummary {
    pub created: Vec<NaiveDate>,
    pub deleted: Vec<NaiveDate>,
    pub skipped: Vec<NaiveDate>,
    pub failed_creates: Vec<DateFailure>,
    pub failed_deletes: Vec<DateFailure>,
}

impl CommitSummary {
    pub fn is_complete(&self) -> bool {
        self.failed_creates.is_empty() && self.failed_deletes.is_empty()
    }
}

pub struct CommitScheduleHandler<TStore, TActivityLog>
where
    TStore: WorkDayStore + Send + Sync + 'static,
    TActivityLog: ActivityLog + Send + Sync + 'static,
{
    store: Arc<TStore>,
    activity_log: Arc<TActivityLog>,
    clock: Arc<dyn Clock>,
}

impl<TStore, TActivityLog> CommitScheduleHandler<TStore, TActivityLog>
where
    TStore: WorkDayStore + Send + Sync + 'static,
    TActivityLog: ActivityLog + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>, activity_log: Arc<TActivityLog>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            activity_log,
            clock,
        }
    }

    #[instrument(skip_all, fields(employee_id = %command.employee_id))]
    pub async fn handle(&self, command: CommitSchedule) -> Result<CommitSummary, ApplicationError> {
        validate_commit(&command, self.clock.today())
            .map_err(|reason| ApplicationError::Domain(reason.to_string()))?;

        let existing = self
            .store
            .list_work_days(&ScheduleFilter::for_employee(&command.employee_id))
            .await?;
        let plan = reconcile(&command.additions, &command.removals, &existing);

        let mut summary = CommitSummary {
            skipped: plan.skipped.iter().copied().collect(),
            ..CommitSummary::default()
        };

        for day in &plan.to_delete {
            match self.store.delete_work_day(&day.id).await {
                Ok(()) => summary.deleted.push(day.date),
                Err(err) => {
                    warn!(date = %day.date, error = %err, "work day delete failed");
                    summary.failed_deletes.push(DateFailure {
                        date: day.date,
                        reason: err.to_string(),
                    });
                }
            }
        }

        let dates: Vec<NaiveDate> = plan.to_create.iter().copied().collect();
        let mut results = self
            .store
            .create_work_days(&command.employee_id, &dates, command.notes.as_deref())
            .await
            .into_iter();
        for date in dates {
            match results.next() {
                Some(Ok(day)) => summary.created.push(day.date),
                Some(Err(err)) => {
                    warn!(%date, error = %err, "work day create failed");
                    summary.failed_creates.push(DateFailure {
                        date,
                        reason: err.to_string(),
                    });
                }
                None => summary.failed_creates.push(DateFailure {
                    date,
                    reason: "store returned no result".to_string(),
                }),
            }
        }

        let mut intents = Vec::new();
        if !summary.deleted.is_empty() {
            intents.push(ScheduleIntent::PublishWorkDaysUnscheduled {
                employee_id: command.employee_id.clone(),
                dates: summary.deleted.clone(),
            });
        }
        if !summary.created.is_empty() {
            intents.push(ScheduleIntent::PublishWorkDaysScheduled {
                employee_id: command.employee_id.clone(),
                dates: summary.created.clone(),
            });
        }
        // The schedule already changed; a lost activity row must not turn it into an error.
        if let Err(err) = dispatch_intents(
            &*self.activity_log,
            &command.requested_by,
            self.clock.now_millis(),
            intents,
        )
        .await
        {
            warn!(error = %err, "activity not recorded");
        }

        info!(
            created = summary.created.len(),
            deleted = summary.deleted.len(),
            skipped = summary.skipped.len(),
            failed = summary.failed_creates.len() + summary.failed_deletes.len(),
            "schedule committed"
        );
        Ok(summary)
    }
}
