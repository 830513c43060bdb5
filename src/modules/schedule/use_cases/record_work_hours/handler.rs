use std::sync::Arc;

use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::modules::schedule::adapters::outbound::activity_log::dispatch_intents;
use crate::modules::schedule::adapters::outbound::store::WorkHoursStore;
use crate::modules::schedule::core::intents::ScheduleIntent;
use crate::modules::schedule::core::work_hours::WorkHoursEntry;
use crate::modules::schedule::use_cases::errors::ApplicationError;
use crate::modules::schedule::use_cases::record_work_hours::command::{
    DeleteWorkHours, RecordWorkHours,
};
use crate::modules::schedule::use_cases::record_work_hours::decide::decide_record;
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::activity_log::ActivityLog;

pub struct RecordWorkHoursHandler<TStore, TActivityLog>
where
    TStore: WorkHoursStore + Send + Sync + 'static,
    TActivityLog: ActivityLog + Send + Sync + 'static,
{
    store: Arc<TStore>,
    activity_log: Arc<TActivityLog>,
    clock: Arc<dyn Clock>,
}

impl<TStore, TActivityLog> RecordWorkHoursHandler<TStore, TActivityLog>
where
    TStore: WorkHoursStore + Send + Sync + 'static,
    TActivityLog: ActivityLog + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>, activity_log: Arc<TActivityLog>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            activity_log,
            clock,
        }
    }

    #[instrument(skip_all, fields(employee_id = %command.employee_id, date = %command.date))]
    pub async fn register(&self, command: RecordWorkHours) -> Result<WorkHoursEntry, ApplicationError> {
        let actor = command.requested_by.clone();
        let entry = decide_record(command, Uuid::now_v7().to_string(), self.clock.now_millis())
            .map_err(|reason| ApplicationError::Domain(reason.to_string()))?;
        let entry = self.store.create_work_hours(entry).await?;
        info!(id = %entry.id, total_hours = entry.total_hours, "work hours recorded");
        self.publish(&actor, ScheduleIntent::PublishWorkHoursRecorded { entry: entry.clone() })
            .await;
        Ok(entry)
    }

    #[instrument(skip_all, fields(id = %id))]
    pub async fn update(
        &self,
        id: &str,
        command: RecordWorkHours,
    ) -> Result<WorkHoursEntry, ApplicationError> {
        let actor = command.requested_by.clone();
        let entry = decide_record(command, id.to_string(), self.clock.now_millis())
            .map_err(|reason| ApplicationError::Domain(reason.to_string()))?;
        let entry = self.store.update_work_hours(id, entry).await?;
        info!(total_hours = entry.total_hours, "work hours updated");
        self.publish(&actor, ScheduleIntent::PublishWorkHoursUpdated { entry: entry.clone() })
            .await;
        Ok(entry)
    }

    #[instrument(skip_all, fields(id = %command.id))]
    pub async fn delete(&self, command: DeleteWorkHours) -> Result<(), ApplicationError> {
        self.store.delete_work_hours(&command.id).await?;
        info!("work hours deleted");
        self.publish(
            &command.requested_by,
            ScheduleIntent::PublishWorkHoursDeleted {
                id: command.id,
                employee_id: command.employee_id,
            },
        )
        .await;
        Ok(())
    }

    async fn publish(&self, actor: &str, intent: ScheduleIntent) {
        if let Err(err) =
            dispatch_intents(&*self.activity_log, actor, self.clock.now_millis(), vec![intent]).await
        {
            warn!(error = %err, "activity not recorded");
        }
    }
}
