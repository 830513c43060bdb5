use chrono::{NaiveDate, NaiveTime};

use crate::modules::schedule::core::work_day::DayStatus;
use crate::modules::schedule::use_cases::record_work_hours::command::DeleteWorkHours;
use crate::modules::schedule::use_cases::view_calendar::handler::{
    CalendarPage, CalendarView, build_calendar_page,
};
use crate::shared::infrastructure::activity_log::{ActivityFilter, ActivityQueries};
use crate::shell::state::AppState;
use crate::tests::fixtures::commands::record_work_hours::RecordWorkHoursBuilder;
use crate::tests::fixtures::state::make_test_state;
use crate::tests::fixtures::work_day::make_work_day;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
}

fn at(hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, 0, 0).unwrap()
}

async fn week_of(state: &AppState, pivot: NaiveDate) -> CalendarPage {
    state.refresh_cache().await.unwrap();
    build_calendar_page(
        state.queries.as_ref(),
        state.clock.as_ref(),
        "emp-fixed-0001",
        pivot,
        CalendarView::Week,
    )
    .await
    .unwrap()
}

#[tokio::test]
async fn logs_hours_against_scheduled_days() {
    let (state, store, log) = make_test_state();
    store
        .seed_work_day(make_work_day("emp-fixed-0001", date(10)))
        .await;

    let recorded = state
        .record_handler
        .register(RecordWorkHoursBuilder::new().break_minutes(60).build())
        .await
        .unwrap();
    assert_eq!(recorded.total_hours, 7.0);

    let page = week_of(&state, date(10)).await;
    let monday = page.days.iter().find(|day| day.date == date(10)).unwrap();
    assert_eq!(monday.status, DayStatus::ScheduledLogged);
    assert_eq!(monday.total_hours, 7.0);
    assert_eq!(page.total_hours, 7.0);

    let updated = state
        .record_handler
        .update(
            &recorded.id,
            RecordWorkHoursBuilder::new()
                .start_time(at(8))
                .end_time(at(18))
                .break_minutes(30)
                .build(),
        )
        .await
        .unwrap();
    assert_eq!(updated.total_hours, 9.5);
    assert_eq!(week_of(&state, date(10)).await.total_hours, 9.5);

    state
        .record_handler
        .delete(DeleteWorkHours {
            id: recorded.id.clone(),
            employee_id: "emp-fixed-0001".into(),
            requested_by: "manager-fixed-0001".into(),
        })
        .await
        .unwrap();
    let page = week_of(&state, date(10)).await;
    let monday = page.days.iter().find(|day| day.date == date(10)).unwrap();
    assert_eq!(monday.status, DayStatus::ScheduledUnlogged);
    assert_eq!(page.total_hours, 0.0);

    let actions: Vec<String> = log
        .list(
            &ActivityFilter {
                employee_id: Some("emp-fixed-0001".into()),
                action: None,
            },
            0,
            10,
            false,
        )
        .await
        .unwrap()
        .into_iter()
        .map(|row| row.action)
        .collect();
    assert_eq!(
        actions,
        vec!["WorkHoursRecorded", "WorkHoursUpdated", "WorkHoursDeleted"]
    );
}

#[tokio::test]
async fn keeps_hours_on_unscheduled_days_out_of_the_scheduled_status() {
    let (state, _store, _log) = make_test_state();
    state
        .record_handler
        .register(RecordWorkHoursBuilder::new().date(date(12)).build())
        .await
        .unwrap();

    let page = week_of(&state, date(12)).await;
    let wednesday = page.days.iter().find(|day| day.date == date(12)).unwrap();
    assert_eq!(wednesday.status, DayStatus::Unscheduled);
    assert_eq!(wednesday.total_hours, 8.0);
    assert_eq!(wednesday.work_day_id, None);
}
