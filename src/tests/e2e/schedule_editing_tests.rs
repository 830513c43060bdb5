use chrono::NaiveDate;

use crate::modules::schedule::adapters::outbound::store::ScheduleFilter;
use crate::modules::schedule::core::work_day::DayStatus;
use crate::modules::schedule::use_cases::edit_schedule::handler::SessionPhase;
use crate::modules::schedule::use_cases::view_calendar::handler::{
    CalendarView, build_calendar_page,
};
use crate::shared::infrastructure::activity_log::{ActivityFilter, ActivityQueries};
use crate::tests::fixtures::state::{make_test_state, test_today};

fn march(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
}

#[tokio::test]
async fn schedules_and_unschedules_work_days_through_edit_sessions() {
    let (state, _store, log) = make_test_state();

    let opened = state.edit_handler.open("emp-1", None).await.unwrap();
    assert_eq!(opened.phase, SessionPhase::Editing);
    let templated = state
        .edit_handler
        .template(&opened.session_id, &[1])
        .await
        .unwrap();
    assert_eq!(templated.added, vec![march(10), march(17), march(24), march(31)]);

    let first = state
        .edit_handler
        .commit(&opened.session_id, Some("spring rota".into()), "manager-1")
        .await
        .unwrap();
    assert!(first.summary.is_complete());
    assert_eq!(first.summary.created.len(), 4);
    assert_eq!(state.edit_handler.open_sessions().await, 0);
    state.refresh_cache().await.unwrap();

    let page = build_calendar_page(
        state.queries.as_ref(),
        state.clock.as_ref(),
        "emp-1",
        test_today(),
        CalendarView::Month,
    )
    .await
    .unwrap();
    let scheduled: Vec<NaiveDate> = page
        .days
        .iter()
        .filter(|day| day.status == DayStatus::ScheduledUnlogged)
        .map(|day| day.date)
        .collect();
    assert_eq!(scheduled, vec![march(10), march(17), march(24), march(31)]);

    // A second session starts from the persisted days, so toggling one stages its removal.
    let reopened = state.edit_handler.open("emp-1", None).await.unwrap();
    let staged = state
        .edit_handler
        .toggle(&reopened.session_id, march(17))
        .await
        .unwrap();
    assert_eq!(staged.removals, vec![march(17)]);
    let second = state
        .edit_handler
        .commit(&reopened.session_id, None, "manager-2")
        .await
        .unwrap();
    assert_eq!(second.summary.deleted, vec![march(17)]);
    state.refresh_cache().await.unwrap();

    let remaining = state
        .queries
        .work_days(&ScheduleFilter::for_employee("emp-1"))
        .await
        .unwrap();
    assert_eq!(remaining.len(), 3);
    assert!(remaining.iter().all(|day| day.date != march(17)));

    let trail = log
        .list(&ActivityFilter::default(), 0, 10, false)
        .await
        .unwrap();
    let actions: Vec<(&str, &str)> = trail
        .iter()
        .map(|row| (row.action.as_str(), row.actor.as_str()))
        .collect();
    assert_eq!(
        actions,
        vec![
            ("WorkDaysScheduled", "manager-1"),
            ("WorkDaysUnscheduled", "manager-2"),
        ]
    );
}

#[tokio::test]
async fn keeps_a_session_open_after_abandoning_a_different_one() {
    let (state, _store, _log) = make_test_state();
    let kept = state.edit_handler.open("emp-1", None).await.unwrap();
    let dropped = state.edit_handler.open("emp-2", None).await.unwrap();

    state.edit_handler.toggle(&kept.session_id, march(20)).await.unwrap();
    state.edit_handler.abandon(&dropped.session_id).await.unwrap();

    assert_eq!(state.edit_handler.open_sessions().await, 1);
    let view = state
        .edit_handler
        .toggle(&kept.session_id, march(21))
        .await
        .unwrap();
    assert_eq!(view.additions, vec![march(20), march(21)]);
}
