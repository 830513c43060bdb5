use async_graphql::{Context, Enum, Object, Result as GqlResult};

use crate::modules::schedule::core::calendar::check_pivot;
use crate::modules::schedule::core::work_day::DayStatus;
use crate::modules::schedule::use_cases::view_calendar::handler::{
    CalendarDayView, CalendarPage, CalendarView, build_calendar_page,
};
use crate::shared::core::primitives::{format_date, parse_date};
use crate::shell::state::AppState;

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum GqlCalendarView {
    Day,
    Week,
    Month,
    Modal,
}

impl From<GqlCalendarView> for CalendarView {
    fn from(v: GqlCalendarView) -> Self {
        match v {
            GqlCalendarView::Day => CalendarView::Day,
            GqlCalendarView::Week => CalendarView::Week,
            GqlCalendarView::Month => CalendarView::Month,
            GqlCalendarView::Modal => CalendarView::Modal,
        }
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum GqlDayStatus {
    Unscheduled,
    ScheduledUnlogged,
    ScheduledLogged,
    Cancelled,
}

impl From<DayStatus> for GqlDayStatus {
    fn from(s: DayStatus) -> Self {
        match s {
            DayStatus::Unscheduled => GqlDayStatus::Unscheduled,
            DayStatus::ScheduledUnlogged => GqlDayStatus::ScheduledUnlogged,
            DayStatus::ScheduledLogged => GqlDayStatus::ScheduledLogged,
            DayStatus::Cancelled => GqlDayStatus::Cancelled,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlCalendarDay {
    pub date: String,
    pub day: u32,
    pub day_name: String,
    pub is_current_month: bool,
    pub is_today: bool,
    pub status: GqlDayStatus,
    pub total_hours: f64,
    pub work_day_id: Option<String>,
}

impl From<CalendarDayView> for GqlCalendarDay {
    fn from(v: CalendarDayView) -> Self {
        Self {
            date: format_date(v.date),
            day: v.day,
            day_name: v.day_name,
            is_current_month: v.is_current_month,
            is_today: v.is_today,
            status: v.status.into(),
            total_hours: v.total_hours,
            work_day_id: v.work_day_id,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlCalendarPage {
    pub employee_id: String,
    pub pivot: String,
    pub previous: String,
    pub next: String,
    pub total_hours: f64,
    pub days: Vec<GqlCalendarDay>,
}

impl From<CalendarPage> for GqlCalendarPage {
    fn from(p: CalendarPage) -> Self {
        Self {
            employee_id: p.employee_id,
            pivot: format_date(p.pivot),
            previous: format_date(p.previous),
            next: format_date(p.next),
            total_hours: p.total_hours,
            days: p.days.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Default)]
pub struct CalendarQuery;

#[Object]
impl CalendarQuery {
    async fn calendar(
        &self,
        context: &Context<'_>,
        employee_id: String,
        pivot: Option<String>,
        view: Option<GqlCalendarView>,
    ) -> GqlResult<GqlCalendarPage> {
        let state = context.data_unchecked::<AppState>();
        let pivot = match pivot {
            Some(raw) => parse_date(&raw).map_err(|e| async_graphql::Error::new(e.to_string()))?,
            None => state.clock.today(),
        };
        let pivot = check_pivot(pivot).map_err(|e| async_graphql::Error::new(e.to_string()))?;
        let page = build_calendar_page(
            state.queries.as_ref(),
            state.clock.as_ref(),
            &employee_id,
            pivot,
            view.map(Into::into).unwrap_or_default(),
        )
        .await?;
        Ok(page.into())
    }
}
