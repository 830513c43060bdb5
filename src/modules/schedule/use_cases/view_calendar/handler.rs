// Calendar page assembly: a grid for the requested view, each cell annotated with the
// employee's schedule status and logged hours for that date.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::modules::schedule::adapters::outbound::store::ScheduleFilter;
use crate::modules::schedule::core::calendar::{
    CalendarCell, CalendarError, Direction, Granularity, advance, build_day_grid, build_modal_grid,
    build_month_grid, build_week_grid, day_name,
};
use crate::modules::schedule::core::work_day::{DayStatus, WorkDay, day_status};
use crate::modules::schedule::core::work_hours::{WorkHoursEntry, round_hours, total_hours};
use crate::modules::schedule::use_cases::view_calendar::queries_port::ScheduleQueries;
use crate::shared::core::clock::Clock;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarView {
    Day,
    Week,
    #[default]
    Month,
    Modal,
}

impl CalendarView {
    pub fn granularity(self) -> Granularity {
        match self {
            CalendarView::Day => Granularity::Day,
            CalendarView::Week => Granularity::Week,
            CalendarView::Month | CalendarView::Modal => Granularity::Month,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarDayView {
    pub date: NaiveDate,
    pub day: u32,
    pub day_name: String,
    pub is_current_month: bool,
    pub is_today: bool,
    pub status: DayStatus,
    pub total_hours: f64,
    pub work_day_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarPage {
    pub employee_id: String,
    pub view: CalendarView,
    pub pivot: NaiveDate,
    pub previous: NaiveDate,
    pub next: NaiveDate,
    /// Hours logged on the page's current-month days.
    pub total_hours: f64,
    pub days: Vec<CalendarDayView>,
}

fn grid(
    view: CalendarView,
    pivot: NaiveDate,
    clock: &dyn Clock,
) -> Result<Vec<CalendarCell>, CalendarError> {
    match view {
        CalendarView::Day => build_day_grid(pivot),
        CalendarView::Month => build_month_grid(pivot),
        CalendarView::Modal => build_modal_grid(pivot),
        // Week cells keep the current-month flag relative to the pivot so a week
        // spanning two months renders like the month grid does.
        CalendarView::Week => Ok(build_week_grid(pivot, clock)?
            .into_iter()
            .map(|cell| CalendarCell {
                date: cell.date,
                day: cell.day,
                is_current_month: cell.date.month() == pivot.month()
                    && cell.date.year() == pivot.year(),
            })
            .collect()),
    }
}

pub async fn build_calendar_page(
    queries: &(dyn ScheduleQueries + Send + Sync),
    clock: &dyn Clock,
    employee_id: &str,
    pivot: NaiveDate,
    view: CalendarView,
) -> anyhow::Result<CalendarPage> {
    let cells = grid(view, pivot, clock)?;
    let (Some(first), Some(last)) = (cells.first(), cells.last()) else {
        anyhow::bail!("empty calendar grid for {pivot}");
    };
    let filter = ScheduleFilter::for_employee(employee_id).between(first.date, last.date);

    let work_days: BTreeMap<NaiveDate, WorkDay> = queries
        .work_days(&filter)
        .await?
        .into_iter()
        .map(|day| (day.date, day))
        .collect();
    let mut entries: BTreeMap<NaiveDate, Vec<WorkHoursEntry>> = BTreeMap::new();
    for entry in queries.work_hours(&filter).await? {
        entries.entry(entry.date).or_default().push(entry);
    }

    let today = clock.today();
    let days: Vec<CalendarDayView> = cells
        .into_iter()
        .map(|cell| {
            let work_day = work_days.get(&cell.date);
            let logged = entries.get(&cell.date).map(Vec::as_slice).unwrap_or(&[]);
            CalendarDayView {
                date: cell.date,
                day: cell.day,
                day_name: day_name(cell.date.weekday()).to_string(),
                is_current_month: cell.is_current_month,
                is_today: cell.date == today,
                status: day_status(work_day, logged),
                total_hours: total_hours(logged),
                work_day_id: work_day.map(|day| day.id.clone()),
            }
        })
        .collect();

    let page_hours = days
        .iter()
        .filter(|day| day.is_current_month)
        .map(|day| day.total_hours)
        .sum();

    let granularity = view.granularity();
    Ok(CalendarPage {
        employee_id: employee_id.to_string(),
        view,
        pivot,
        previous: advance(pivot, Direction::Previous, granularity),
        next: advance(pivot, Direction::Next, granularity),
        total_hours: round_hours(page_hours),
        days,
    })
}
