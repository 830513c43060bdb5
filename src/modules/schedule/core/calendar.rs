// Calendar grids for the schedule views.
//
// All grids are Sunday-aligned. Month grids always tile six rows so the view keeps a
// fixed height; modal grids (schedule editing) stop at the end of the row holding the
// last day of the month. Only the week grid looks at "today", through the clock.
// Grids are only built around pivots in `SUPPORTED_YEARS`; inside that range every
// cell date is representable.

use std::ops::RangeInclusive;

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::core::clock::Clock;

pub const DAYS_PER_WEEK: usize = 7;
pub const MONTH_GRID_CELLS: usize = 6 * DAYS_PER_WEEK;
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1..=9999;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CalendarError {
    #[error("date {0} is outside the supported calendar range")]
    OutOfRange(NaiveDate),
}

pub fn check_pivot(pivot: NaiveDate) -> Result<NaiveDate, CalendarError> {
    if SUPPORTED_YEARS.contains(&pivot.year()) {
        Ok(pivot)
    } else {
        Err(CalendarError::OutOfRange(pivot))
    }
}

const DAY_NAMES: [&str; DAYS_PER_WEEK] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Day,
    Week,
    Month,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Previous,
    Next,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub day: u32,
    pub is_current_month: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekCell {
    pub date: NaiveDate,
    pub day: u32,
    pub day_name: String,
    pub is_today: bool,
}

pub fn day_name(weekday: Weekday) -> &'static str {
    DAY_NAMES[weekday.num_days_from_sunday() as usize]
}

pub fn first_of_month(pivot: NaiveDate) -> NaiveDate {
    pivot - Days::new(u64::from(pivot.day0()))
}

pub fn days_in_month(pivot: NaiveDate) -> u32 {
    let first = first_of_month(pivot);
    first
        .checked_add_months(Months::new(1))
        .map(|next| (next - first).num_days() as u32)
        // Only the last representable month has no successor; it is December.
        .unwrap_or(31)
}

/// Sunday on or before the 1st of the pivot's month.
fn month_grid_start(pivot: NaiveDate) -> Result<NaiveDate, CalendarError> {
    week_start(first_of_month(check_pivot(pivot)?))
}

fn month_cells(pivot: NaiveDate, count: usize) -> Result<Vec<CalendarCell>, CalendarError> {
    let month = (pivot.year(), pivot.month());
    let cells: Vec<CalendarCell> = month_grid_start(pivot)?
        .iter_days()
        .take(count)
        .map(|date| CalendarCell {
            date,
            day: date.day(),
            is_current_month: (date.year(), date.month()) == month,
        })
        .collect();
    if cells.len() < count {
        return Err(CalendarError::OutOfRange(pivot));
    }
    Ok(cells)
}

pub fn build_month_grid(pivot: NaiveDate) -> Result<Vec<CalendarCell>, CalendarError> {
    month_cells(pivot, MONTH_GRID_CELLS)
}

pub fn build_modal_grid(pivot: NaiveDate) -> Result<Vec<CalendarCell>, CalendarError> {
    let leading = first_of_month(pivot).weekday().num_days_from_sunday() as usize;
    let used = leading + days_in_month(pivot) as usize;
    month_cells(pivot, used.div_ceil(DAYS_PER_WEEK) * DAYS_PER_WEEK)
}

pub fn build_day_grid(pivot: NaiveDate) -> Result<Vec<CalendarCell>, CalendarError> {
    let pivot = check_pivot(pivot)?;
    Ok(vec![CalendarCell {
        date: pivot,
        day: pivot.day(),
        is_current_month: true,
    }])
}

pub fn week_start(pivot: NaiveDate) -> Result<NaiveDate, CalendarError> {
    pivot
        .checked_sub_days(Days::new(u64::from(pivot.weekday().num_days_from_sunday())))
        .ok_or(CalendarError::OutOfRange(pivot))
}

pub fn build_week_grid(pivot: NaiveDate, clock: &dyn Clock) -> Result<Vec<WeekCell>, CalendarError> {
    let today = clock.today();
    Ok(week_start(check_pivot(pivot)?)?
        .iter_days()
        .take(DAYS_PER_WEEK)
        .map(|date| WeekCell {
            date,
            day: date.day(),
            day_name: day_name(date.weekday()).to_string(),
            is_today: date == today,
        })
        .collect())
}

/// Shifts the pivot by one unit of the granularity. A step that would leave chrono's
/// representable range keeps the pivot where it is.
pub fn advance(pivot: NaiveDate, direction: Direction, granularity: Granularity) -> NaiveDate {
    let stepped = match (granularity, direction) {
        (Granularity::Day, Direction::Next) => pivot.checked_add_days(Days::new(1)),
        (Granularity::Day, Direction::Previous) => pivot.checked_sub_days(Days::new(1)),
        (Granularity::Week, Direction::Next) => pivot.checked_add_days(Days::new(7)),
        (Granularity::Week, Direction::Previous) => pivot.checked_sub_days(Days::new(7)),
        (Granularity::Month, Direction::Next) => pivot.checked_add_months(Months::new(1)),
        (Granularity::Month, Direction::Previous) => pivot.checked_sub_months(Months::new(1)),
    };
    stepped.unwrap_or(pivot)
}
