// Reconciliation of staged schedule edits against persisted work days.
//
// Both functions are pure. `reconcile` must be fed work days fetched right before the
// commit; it never sees the snapshot the session was opened with.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

use crate::modules::schedule::core::calendar::first_of_month;
use crate::modules::schedule::core::work_day::WorkDay;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SchedulePlan {
    pub to_create: BTreeSet<NaiveDate>,
    pub to_delete: Vec<WorkDay>,
    /// Staged additions that already exist in the store. Dropped, not errors.
    pub skipped: BTreeSet<NaiveDate>,
}

impl SchedulePlan {
    pub fn is_empty(&self) -> bool {
        self.to_create.is_empty() && self.to_delete.is_empty()
    }
}

/// Dates of the pivot's month falling on one of `weekdays` that are not in the past
/// and neither persisted nor already staged. Feeding the result back into
/// `already_selected` makes a second call return nothing.
pub fn apply_template(
    weekdays: &[Weekday],
    month_pivot: NaiveDate,
    existing: &BTreeSet<NaiveDate>,
    already_selected: &BTreeSet<NaiveDate>,
    today: NaiveDate,
) -> BTreeSet<NaiveDate> {
    let month = month_pivot.month();
    first_of_month(month_pivot)
        .iter_days()
        .take_while(|date| date.month() == month)
        .filter(|date| weekdays.contains(&date.weekday()))
        .filter(|date| *date >= today)
        .filter(|date| !existing.contains(date) && !already_selected.contains(date))
        .collect()
}

pub fn reconcile(
    staged_additions: &BTreeSet<NaiveDate>,
    staged_removals: &BTreeSet<NaiveDate>,
    existing: &[WorkDay],
) -> SchedulePlan {
    let by_date: BTreeMap<NaiveDate, &WorkDay> =
        existing.iter().map(|day| (day.date, day)).collect();

    let (skipped, to_create): (BTreeSet<NaiveDate>, BTreeSet<NaiveDate>) = staged_additions
        .iter()
        .copied()
        .partition(|date| by_date.contains_key(date));

    let to_delete = staged_removals
        .iter()
        .filter_map(|date| by_date.get(date).map(|day| (*day).clone()))
        .collect();

    SchedulePlan {
        to_create,
        to_delete,
        skipped,
    }
}
