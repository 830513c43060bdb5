// Schedule edit session: Idle -> Editing -> Committing -> Idle.
//
// The session only stages intent. `persisted` is the snapshot taken when the session
// was opened, moved forward by whatever each commit applied, and is used for toggling
// and template expansion; the commit itself re-fetches and reconciles against fresh
// data.

use std::collections::BTreeSet;

use chrono::{NaiveDate, Weekday};
use serde::Serialize;
use thiserror::Error;

use crate::modules::schedule::core::calendar::{Direction, Granularity, advance, first_of_month};
use crate::modules::schedule::core::schedule_diff::apply_template;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("session is not being edited")]
    NotEditing,

    #[error("session is already committing")]
    AlreadyCommitting,

    #[error("date {0} is in the past")]
    PastDate(NaiveDate),

    #[error("no dates staged")]
    NothingStaged,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScheduleSelectionSet {
    pub additions: BTreeSet<NaiveDate>,
    pub removals: BTreeSet<NaiveDate>,
    pub weekdays: Vec<Weekday>,
}

impl ScheduleSelectionSet {
    pub fn is_empty(&self) -> bool {
        self.additions.is_empty() && self.removals.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Editing(ScheduleSelectionSet),
    Committing(ScheduleSelectionSet),
}

#[derive(Debug, Clone)]
pub struct ScheduleSession {
    employee_id: String,
    month: NaiveDate,
    persisted: BTreeSet<NaiveDate>,
    state: SessionState,
}

impl ScheduleSession {
    pub fn open(
        employee_id: impl Into<String>,
        month: NaiveDate,
        persisted: BTreeSet<NaiveDate>,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            month: first_of_month(month),
            persisted,
            state: SessionState::Editing(ScheduleSelectionSet::default()),
        }
    }

    pub fn employee_id(&self) -> &str {
        &self.employee_id
    }

    pub fn month(&self) -> NaiveDate {
        self.month
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, SessionState::Idle)
    }

    pub fn selection(&self) -> Option<&ScheduleSelectionSet> {
        match &self.state {
            SessionState::Editing(selection) | SessionState::Committing(selection) => {
                Some(selection)
            }
            SessionState::Idle => None,
        }
    }

    fn editing_mut(&mut self) -> Result<&mut ScheduleSelectionSet, SessionError> {
        match &mut self.state {
            SessionState::Editing(selection) => Ok(selection),
            SessionState::Committing(_) => Err(SessionError::AlreadyCommitting),
            SessionState::Idle => Err(SessionError::NotEditing),
        }
    }

    /// Persisted dates flip in and out of the removal set, everything else in and out
    /// of the addition set. Only staging is bound to today: a staged date that has
    /// since passed can still be unstaged.
    pub fn toggle_date(&mut self, date: NaiveDate, today: NaiveDate) -> Result<(), SessionError> {
        let is_persisted = self.persisted.contains(&date);
        let selection = self.editing_mut()?;
        let staged = if is_persisted {
            &mut selection.removals
        } else {
            &mut selection.additions
        };
        if staged.remove(&date) {
            return Ok(());
        }
        if date < today {
            return Err(SessionError::PastDate(date));
        }
        staged.insert(date);
        Ok(())
    }

    /// Stages every newly matching date of the displayed month and returns them.
    pub fn apply_template(
        &mut self,
        weekdays: Vec<Weekday>,
        today: NaiveDate,
    ) -> Result<BTreeSet<NaiveDate>, SessionError> {
        let month = self.month;
        let persisted = self.persisted.clone();
        let selection = self.editing_mut()?;
        let added = apply_template(&weekdays, month, &persisted, &selection.additions, today);
        selection.additions.extend(added.iter().copied());
        for weekday in weekdays {
            if !selection.weekdays.contains(&weekday) {
                selection.weekdays.push(weekday);
            }
        }
        Ok(added)
    }

    pub fn navigate(&mut self, direction: Direction) -> Result<NaiveDate, SessionError> {
        self.editing_mut()?;
        self.month = advance(self.month, direction, Granularity::Month);
        Ok(self.month)
    }

    pub fn abandon(&mut self) -> Result<(), SessionError> {
        self.editing_mut()?;
        self.state = SessionState::Idle;
        Ok(())
    }

    pub fn begin_commit(&mut self) -> Result<ScheduleSelectionSet, SessionError> {
        let selection = self.editing_mut()?;
        if selection.is_empty() {
            return Err(SessionError::NothingStaged);
        }
        let selection = selection.clone();
        self.state = SessionState::Committing(selection.clone());
        Ok(selection)
    }

    /// Folds what the store applied into `persisted`. A complete commit closes the
    /// session; anything less puts the still-pending staged dates back into editing so
    /// the caller can retry.
    pub fn finish_commit(&mut self, complete: bool, stored: &[NaiveDate], unstored: &[NaiveDate]) {
        self.persisted.extend(stored.iter().copied());
        for date in unstored {
            self.persisted.remove(date);
        }
        let state = std::mem::replace(&mut self.state, SessionState::Idle);
        self.state = match state {
            SessionState::Committing(_) if complete => SessionState::Idle,
            SessionState::Committing(mut selection) => {
                selection.additions.retain(|date| !stored.contains(date));
                selection.removals.retain(|date| !unstored.contains(date));
                SessionState::Editing(selection)
            }
            other => other,
        };
    }
}
