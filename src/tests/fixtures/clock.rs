use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, NaiveDate, NaiveTime};

use crate::shared::core::clock::Clock;

const DAY_MILLIS: i64 = 86_400_000;

/// Clock that stays put until a test moves it forward.
pub struct SteppingClock {
    now_millis: AtomicI64,
}

impl SteppingClock {
    pub fn on(date: NaiveDate) -> Self {
        let millis = date.and_time(NaiveTime::MIN).and_utc().timestamp_millis();
        Self {
            now_millis: AtomicI64::new(millis),
        }
    }

    pub fn advance_days(&self, days: i64) {
        self.now_millis.fetch_add(days * DAY_MILLIS, Ordering::SeqCst);
    }
}

impl Clock for SteppingClock {
    fn today(&self) -> NaiveDate {
        DateTime::from_timestamp_millis(self.now_millis())
            .unwrap()
            .date_naive()
    }

    fn now_millis(&self) -> i64 {
        self.now_millis.load(Ordering::SeqCst)
    }
}
