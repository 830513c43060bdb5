// Parsing and formatting of the wire primitives: ISO dates, `HH:MM` clock times and
// weekday indices (0 = Sunday .. 6 = Saturday).

use chrono::{NaiveDate, NaiveTime, Weekday};
use thiserror::Error;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PrimitiveError {
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("invalid time '{0}', expected HH:MM")]
    InvalidTime(String),

    #[error("invalid weekday index {0}, expected 0..=6")]
    InvalidWeekday(u8),
}

pub fn parse_date(value: &str) -> Result<NaiveDate, PrimitiveError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| PrimitiveError::InvalidDate(value.to_string()))
}

pub fn parse_time(value: &str) -> Result<NaiveTime, PrimitiveError> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT)
        .map_err(|_| PrimitiveError::InvalidTime(value.to_string()))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

pub fn weekday_from_index(index: u8) -> Result<Weekday, PrimitiveError> {
    match index {
        0 => Ok(Weekday::Sun),
        1 => Ok(Weekday::Mon),
        2 => Ok(Weekday::Tue),
        3 => Ok(Weekday::Wed),
        4 => Ok(Weekday::Thu),
        5 => Ok(Weekday::Fri),
        6 => Ok(Weekday::Sat),
        other => Err(PrimitiveError::InvalidWeekday(other)),
    }
}

pub fn weekdays_from_indices(indices: &[u8]) -> Result<Vec<Weekday>, PrimitiveError> {
    indices.iter().copied().map(weekday_from_index).collect()
}

/// Serde adapter storing a `NaiveTime` as `HH:MM`.
pub mod hh_mm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_time(*time))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_time(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod primitives_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_parse_an_iso_date() {
        assert_eq!(
            parse_date("2025-03-10"),
            Ok(NaiveDate::from_ymd_opt(2025, 3, 10).unwrap())
        );
    }

    #[rstest]
    #[case("2025-13-01")]
    #[case("10/03/2025")]
    #[case("")]
    fn it_should_reject_malformed_dates(#[case] raw: &str) {
        assert_eq!(
            parse_date(raw),
            Err(PrimitiveError::InvalidDate(raw.to_string()))
        );
    }

    #[rstest]
    #[case("09:00", 9, 0)]
    #[case("17:30", 17, 30)]
    #[case("00:00", 0, 0)]
    fn it_should_parse_clock_times(#[case] raw: &str, #[case] hour: u32, #[case] minute: u32) {
        assert_eq!(
            parse_time(raw),
            Ok(NaiveTime::from_hms_opt(hour, minute, 0).unwrap())
        );
    }

    #[rstest]
    fn it_should_reject_out_of_range_times() {
        assert!(parse_time("24:10").is_err());
    }

    #[rstest]
    fn it_should_format_times_without_seconds() {
        assert_eq!(format_time(NaiveTime::from_hms_opt(7, 5, 0).unwrap()), "07:05");
    }

    #[rstest]
    fn it_should_map_weekday_indices_starting_on_sunday() {
        assert_eq!(weekday_from_index(0), Ok(Weekday::Sun));
        assert_eq!(weekday_from_index(6), Ok(Weekday::Sat));
        assert_eq!(weekday_from_index(7), Err(PrimitiveError::InvalidWeekday(7)));
    }

    #[rstest]
    fn it_should_fail_the_whole_list_on_one_bad_index() {
        assert!(weekdays_from_indices(&[1, 2, 9]).is_err());
        assert_eq!(
            weekdays_from_indices(&[1, 5]),
            Ok(vec![Weekday::Mon, Weekday::Fri])
        );
    }
}
