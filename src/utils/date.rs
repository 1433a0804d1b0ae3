use chrono::{DateTime, Datelike, Local, NaiveDate, Weekday};

use crate::errors::{AppError, AppResult};
use crate::models::WeekdayStyle;

/// Day key (`YYYY-MM-DD`) of a local instant.
pub fn day_key(now: &DateTime<Local>) -> String {
    now.format("%Y-%m-%d").to_string()
}

/// Wall-clock time (`HH:MM:SS`) of a local instant.
pub fn time_of_day(now: &DateTime<Local>) -> String {
    now.format("%H:%M:%S").to_string()
}

pub fn parse_day_key(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// Weekday label in the requested style, or `None` when weekdays are off.
pub fn weekday_label(date: &NaiveDate, style: WeekdayStyle) -> Option<String> {
    let wd = date.weekday();
    let long = match wd {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    };

    match style {
        WeekdayStyle::None => None,
        WeekdayStyle::Short => Some(long[..2].to_string()),
        WeekdayStyle::Medium => Some(long[..3].to_string()),
        WeekdayStyle::Long => Some(long.to_string()),
    }
}
