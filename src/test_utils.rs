//! Test helpers. All of these panic on invalid input.

use chrono::NaiveDate;

use crate::{CalendarConfig, MonthAnchor};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

pub fn anchor(year: i32, month: u32) -> MonthAnchor {
    MonthAnchor::new(year, month).expect("valid test anchor")
}

/// Japanese config, the locale whose labels read `2025年5月`
pub fn config(first_weekday: u8) -> CalendarConfig {
    config_with(first_weekday, "ja_JP")
}

pub fn config_with(first_weekday: u8, locale: &str) -> CalendarConfig {
    CalendarConfig::new(first_weekday, locale).expect("valid test config")
}
