//! Month arithmetic: start-of-month normalization and whole-month stepping.
//!
//! Every value leaving this module is a [`MonthAnchor`], i.e. the first day of
//! a month at start of day, so repeated navigation never drifts.

use std::str::FromStr;

use chrono::{
    DateTime, Datelike, Days, Local, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeZone,
};

use crate::config::CalendarSystem;
use crate::prelude::*;
use crate::{CalendarConfig, ParseError, WeekdayNumber, YEAR_MONTH_SEPARATOR, types};

/// Anything with a calendar date that can be normalized to its month.
pub trait CalendarDate {
    /// The calendar date, dropping any time of day
    fn calendar_date(&self) -> NaiveDate;
}

impl CalendarDate for NaiveDate {
    fn calendar_date(&self) -> NaiveDate {
        *self
    }
}

impl CalendarDate for NaiveDateTime {
    fn calendar_date(&self) -> NaiveDate {
        self.date()
    }
}

impl<Tz: TimeZone> CalendarDate for DateTime<Tz> {
    fn calendar_date(&self) -> NaiveDate {
        self.date_naive()
    }
}

impl CalendarDate for MonthAnchor {
    fn calendar_date(&self) -> NaiveDate {
        self.date
    }
}

/// The first day of a month.
///
/// Only produced by normalization, so `normalize_to_month_start(a) == a` for
/// every anchor `a`. Displays as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}", "date.year()", "date.month()")]
pub struct MonthAnchor {
    date: NaiveDate,
}

impl MonthAnchor {
    const fn from_first_day(date: NaiveDate) -> Self {
        Self { date }
    }

    /// Anchor for the given year and 1-based month
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if `month` is outside `1..=12`, or
    /// `ParseError::OutOfRange` if chrono cannot represent that month.
    pub fn new(year: i32, month: u32) -> Result<Self, ParseError> {
        if !(1..=crate::MAX_MONTH).contains(&month) {
            return Err(ParseError::InvalidMonth(month));
        }
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(Self::from_first_day)
            .ok_or(ParseError::OutOfRange { year, month })
    }

    /// Anchor for the month containing today's local date
    pub fn current(config: &CalendarConfig) -> Self {
        normalize_to_month_start(&Local::now(), config)
    }

    /// First day of the month
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// First day of the month at `00:00:00`
    pub fn start_of_day(&self) -> NaiveDateTime {
        self.date.and_time(NaiveTime::MIN)
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// 1-based month
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// Weekday number (1 = Sunday) of the month's first day
    pub fn weekday_number(&self) -> WeekdayNumber {
        WeekdayNumber::from_weekday(self.date.weekday())
    }
}

impl FromStr for MonthAnchor {
    type Err = ParseError;

    /// Parses `YYYY-MM`; a leading `-` on the year is allowed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let (year, month) = trimmed
            .rsplit_once(YEAR_MONTH_SEPARATOR)
            .filter(|(year, _)| !year.is_empty() && *year != "-")
            .ok_or_else(|| ParseError::InvalidFormat(trimmed.to_owned()))?;

        let year = year
            .parse::<i32>()
            .map_err(|_| ParseError::InvalidFormat(trimmed.to_owned()))?;
        let month = month
            .parse::<u32>()
            .map_err(|_| ParseError::InvalidFormat(trimmed.to_owned()))?;

        Self::new(year, month)
    }
}

impl serde::Serialize for MonthAnchor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for MonthAnchor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Drops the day and time of day from `date`, keeping its year and month.
pub fn normalize_to_month_start<D>(date: &D, config: &CalendarConfig) -> MonthAnchor
where
    D: CalendarDate + ?Sized,
{
    match config.calendar() {
        CalendarSystem::Gregorian => {
            let date = date.calendar_date();
            // Stays inside the same month, so it cannot leave chrono's range.
            MonthAnchor::from_first_day(date - Days::new(u64::from(date.day0())))
        }
    }
}

/// Steps `anchor` by `delta` whole months, or `None` past chrono's date range.
pub fn checked_step_months(
    anchor: &MonthAnchor,
    delta: i32,
    config: &CalendarConfig,
) -> Option<MonthAnchor> {
    let months = Months::new(delta.unsigned_abs());
    let stepped = if delta >= 0 {
        anchor.date.checked_add_months(months)
    } else {
        anchor.date.checked_sub_months(months)
    }?;
    Some(normalize_to_month_start(&stepped, config))
}

/// Steps `anchor` by `delta` whole months.
///
/// At the edges of chrono's date range the anchor is returned unchanged.
pub fn step_months(anchor: &MonthAnchor, delta: i32, config: &CalendarConfig) -> MonthAnchor {
    checked_step_months(anchor, delta, config).unwrap_or_else(|| {
        log::warn!("cannot step {anchor} by {delta} months; keeping {anchor}");
        *anchor
    })
}

/// Number of days in the anchor's month.
pub fn days_in_month(anchor: &MonthAnchor, config: &CalendarConfig) -> u32 {
    match config.calendar() {
        CalendarSystem::Gregorian => types::days_in_month(anchor.year(), anchor.month()),
    }
}

/// Localized "year + month" label, e.g. `2025年5月` for `ja_JP`.
pub fn format_year_month_label(anchor: &MonthAnchor, config: &CalendarConfig) -> String {
    config
        .locale()
        .year_month_label(anchor.year(), anchor.month())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{anchor, config, config_with, date};

    #[test]
    fn test_normalize_strips_day() {
        let config = config(1);
        let normalized = normalize_to_month_start(&date(2025, 5, 17), &config);
        assert_eq!(normalized.date(), date(2025, 5, 1));
        assert_eq!(normalized, anchor(2025, 5));
    }

    #[test]
    fn test_normalize_strips_time_of_day() {
        let config = config(1);
        let datetime = date(2024, 2, 29).and_hms_opt(23, 59, 59).unwrap();
        let normalized = normalize_to_month_start(&datetime, &config);
        assert_eq!(normalized, anchor(2024, 2));
        assert_eq!(
            normalized.start_of_day(),
            date(2024, 2, 1).and_hms_opt(0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_normalize_zoned_datetime() {
        let config = config(1);
        let zoned = chrono::Utc.with_ymd_and_hms(2023, 12, 31, 12, 0, 0).unwrap();
        assert_eq!(normalize_to_month_start(&zoned, &config), anchor(2023, 12));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let config = config(1);
        let mut day = date(2023, 1, 1);
        while day < date(2025, 1, 1) {
            let once = normalize_to_month_start(&day, &config);
            let twice = normalize_to_month_start(&once, &config);
            assert_eq!(once, twice, "normalizing {day} twice");
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_step_months_cases() {
        struct TestCase {
            from:        (i32, u32),
            delta:       i32,
            expected:    (i32, u32),
            description: &'static str,
        }

        let cases = [
            TestCase {
                from:        (2024, 12),
                delta:       1,
                expected:    (2025, 1),
                description: "December rolls into January of the next year",
            },
            TestCase {
                from:        (2025, 1),
                delta:       -1,
                expected:    (2024, 12),
                description: "January rolls back into December",
            },
            TestCase {
                from:        (2025, 5),
                delta:       0,
                expected:    (2025, 5),
                description: "zero delta is a no-op",
            },
            TestCase {
                from:        (2025, 5),
                delta:       27,
                expected:    (2027, 8),
                description: "multi-year forward step",
            },
            TestCase {
                from:        (2025, 5),
                delta:       -29,
                expected:    (2022, 12),
                description: "multi-year backward step",
            },
        ];

        let config = config(1);
        for case in &cases {
            let from = anchor(case.from.0, case.from.1);
            let expected = anchor(case.expected.0, case.expected.1);
            assert_eq!(
                step_months(&from, case.delta, &config),
                expected,
                "{}",
                case.description
            );
        }
    }

    #[test]
    fn test_step_months_round_trip() {
        let config = config(1);
        for month in 1..=12 {
            let start = anchor(2024, month);
            for n in [-25, -12, -1, 1, 2, 11, 12, 13, 100] {
                let there = step_months(&start, n, &config);
                assert_eq!(there.date().day(), 1);
                assert_eq!(step_months(&there, -n, &config), start, "{start} by {n}");
            }
        }
    }

    #[test]
    fn test_step_months_at_range_edge_keeps_anchor() {
        let config = config(1);
        let last = normalize_to_month_start(&NaiveDate::MAX, &config);
        assert_eq!(checked_step_months(&last, 1, &config), None);
        assert_eq!(step_months(&last, 1, &config), last);

        let first = normalize_to_month_start(&NaiveDate::MIN, &config);
        assert_eq!(checked_step_months(&first, -1, &config), None);
        assert_eq!(step_months(&first, -1, &config), first);
    }

    #[test]
    fn test_days_in_month() {
        let config = config(1);
        assert_eq!(days_in_month(&anchor(2025, 2), &config), 28);
        assert_eq!(days_in_month(&anchor(2024, 2), &config), 29);
        assert_eq!(days_in_month(&anchor(2025, 4), &config), 30);
        assert_eq!(days_in_month(&anchor(2025, 5), &config), 31);
    }

    #[test]
    fn test_format_year_month_label() {
        let may = anchor(2025, 5);
        assert_eq!(format_year_month_label(&may, &config(1)), "2025年5月");
        assert_eq!(
            format_year_month_label(&may, &config_with(2, "en_US")),
            "May 2025"
        );
        assert_eq!(
            format_year_month_label(&anchor(2025, 12), &config_with(2, "de_DE")),
            "Dezember 2025"
        );
    }

    #[test]
    fn test_label_ignores_first_weekday() {
        let may = anchor(2025, 5);
        assert_eq!(
            format_year_month_label(&may, &config(1)),
            format_year_month_label(&may, &config(2))
        );
    }

    #[test]
    fn test_anchor_new_invalid() {
        assert!(matches!(MonthAnchor::new(2025, 0), Err(ParseError::InvalidMonth(0))));
        assert!(matches!(MonthAnchor::new(2025, 13), Err(ParseError::InvalidMonth(13))));
        assert!(matches!(
            MonthAnchor::new(i32::MAX, 1),
            Err(ParseError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_anchor_weekday_number() {
        // 2025-05-01 is a Thursday
        assert_eq!(anchor(2025, 5).weekday_number().get(), 5);
        // 2024-09-01 is a Sunday
        assert_eq!(anchor(2024, 9).weekday_number().get(), 1);
    }

    #[test]
    fn test_anchor_display_and_parse() {
        let may = anchor(2025, 5);
        assert_eq!(may.to_string(), "2025-05");
        assert_eq!("2025-05".parse::<MonthAnchor>().unwrap(), may);
        assert_eq!(" 2025-5 ".parse::<MonthAnchor>().unwrap(), may);
        assert_eq!(
            "-0044-03".parse::<MonthAnchor>().unwrap(),
            MonthAnchor::new(-44, 3).unwrap()
        );
    }

    #[test]
    fn test_anchor_parse_errors() {
        assert!(matches!("".parse::<MonthAnchor>(), Err(ParseError::EmptyInput)));
        assert!(matches!(
            "2025".parse::<MonthAnchor>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2025-xx".parse::<MonthAnchor>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "-05".parse::<MonthAnchor>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2025-13".parse::<MonthAnchor>(),
            Err(ParseError::InvalidMonth(13))
        ));
    }

    #[test]
    fn test_anchor_serde() {
        let may = anchor(2025, 5);
        let json = serde_json::to_string(&may).unwrap();
        assert_eq!(json, r#""2025-05""#);

        let parsed: MonthAnchor = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, may);

        assert!(serde_json::from_str::<MonthAnchor>(r#""2025-00""#).is_err());
    }

    #[test]
    fn test_current_is_normalized() {
        let config = config(1);
        let current = MonthAnchor::current(&config);
        assert_eq!(current.date().day(), 1);
        assert_eq!(normalize_to_month_start(&current, &config), current);
    }
}
