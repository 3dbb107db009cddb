use crate::ConfigError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DAYS_PER_WEEK, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    LEAP_YEAR_CYCLE, MAX_MONTH, MAX_WEEKDAY,
};
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// Weekdays in `WeekdayNumber` order, Sunday first.
const WEEKDAYS_FROM_SUNDAY: [Weekday; DAYS_PER_WEEK] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// A weekday number guaranteed to be in the range `1..=MAX_WEEKDAY` (1..=7)
/// 1 is Sunday and 7 is Saturday.
/// Uses `NonZeroU8` internally, so 0 is not a valid weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct WeekdayNumber(NonZeroU8);

impl WeekdayNumber {
    /// Creates a new `WeekdayNumber`, validating that it's non-zero and <= `MAX_WEEKDAY`
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidFirstWeekday` if the value is 0 or > `MAX_WEEKDAY`.
    pub fn new(value: u8) -> Result<Self, ConfigError> {
        let non_zero = NonZeroU8::new(value).ok_or(ConfigError::InvalidFirstWeekday(value))?;
        if value > MAX_WEEKDAY {
            return Err(ConfigError::InvalidFirstWeekday(value));
        }
        Ok(Self(non_zero))
    }

    /// Numbers a chrono weekday, Sunday being 1
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_weekday(weekday: Weekday) -> Self {
        Self(NonZeroU8::MIN.saturating_add(weekday.num_days_from_sunday() as u8))
    }

    /// Returns the weekday number as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Returns the chrono weekday this number stands for
    pub const fn weekday(self) -> Weekday {
        WEEKDAYS_FROM_SUNDAY[(self.get() - 1) as usize]
    }

    /// Number of columns `self` sits after `start` in a week row that begins on `start`.
    ///
    /// Always in `0..7`. Both the grid's leading blanks and the header rotation
    /// are derived from this.
    #[inline]
    pub const fn offset_from(self, start: Self) -> u8 {
        (self.get() + MAX_WEEKDAY - start.get()) % MAX_WEEKDAY
    }

    /// The weekday `n` days after this one
    #[allow(clippy::cast_possible_truncation)]
    pub const fn nth_after(self, n: usize) -> Self {
        let zero_based = ((self.get() - 1) as usize + n) % DAYS_PER_WEEK;
        Self(NonZeroU8::MIN.saturating_add(zero_based as u8))
    }
}

impl TryFrom<u8> for WeekdayNumber {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WeekdayNumber> for u8 {
    fn from(number: WeekdayNumber) -> Self {
        number.0.get()
    }
}

impl From<Weekday> for WeekdayNumber {
    fn from(weekday: Weekday) -> Self {
        Self::from_weekday(weekday)
    }
}

impl From<WeekdayNumber> for Weekday {
    fn from(number: WeekdayNumber) -> Self {
        number.weekday()
    }
}

impl fmt::Display for WeekdayNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: i32, month: u32) -> u32 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
