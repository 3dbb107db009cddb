use serde::{Deserialize, Serialize};

use crate::{ConfigError, Locale, WeekdayNumber};

/// Calendar system used for month arithmetic.
///
/// Only the proleptic Gregorian calendar is modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarSystem {
    #[default]
    Gregorian,
}

/// Immutable calendar settings threaded through every grid and date operation.
///
/// Has no `Default`; callers always pick the first weekday and locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCalendarConfig")]
pub struct CalendarConfig {
    first_weekday: WeekdayNumber,
    locale:        Locale,
    calendar:      CalendarSystem,
}

/// Unvalidated form of `CalendarConfig` as it appears in settings files.
#[derive(Deserialize)]
struct RawCalendarConfig {
    first_weekday: u8,
    locale:        String,
    #[serde(default)]
    calendar:      CalendarSystem,
}

impl CalendarConfig {
    /// Creates a Gregorian config from a raw weekday number (1 = Sunday) and a locale identifier
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidFirstWeekday` if `first_weekday` is outside `1..=7`,
    /// or a locale error if `locale` is empty or unsupported.
    pub fn new(first_weekday: u8, locale: &str) -> Result<Self, ConfigError> {
        Ok(Self::from_parts(
            WeekdayNumber::new(first_weekday)?,
            locale.parse()?,
        ))
    }

    /// Creates a Gregorian config from already validated parts
    pub const fn from_parts(first_weekday: WeekdayNumber, locale: Locale) -> Self {
        Self {
            first_weekday,
            locale,
            calendar: CalendarSystem::Gregorian,
        }
    }

    /// Weekday that starts every grid row
    pub const fn first_weekday(&self) -> WeekdayNumber {
        self.first_weekday
    }

    /// Locale for labels and weekday symbols
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    pub const fn calendar(&self) -> CalendarSystem {
        self.calendar
    }
}

impl TryFrom<RawCalendarConfig> for CalendarConfig {
    type Error = ConfigError;

    fn try_from(raw: RawCalendarConfig) -> Result<Self, Self::Error> {
        let mut config = Self::new(raw.first_weekday, &raw.locale)?;
        config.calendar = raw.calendar;
        Ok(config)
    }
}
