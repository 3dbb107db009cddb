//! Month grids for swipeable calendar views.
//!
//! Every month is laid out as 42 cells (6 weeks of 7 days), padded with
//! blanks so that each column always shows the same weekday. Rows start on a
//! configurable first weekday, and the weekday header is rotated the same way.
//!
//! ```
//! use month_grid::{CalendarConfig, MonthAnchor, generate_month_grid, weekday_header};
//!
//! let config = CalendarConfig::new(1, "en_US").unwrap();
//! let may = MonthAnchor::new(2025, 5).unwrap();
//! let grid = generate_month_grid(&may, &config);
//!
//! assert_eq!(grid.label(), "May 2025");
//! assert_eq!(grid.leading_blanks(), 4);
//! assert_eq!(weekday_header(&config)[0].symbol(), "Sun");
//! ```

mod config;
mod consts;
mod date_math;
mod grid;
mod locale;
mod paging;
mod prelude;
#[cfg(test)]
mod test_utils;
mod types;
mod weekday;

pub use config::{CalendarConfig, CalendarSystem};
pub use consts::*;
pub use date_math::{
    CalendarDate, MonthAnchor, checked_step_months, days_in_month, format_year_month_label,
    normalize_to_month_start, step_months,
};
pub use grid::{DayCell, MonthGrid, generate_month_grid, leading_blanks};
pub use locale::{Locale, SymbolWidth};
pub use paging::{Direction, MonthPage, PagingController, PagingError, Slot};
pub use types::{WeekdayNumber, is_leap_year};
pub use weekday::{
    WeekdayHeader, WeekdayLabel, weekday_for_column, weekday_header, weekday_header_with,
};

use crate::prelude::*;

/// Errors building a `CalendarConfig` or one of its parts.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ConfigError {
    #[display(fmt = "Invalid first weekday: {} (must be {}-{})", "_0", MIN_WEEKDAY, MAX_WEEKDAY)]
    InvalidFirstWeekday(u8),
    #[display(fmt = "Unsupported locale: {_0}")]
    UnsupportedLocale(String),
    #[display(fmt = "Empty locale identifier")]
    EmptyLocale,
}

impl std::error::Error for ConfigError {}

/// Errors parsing or building a `MonthAnchor`.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid year-month format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u32),
    #[display(fmt = "Month {year}-{month:02} is outside the supported date range")]
    OutOfRange { year: i32, month: u32 },
    #[display(fmt = "Empty year-month string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}
