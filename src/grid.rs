//! Fixed 6x7 month grids.
//!
//! A grid is a pure function of `(MonthAnchor, CalendarConfig)`: blanks up to
//! the column of the month's first weekday, then every day of the month in
//! order, then blanks until the grid holds [`GRID_CELLS`] cells.

use chrono::{Datelike, Days, NaiveDate};

use crate::date_math::{days_in_month, format_year_month_label};
use crate::prelude::*;
use crate::{CalendarConfig, DAYS_PER_WEEK, GRID_CELLS, MonthAnchor};

/// One slot in a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum DayCell {
    /// Filler before the first or after the last day of the month
    #[default]
    #[display(fmt = "")]
    Blank,
    /// A day of the grid's month
    #[display(fmt = "{}", "_0.day()")]
    Day(NaiveDate),
}

impl DayCell {
    pub const fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }

    /// The date in this cell, if any
    pub const fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::Day(date) => Some(*date),
            Self::Blank => None,
        }
    }

    /// Day of month (1-based), if any
    pub fn day_of_month(&self) -> Option<u32> {
        self.date().map(|date| date.day())
    }
}

/// A month laid out as 6 rows of 7 columns.
///
/// Column `c` shows weekday `first_weekday + c` of the config it was built with,
/// the same order `weekday_header` yields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MonthGrid {
    anchor:         MonthAnchor,
    label:          String,
    leading_blanks: usize,
    day_count:      usize,
    cells:          [DayCell; GRID_CELLS],
}

impl MonthGrid {
    pub const fn anchor(&self) -> MonthAnchor {
        self.anchor
    }

    /// Localized year-month title
    pub fn label(&self) -> &str {
        &self.label
    }

    /// All cells in row-major order
    pub const fn cells(&self) -> &[DayCell; GRID_CELLS] {
        &self.cells
    }

    /// Cell at `row`, `column`, or `None` outside the grid
    pub fn cell(&self, row: usize, column: usize) -> Option<&DayCell> {
        if column >= DAYS_PER_WEEK {
            return None;
        }
        self.cells.get(row * DAYS_PER_WEEK + column)
    }

    /// The six week rows
    pub fn rows(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks_exact(DAYS_PER_WEEK)
    }

    /// Blank cells before day 1, always in `0..7`
    pub const fn leading_blanks(&self) -> usize {
        self.leading_blanks
    }

    /// Blank cells after the last placed day
    pub const fn trailing_blanks(&self) -> usize {
        GRID_CELLS.saturating_sub(self.leading_blanks + self.day_count)
    }

    /// Number of days of the month the grid holds
    pub const fn day_count(&self) -> usize {
        self.day_count
    }

    /// Dates of the month in grid order
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.cells.iter().filter_map(DayCell::date)
    }

    /// `(row, column)` of the given day of month
    pub fn position_of(&self, day: u32) -> Option<(usize, usize)> {
        self.cells
            .iter()
            .position(|cell| cell.day_of_month() == Some(day))
            .map(|index| (index / DAYS_PER_WEEK, index % DAYS_PER_WEEK))
    }
}

/// Number of blank cells before day 1 of `anchor`'s month.
///
/// This is the offset between the month's first weekday and the configured
/// first weekday, so it is always in `0..7`.
pub fn leading_blanks(anchor: &MonthAnchor, config: &CalendarConfig) -> usize {
    usize::from(anchor.weekday_number().offset_from(config.first_weekday()))
}

/// Builds the 42-cell grid for `anchor`'s month.
///
/// Each day is computed by adding its offset to the month's first day. A day
/// that cannot be computed is left blank; the rest of the grid is still built.
/// Days that would not fit in the grid are dropped, which cannot happen for
/// Gregorian months (at most 6 + 31 cells).
pub fn generate_month_grid(anchor: &MonthAnchor, config: &CalendarConfig) -> MonthGrid {
    let days = days_in_month(anchor, config);
    let leading = leading_blanks(anchor, config);
    log::trace!("generating grid for {anchor}: {leading} leading blanks, {days} days");

    let mut cells = [DayCell::Blank; GRID_CELLS];
    let mut day_count = 0;
    for (slot, offset) in cells.iter_mut().skip(leading).zip(0..days) {
        match anchor.date().checked_add_days(Days::new(u64::from(offset))) {
            Some(date) => *slot = DayCell::Day(date),
            None => log::warn!("cannot compute day {} of {anchor}; leaving it blank", offset + 1),
        }
        day_count += 1;
    }

    if day_count < days as usize {
        log::warn!(
            "{anchor} needs {} cells; {} days do not fit the grid",
            leading + days as usize,
            days as usize - day_count
        );
    }

    MonthGrid {
        anchor: *anchor,
        label: format_year_month_label(anchor, config),
        leading_blanks: leading,
        day_count,
        cells,
    }
}
