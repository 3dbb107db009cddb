use chrono::Weekday;

use crate::locale::SymbolWidth;
use crate::prelude::*;
use crate::{CalendarConfig, DAYS_PER_WEEK, WeekdayNumber};

/// One column heading of a weekday header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{symbol}")]
pub struct WeekdayLabel {
    weekday: Weekday,
    symbol:  &'static str,
}

impl WeekdayLabel {
    pub const fn weekday(&self) -> Weekday {
        self.weekday
    }

    pub fn number(&self) -> WeekdayNumber {
        WeekdayNumber::from_weekday(self.weekday)
    }

    /// Localized symbol, e.g. `Mon` or `月`
    pub const fn symbol(&self) -> &'static str {
        self.symbol
    }
}

/// The seven column headings above a month grid, starting at the configured first weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deref)]
pub struct WeekdayHeader([WeekdayLabel; DAYS_PER_WEEK]);

impl WeekdayHeader {
    /// Symbols in column order
    pub fn symbols(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(WeekdayLabel::symbol)
    }
}

/// Short weekday labels in column order.
pub fn weekday_header(config: &CalendarConfig) -> WeekdayHeader {
    weekday_header_with(config, SymbolWidth::Short)
}

/// Weekday labels of the given width in column order.
///
/// Column `c` is `first_weekday.nth_after(c)`, the inverse of the offset that
/// places day 1 in `generate_month_grid`.
pub fn weekday_header_with(config: &CalendarConfig, width: SymbolWidth) -> WeekdayHeader {
    let first = config.first_weekday();
    let locale = config.locale();
    WeekdayHeader(std::array::from_fn(|column| {
        let weekday = first.nth_after(column).weekday();
        WeekdayLabel {
            weekday,
            symbol: locale.weekday_symbol(weekday, width),
        }
    }))
}

/// Weekday shown in `column`, or `None` for columns past the week.
pub fn weekday_for_column(config: &CalendarConfig, column: usize) -> Option<Weekday> {
    (column < DAYS_PER_WEEK).then(|| config.first_weekday().nth_after(column).weekday())
}
