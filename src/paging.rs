//! Three-page month pager.
//!
//! The pager always holds the months before, at and after its center. A swipe
//! lands on an outer slot with [`PagingController::select`]; once the host has
//! finished redrawing it calls [`PagingController::commit`], which moves the
//! center by one month and puts the selection back on the center slot. The
//! window the host shows is therefore always the same three slots, re-centered.

use crate::date_math::{format_year_month_label, step_months};
use crate::grid::{MonthGrid, generate_month_grid};
use crate::prelude::*;
use crate::{CalendarConfig, MonthAnchor, PAGE_COUNT, WeekdayHeader, weekday_header};

/// Error type for pager operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PagingError {
    /// The host reported a page index the pager does not have.
    #[error("Invalid page slot: {0} (must be 0-{max})", max = PAGE_COUNT - 1)]
    InvalidSlot(usize),
}

/// Stable page position inside the pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum Slot {
    #[display(fmt = "previous")]
    Previous,
    #[display(fmt = "center")]
    Center,
    #[display(fmt = "next")]
    Next,
}

impl Slot {
    pub const ALL: [Self; PAGE_COUNT] = [Self::Previous, Self::Center, Self::Next];

    /// Page index the host UI uses for this slot
    pub const fn index(self) -> usize {
        match self {
            Self::Previous => 0,
            Self::Center => 1,
            Self::Next => 2,
        }
    }

    /// Month offset of this slot from the center
    pub const fn month_offset(self) -> i32 {
        match self {
            Self::Previous => -1,
            Self::Center => 0,
            Self::Next => 1,
        }
    }

    /// Direction the center moves when this slot is committed
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Self::Previous => Some(Direction::Backward),
            Self::Center => None,
            Self::Next => Some(Direction::Forward),
        }
    }
}

impl TryFrom<usize> for Slot {
    type Error = PagingError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(PagingError::InvalidSlot(index))
    }
}

/// Direction of a one-month move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Direction {
    #[display(fmt = "backward")]
    Backward,
    #[display(fmt = "forward")]
    Forward,
}

impl Direction {
    pub const fn months(self) -> i32 {
        match self {
            Self::Backward => -1,
            Self::Forward => 1,
        }
    }
}

/// A month grid together with the slot it occupies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthPage {
    pub slot: Slot,
    pub grid: MonthGrid,
}

/// Holds the center month and the host's selected slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagingController {
    config:   CalendarConfig,
    center:   MonthAnchor,
    selected: Slot,
}

impl PagingController {
    /// Creates a pager centered on `center` with the center slot selected
    pub const fn new(center: MonthAnchor, config: CalendarConfig) -> Self {
        Self {
            config,
            center,
            selected: Slot::Center,
        }
    }

    /// Creates a pager centered on the current local month
    pub fn starting_today(config: CalendarConfig) -> Self {
        Self::new(MonthAnchor::current(&config), config)
    }

    pub const fn config(&self) -> &CalendarConfig {
        &self.config
    }

    pub const fn center(&self) -> MonthAnchor {
        self.center
    }

    /// Slot the host currently shows
    pub const fn selected(&self) -> Slot {
        self.selected
    }

    /// Shift waiting for `commit`, if the selection is off center
    pub const fn pending(&self) -> Option<Direction> {
        self.selected.direction()
    }

    /// Anchor shown in `slot`
    pub fn anchor_at(&self, slot: Slot) -> MonthAnchor {
        step_months(&self.center, slot.month_offset(), &self.config)
    }

    /// Anchors for the previous, center and next slots
    pub fn anchors(&self) -> [MonthAnchor; PAGE_COUNT] {
        Slot::ALL.map(|slot| self.anchor_at(slot))
    }

    /// Grids for the previous, center and next slots
    pub fn pages(&self) -> [MonthPage; PAGE_COUNT] {
        Slot::ALL.map(|slot| MonthPage {
            slot,
            grid: generate_month_grid(&self.anchor_at(slot), &self.config),
        })
    }

    /// Weekday header shared by all three pages
    pub fn header(&self) -> WeekdayHeader {
        weekday_header(&self.config)
    }

    /// Label of the center month
    pub fn title(&self) -> String {
        format_year_month_label(&self.center, &self.config)
    }

    /// Records the page index the host's swipe landed on.
    ///
    /// Returns the shift that `commit` will apply.
    ///
    /// # Errors
    /// Returns `PagingError::InvalidSlot` if `index` is not a page index.
    pub fn select(&mut self, index: usize) -> Result<Option<Direction>, PagingError> {
        self.selected = Slot::try_from(index)?;
        log::debug!("pager at {} selected {} page", self.center, self.selected);
        Ok(self.pending())
    }

    /// Applies the pending shift and resets the selection to the center slot.
    ///
    /// Meant to run after the host's current redraw has settled. A no-op when
    /// the center slot is selected.
    pub fn commit(&mut self) -> Option<Direction> {
        let direction = self.pending()?;
        self.shift_center(direction);
        Some(direction)
    }

    /// Moves the center one month in `direction` and selects the center slot.
    pub fn shift_center(&mut self, direction: Direction) {
        let previous = self.center;
        self.center = step_months(&self.center, direction.months(), &self.config);
        self.selected = Slot::Center;
        log::debug!("pager moved {direction} from {previous} to {}", self.center);
    }
}
