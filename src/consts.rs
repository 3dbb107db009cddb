/// Number of rows in every month grid
pub const GRID_ROWS: usize = 6;

/// Number of columns in every month grid, one per weekday
pub const DAYS_PER_WEEK: usize = 7;

/// Number of cells in every month grid (42)
pub const GRID_CELLS: usize = GRID_ROWS * DAYS_PER_WEEK;

/// Lowest weekday number (Sunday)
pub const MIN_WEEKDAY: u8 = 1;

/// Highest weekday number (Saturday)
pub const MAX_WEEKDAY: u8 = 7;

/// Weekday number for Sunday
pub const SUNDAY: u8 = 1;
/// Weekday number for Monday
pub const MONDAY: u8 = 2;
/// Weekday number for Saturday
pub const SATURDAY: u8 = 7;

/// Maximum valid month (December)
pub const MAX_MONTH: u32 = 12;

/// Month number for February
pub const FEBRUARY: u32 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u32 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u32; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Year-month separator used by `MonthAnchor`'s text form
pub const YEAR_MONTH_SEPARATOR: char = '-';

/// Number of month pages held by the pager
pub const PAGE_COUNT: usize = 3;
