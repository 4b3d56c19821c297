//! Calendar grid engine.
//!
//! Pure date arithmetic and month-grid geometry. Nothing in here draws; the
//! month view turns the cells and lines computed here into paint calls.

mod error;
mod layout;

pub use error::GridError;
pub use layout::{grid_lines, layout_month, MonthLayout, MAX_GRID_ROWS};

use crate::utils::date::{self, is_leap_year};

/// Days per month in a common year, January first.
const DAYS_PER_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Month offsets for Sakamoto's weekday method, January first.
const WEEKDAY_OFFSETS: [i64; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

/// Number of weekday columns in the grid.
pub const DAYS_IN_WEEK: u32 = 7;

/// Checks `year >= 1` and `1 <= month <= 12`.
pub fn validate_year_month(year: i32, month: u32) -> Result<(), GridError> {
    date::validate_year_month(year, month).map_err(GridError::InvalidArgument)
}

/// Number of days in `month` of `year` under the proleptic Gregorian calendar.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, GridError> {
    validate_year_month(year, month)?;
    if month == 2 && is_leap_year(year) {
        return Ok(29);
    }
    Ok(DAYS_PER_MONTH[(month - 1) as usize])
}

/// Weekday of the first day of the month, 0 = Sunday through 6 = Saturday.
///
/// Accepts every year `days_in_month` accepts.
pub fn first_weekday(year: i32, month: u32) -> Result<u32, GridError> {
    validate_year_month(year, month)?;
    // January and February count as months 13 and 14 of the previous year.
    let y = i64::from(year) - i64::from(month < 3);
    let weekday =
        (y + y / 4 - y / 100 + y / 400 + WEEKDAY_OFFSETS[(month - 1) as usize] + 1).rem_euclid(7);
    Ok(weekday as u32)
}

/// Number of day rows (excluding the weekday header row) the month occupies.
pub fn month_row_count(year: i32, month: u32) -> Result<u32, GridError> {
    let leading = first_weekday(year, month)?;
    let days = days_in_month(year, month)?;
    Ok((leading + days).div_ceil(DAYS_IN_WEEK))
}
