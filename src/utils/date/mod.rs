// Date utility functions

/// Short weekday names, indexed from Sunday = 0.
const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Checks `year >= 1` and `1 <= month <= 12`.
pub fn validate_year_month(year: i32, month: u32) -> Result<(), String> {
    if year < 1 {
        return Err(format!("year must be >= 1, got {}", year));
    }
    if !(1..=12).contains(&month) {
        return Err(format!("month must be in 1..=12, got {}", month));
    }
    Ok(())
}

/// Gregorian leap-year rule, applied proleptically.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Full English month name for `month` in 1..=12.
pub fn month_name(month: u32) -> Option<&'static str> {
    month
        .checked_sub(1)
        .and_then(|idx| MONTH_NAMES.get(idx as usize))
        .copied()
}

/// Short weekday name for a weekday index (0 = Sunday).
pub fn weekday_name(index: u32) -> Option<&'static str> {
    WEEKDAY_NAMES.get(index as usize).copied()
}

/// Sunday and Saturday columns.
pub fn is_weekend(index: u32) -> bool {
    index == 0 || index == 6
}
