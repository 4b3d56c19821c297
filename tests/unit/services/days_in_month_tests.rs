// Table tests for the month-length and first-weekday calculations

use calendar_viewer::services::calendar_grid::{
    days_in_month, first_weekday, layout_month, GridError,
};
use test_case::test_case;

#[test_case(2023, 1, 31; "january")]
#[test_case(2023, 2, 28; "february common year")]
#[test_case(2024, 2, 29; "february leap year")]
#[test_case(2000, 2, 29; "february divisible by 400")]
#[test_case(1900, 2, 28; "february divisible by 100")]
#[test_case(2023, 4, 30; "april")]
#[test_case(2023, 6, 30; "june")]
#[test_case(2023, 9, 30; "september")]
#[test_case(2023, 11, 30; "november")]
#[test_case(2023, 12, 31; "december")]
fn test_days_in_month(year: i32, month: u32, expected: u32) {
    assert_eq!(days_in_month(year, month).unwrap(), expected);
}

#[test_case(2024, 1, 1; "january 2024 starts monday")]
#[test_case(2024, 2, 4; "february 2024 starts thursday")]
#[test_case(2024, 9, 0; "september 2024 starts sunday")]
#[test_case(2026, 8, 6; "august 2026 starts saturday")]
#[test_case(2000, 1, 6; "january 2000 starts saturday")]
#[test_case(1970, 1, 4; "unix epoch month starts thursday")]
#[test_case(300_000, 1, 6; "year 300000 starts saturday")]
fn test_first_weekday(year: i32, month: u32, expected: u32) {
    assert_eq!(first_weekday(year, month).unwrap(), expected);
}

#[test_case(2024, 0; "month zero")]
#[test_case(2024, 13; "month thirteen")]
#[test_case(0, 6; "year zero")]
#[test_case(-44, 3; "negative year")]
fn test_invalid_year_month_rejected(year: i32, month: u32) {
    assert!(matches!(
        days_in_month(year, month),
        Err(GridError::InvalidArgument(_))
    ));
    assert!(matches!(
        first_weekday(year, month),
        Err(GridError::InvalidArgument(_))
    ));
    assert!(matches!(
        layout_month(year, month, 10.0, 10.0, 0.0),
        Err(GridError::InvalidArgument(_))
    ));
}

#[test_case(0.0, 10.0, 0.0; "zero width")]
#[test_case(10.0, -3.0, 0.0; "negative height")]
#[test_case(10.0, 10.0, -1.0; "negative header")]
#[test_case(f32::NAN, 10.0, 0.0; "nan width")]
#[test_case(f32::MAX, 10.0, 0.0; "width overflows grid")]
#[test_case(10.0, f32::MAX, 0.0; "height overflows grid")]
fn test_invalid_dimensions_rejected(width: f32, height: f32, header: f32) {
    assert!(matches!(
        layout_month(2024, 1, width, height, header),
        Err(GridError::InvalidArgument(_))
    ));
}
