// Property-based tests for the calendar grid engine
// Checks month arithmetic and layout invariants over random inputs

use calendar_viewer::services::calendar_grid::{
    days_in_month, first_weekday, grid_lines, layout_month, MAX_GRID_ROWS,
};
use proptest::prelude::*;

fn is_leap(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

proptest! {
    /// Property: February has 29 days exactly in leap years
    #[test]
    fn prop_february_length_follows_leap_rule(year in 1..10_000i32) {
        let expected = if is_leap(year) { 29 } else { 28 };
        prop_assert_eq!(days_in_month(year, 2).unwrap(), expected);
    }

    /// Property: the next month starts where this one leaves off
    #[test]
    fn prop_first_weekday_chains_across_months(
        year in 1..10_000i32,
        month in 1..=12u32,
    ) {
        let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
        let expected = (first_weekday(year, month).unwrap() + days_in_month(year, month).unwrap()) % 7;
        prop_assert_eq!(first_weekday(next_year, next_month).unwrap(), expected);
    }

    /// Property: years far past the usual date-library range still chain
    #[test]
    fn prop_first_weekday_chains_for_large_years(
        year in 262_143..i32::MAX,
        month in 1..=12u32,
    ) {
        let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
        let expected = (first_weekday(year, month).unwrap() + days_in_month(year, month).unwrap()) % 7;
        prop_assert_eq!(first_weekday(next_year, next_month).unwrap(), expected);
    }

    /// Property: large years lay out a full month like any other year
    #[test]
    fn prop_layout_accepts_large_years(
        year in 262_143..=i32::MAX,
        month in 1..=12u32,
    ) {
        let layout = layout_month(year, month, 40.0, 30.0, 12.0).unwrap();
        prop_assert_eq!(layout.count() as u32, days_in_month(year, month).unwrap() + 7);
    }

    /// Property: one label per weekday plus one cell per day, days in order
    #[test]
    fn prop_layout_cell_count_and_order(
        year in 1..10_000i32,
        month in 1..=12u32,
    ) {
        let cells: Vec<_> = layout_month(year, month, 40.0, 30.0, 12.0).unwrap().collect();
        let days = days_in_month(year, month).unwrap();
        prop_assert_eq!(cells.len() as u32, days + 7);

        let numbers: Vec<u32> = cells.iter().filter_map(|c| c.content.day()).collect();
        prop_assert_eq!(numbers, (1..=days).collect::<Vec<_>>());
        prop_assert!(cells[..7].iter().all(|c| c.is_weekday_label() && c.row == 0));
    }

    /// Property: no two placed cells overlap
    #[test]
    fn prop_layout_cells_never_overlap(
        year in 1..10_000i32,
        month in 1..=12u32,
        width in 1.0f32..200.0,
        height in 1.0f32..200.0,
        header in 0.0f32..100.0,
    ) {
        let cells: Vec<_> = layout_month(year, month, width, height, header).unwrap().collect();
        for (i, a) in cells.iter().enumerate() {
            for b in &cells[i + 1..] {
                prop_assert!(!a.rect.overlaps(&b.rect), "{:?} overlaps {:?}", a, b);
            }
        }
    }

    /// Property: rows between the first and last day are completely filled
    #[test]
    fn prop_layout_has_no_gaps_in_used_rows(
        year in 1..10_000i32,
        month in 1..=12u32,
    ) {
        let layout = layout_month(year, month, 10.0, 10.0, 0.0).unwrap();
        let rows_used = layout.rows_used();
        let cells: Vec<_> = layout.collect();
        let leading = first_weekday(year, month).unwrap();

        prop_assert!((4..=6).contains(&rows_used));
        for row in 2..rows_used {
            let in_row = cells.iter().filter(|c| c.row == row).count();
            prop_assert_eq!(in_row, 7);
        }
        let first_row = cells.iter().filter(|c| c.row == 1).count() as u32;
        prop_assert_eq!(first_row, 7 - leading);
        prop_assert!(cells.iter().all(|c| c.row <= rows_used));
    }

    /// Property: every rectangle follows the column/row formula
    #[test]
    fn prop_layout_rect_formula(
        year in 1..10_000i32,
        month in 1..=12u32,
        width in 1.0f32..200.0,
        height in 1.0f32..200.0,
        header in 0.0f32..100.0,
    ) {
        for cell in layout_month(year, month, width, height, header).unwrap() {
            prop_assert_eq!(cell.rect.left, cell.col as f32 * width);
            prop_assert_eq!(cell.rect.right, (cell.col + 1) as f32 * width);
            prop_assert_eq!(cell.rect.top, header + cell.row as f32 * height);
            prop_assert_eq!(cell.rect.bottom, header + (cell.row + 1) as f32 * height);
        }
    }

    /// Property: grid lines cover the grid edge to edge
    #[test]
    fn prop_grid_lines_bound_the_grid(
        rows in 1..=MAX_GRID_ROWS,
        cols in 1..=7u32,
        width in 1.0f32..100.0,
        height in 1.0f32..100.0,
    ) {
        let lines = grid_lines(rows, cols, width, height, 0.0).unwrap();
        prop_assert_eq!(lines.len() as u32, rows + cols + 2);
        let right = cols as f32 * width;
        let bottom = rows as f32 * height;
        for line in &lines[..(rows + 1) as usize] {
            prop_assert_eq!((line.x1, line.x2), (0.0, right));
        }
        for line in &lines[(rows + 1) as usize..] {
            prop_assert_eq!((line.y1, line.y2), (0.0, bottom));
        }
    }
}
