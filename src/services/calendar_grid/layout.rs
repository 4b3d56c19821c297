use std::iter::FusedIterator;

use super::{days_in_month, first_weekday, GridError, DAYS_IN_WEEK};
use crate::models::layout::{CellContent, CellRect, LineSegment, PlacedCell};
use crate::utils::date::weekday_name;

/// Grid rows in the tallest month: the weekday row plus six day rows.
pub const MAX_GRID_ROWS: u32 = 7;

/// Cell and header sizes shared by a single layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
struct CellSize {
    width: f32,
    height: f32,
    header: f32,
}

impl CellSize {
    fn new(width: f32, height: f32, header: f32) -> Result<Self, GridError> {
        if !(width.is_finite() && width > 0.0) {
            return Err(GridError::invalid(format!(
                "cell width must be positive, got {}",
                width
            )));
        }
        if !(height.is_finite() && height > 0.0) {
            return Err(GridError::invalid(format!(
                "cell height must be positive, got {}",
                height
            )));
        }
        if !(header.is_finite() && header >= 0.0) {
            return Err(GridError::invalid(format!(
                "header height must be non-negative, got {}",
                header
            )));
        }
        if !(DAYS_IN_WEEK as f32 * width).is_finite() {
            return Err(GridError::invalid(format!(
                "cell width {} overflows the grid width",
                width
            )));
        }
        if !(header + MAX_GRID_ROWS as f32 * height).is_finite() {
            return Err(GridError::invalid(format!(
                "cell height {} with header {} overflows the grid height",
                height, header
            )));
        }
        Ok(Self {
            width,
            height,
            header,
        })
    }

    fn rect(&self, row: u32, col: u32) -> CellRect {
        CellRect::new(
            self.x(col),
            self.y(row),
            self.x(col + 1),
            self.y(row + 1),
        )
    }

    fn x(&self, col: u32) -> f32 {
        col as f32 * self.width
    }

    fn y(&self, row: u32) -> f32 {
        self.header + row as f32 * self.height
    }
}

/// Cells of one month, weekday labels first, then days in order.
///
/// Produced by [`layout_month`]. The iterator is consumed as it is read;
/// call `layout_month` again for a second pass.
#[derive(Debug, Clone)]
pub struct MonthLayout {
    size: CellSize,
    leading: u32,
    days: u32,
    /// Index of the next cell: 0..7 are labels, 7.. are days.
    next: u32,
}

impl MonthLayout {
    /// Day rows the month occupies, not counting the weekday row.
    pub fn rows_used(&self) -> u32 {
        (self.leading + self.days).div_ceil(DAYS_IN_WEEK)
    }

    fn total(&self) -> u32 {
        self.days + DAYS_IN_WEEK
    }

    fn cell_at(&self, index: u32) -> PlacedCell {
        if index < DAYS_IN_WEEK {
            return PlacedCell {
                row: 0,
                col: index,
                rect: self.size.rect(0, index),
                content: CellContent::WeekdayLabel(weekday_name(index).unwrap_or_default()),
            };
        }

        let day = index - DAYS_IN_WEEK + 1;
        let offset = self.leading + day - 1;
        let row = 1 + offset / DAYS_IN_WEEK;
        let col = offset % DAYS_IN_WEEK;
        PlacedCell {
            row,
            col,
            rect: self.size.rect(row, col),
            content: CellContent::Day(day),
        }
    }
}

impl Iterator for MonthLayout {
    type Item = PlacedCell;

    fn next(&mut self) -> Option<PlacedCell> {
        if self.next >= self.total() {
            return None;
        }
        let cell = self.cell_at(self.next);
        self.next += 1;
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total().saturating_sub(self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MonthLayout {}

impl FusedIterator for MonthLayout {}

/// Lays out the weekday header and every day of `month` in `year`.
///
/// Row 0 holds "Sun".."Sat"; day 1 sits in row 1 under its weekday and the
/// rest follow left to right, wrapping after Saturday. Cell `(row, col)`
/// covers `(col*w, header + row*h)` to `((col+1)*w, header + (row+1)*h)`.
/// All arguments are checked before any cell is produced.
pub fn layout_month(
    year: i32,
    month: u32,
    cell_width: f32,
    cell_height: f32,
    header_height: f32,
) -> Result<MonthLayout, GridError> {
    let days = days_in_month(year, month)?;
    let leading = first_weekday(year, month)?;
    let size = CellSize::new(cell_width, cell_height, header_height)?;

    log::debug!(
        "Laying out {}-{:02}: {} days starting on weekday {}, cell {}x{}",
        year,
        month,
        days,
        leading,
        cell_width,
        cell_height
    );

    Ok(MonthLayout {
        size,
        leading,
        days,
        next: 0,
    })
}

/// Horizontal then vertical separators bounding a `rows` x `cols` grid.
///
/// `rows` counts every grid row, the weekday row included, and may not
/// exceed [`MAX_GRID_ROWS`]; `cols` may not exceed [`DAYS_IN_WEEK`]. The grid
/// starts at `header_height`, so the top line doubles as the header's bottom
/// edge.
pub fn grid_lines(
    rows: u32,
    cols: u32,
    cell_width: f32,
    cell_height: f32,
    header_height: f32,
) -> Result<Vec<LineSegment>, GridError> {
    if rows == 0 || cols == 0 {
        return Err(GridError::invalid(format!(
            "grid needs at least one row and column, got {}x{}",
            rows, cols
        )));
    }
    if rows > MAX_GRID_ROWS || cols > DAYS_IN_WEEK {
        return Err(GridError::invalid(format!(
            "grid is at most {}x{}, got {}x{}",
            MAX_GRID_ROWS, DAYS_IN_WEEK, rows, cols
        )));
    }
    let size = CellSize::new(cell_width, cell_height, header_height)?;

    let left = size.x(0);
    let right = size.x(cols);
    let top = size.y(0);
    let bottom = size.y(rows);

    let horizontal = (0..=rows).map(|row| {
        let y = size.y(row);
        LineSegment {
            x1: left,
            y1: y,
            x2: right,
            y2: y,
        }
    });
    let vertical = (0..=cols).map(|col| {
        let x = size.x(col);
        LineSegment {
            x1: x,
            y1: top,
            x2: x,
            y2: bottom,
        }
    });

    Ok(horizontal.chain(vertical).collect())
}
