//! Geometry values produced by the calendar grid engine.
//!
//! Everything here is in drawing-surface pixels relative to the top-left
//! corner of the area handed to the engine.

/// An axis-aligned rectangle given by its edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl CellRect {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Returns true if the interiors intersect. Rectangles that only share
    /// an edge do not overlap.
    pub fn overlaps(&self, other: &CellRect) -> bool {
        let horizontal = self.right.min(other.right) - self.left.max(other.left);
        let vertical = self.bottom.min(other.bottom) - self.top.max(other.top);
        horizontal > 0.0 && vertical > 0.0
    }
}

/// What a placed cell displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellContent {
    /// Weekday header ("Sun".."Sat")
    WeekdayLabel(&'static str),
    /// Day of the month, starting at 1
    Day(u32),
}

impl CellContent {
    pub fn text(&self) -> String {
        match self {
            CellContent::WeekdayLabel(name) => (*name).to_string(),
            CellContent::Day(day) => day.to_string(),
        }
    }

    pub fn day(&self) -> Option<u32> {
        match self {
            CellContent::Day(day) => Some(*day),
            CellContent::WeekdayLabel(_) => None,
        }
    }
}

/// A grid cell bound to a row/column, a rectangle and its display content.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedCell {
    pub row: u32,
    pub col: u32,
    pub rect: CellRect,
    pub content: CellContent,
}

impl PlacedCell {
    pub fn is_weekday_label(&self) -> bool {
        matches!(self.content, CellContent::WeekdayLabel(_))
    }
}

/// A straight separator line from `(x1, y1)` to `(x2, y2)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl LineSegment {
    pub fn is_horizontal(&self) -> bool {
        self.y1 == self.y2
    }

    pub fn is_vertical(&self) -> bool {
        self.x1 == self.x2
    }
}
