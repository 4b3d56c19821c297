//! The month shown in the calendar window.

use chrono::{Datelike, NaiveDate};

use crate::utils::date::{month_name, validate_year_month};

/// A validated Gregorian year/month pair.
///
/// `CalendarApp` resolves this once at startup and only reads it afterwards.
/// A feature that switches months must write it from the UI thread that owns
/// the app, or put it behind a lock, so a repaint never sees a torn update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayedMonth {
    year: i32,
    month: u32,
}

impl DisplayedMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, String> {
        validate_year_month(year, month)?;
        Ok(Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Result<Self, String> {
        Self::new(date.year(), date.month())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Caption such as "January 2024".
    pub fn title(&self) -> String {
        format!("{} {}", month_name(self.month).unwrap_or_default(), self.year)
    }
}
