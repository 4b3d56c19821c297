//! Source of "today" for choosing the displayed month.

use chrono::{Local, NaiveDate};

use crate::models::displayed_month::DisplayedMonth;

pub trait Clock {
    /// Current calendar date in the local time zone.
    fn today(&self) -> NaiveDate;
}

/// Reads the system clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    date: NaiveDate,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date
    }
}

/// The month containing the clock's current date.
pub fn current_month(clock: &dyn Clock) -> Result<DisplayedMonth, String> {
    DisplayedMonth::from_date(clock.today())
}
