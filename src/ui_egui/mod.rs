mod app;
pub mod theme;
mod views;

pub use app::{load_settings_or_default, native_options, CalendarApp};
pub use views::{MonthFrame, MonthView};
