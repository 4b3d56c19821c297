pub mod month_view;

pub use month_view::{MonthFrame, MonthView};
