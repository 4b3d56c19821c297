// Module exports for models

pub mod displayed_month;
pub mod layout;
pub mod settings;
