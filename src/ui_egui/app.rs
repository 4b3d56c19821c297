mod lifecycle;

pub use self::lifecycle::{load_settings_or_default, native_options};

use crate::models::displayed_month::DisplayedMonth;
use crate::models::settings::Settings;
use crate::ui_egui::theme::CalendarTheme;
use crate::ui_egui::views::MonthView;
use chrono::NaiveDate;

pub struct CalendarApp {
    /// Month shown in the grid; resolved once at startup
    displayed_month: DisplayedMonth,
    /// Date highlighted in the grid
    today: NaiveDate,
    settings: Settings,
    /// Currently applied theme colors
    active_theme: CalendarTheme,
}

impl eframe::App for CalendarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            MonthView::show(
                ui,
                &self.displayed_month,
                self.today,
                self.settings.header_height,
                &self.active_theme,
            );
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        log::info!("Calendar window closed");
    }
}
