use super::CalendarApp;
use crate::models::displayed_month::DisplayedMonth;
use crate::models::settings::Settings;
use crate::services::settings::SettingsService;
use crate::ui_egui::theme::CalendarTheme;
use chrono::NaiveDate;

const WINDOW_TITLE: &str = "Calendar";

impl CalendarApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        displayed_month: DisplayedMonth,
        today: NaiveDate,
    ) -> Self {
        let active_theme = CalendarTheme::for_setting(&settings.theme);
        active_theme.apply_to_context(&cc.egui_ctx);

        log::info!(
            "Showing {} (theme={}, header={}px)",
            displayed_month.title(),
            settings.theme,
            settings.header_height
        );

        Self {
            displayed_month,
            today,
            settings,
            active_theme,
        }
    }
}

/// Window options for the calendar: fixed title, and the configured size
/// doubling as the minimum so the grid is never squeezed below it.
pub fn native_options(settings: &Settings) -> eframe::NativeOptions {
    let size = [settings.window_width, settings.window_height];
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(size)
            .with_min_inner_size(size),
        ..Default::default()
    }
}

pub fn load_settings_or_default(settings_service: &SettingsService) -> Settings {
    match settings_service.get() {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Failed to load settings: {:#}, using defaults", e);
            Settings::default()
        }
    }
}
