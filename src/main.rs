// Calendar Viewer
// Main entry point

use anyhow::{anyhow, Result};
use calendar_viewer::services::clock::{current_month, Clock, SystemClock};
use calendar_viewer::services::settings::SettingsService;
use calendar_viewer::ui_egui::{load_settings_or_default, native_options, CalendarApp};

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Calendar Viewer");

    let settings_service = SettingsService::from_default_location();
    let settings = load_settings_or_default(&settings_service);

    let clock = SystemClock;
    let today = clock.today();
    let displayed_month = current_month(&clock)
        .map_err(|e| anyhow!("System clock reports an unusable date: {}", e))?;

    log::info!(
        "Opening {}x{} window for {}",
        settings.window_width,
        settings.window_height,
        displayed_month.title()
    );

    let options = native_options(&settings);
    eframe::run_native(
        "Calendar",
        options,
        Box::new(move |cc| {
            Ok(Box::new(CalendarApp::new(
                cc,
                settings,
                displayed_month,
                today,
            )))
        }),
    )
    .map_err(|e| {
        log::error!("Failed to create calendar window: {}", e);
        anyhow!("failed to create calendar window: {}", e)
    })
}
