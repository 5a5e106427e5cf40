// Calendar Widget Demo
// Main entry point

use calendar_widget_demo::models::settings::Settings;
use calendar_widget_demo::services::settings::SettingsService;
use calendar_widget_demo::ui_egui::DemoApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Calendar Widget demo");

    let settings = load_settings_or_default();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Calendar Widget")
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Calendar Widget",
        options,
        Box::new(move |cc| Ok(Box::new(DemoApp::new(cc, &settings)))),
    )
}

fn load_settings_or_default() -> Settings {
    let Some(service) = SettingsService::from_default_location() else {
        log::warn!("No configuration directory available, using defaults");
        return Settings::default();
    };

    match service.load() {
        Ok(settings) => {
            log::info!("Loaded settings from {}", service.path().display());
            settings
        }
        Err(e) => {
            log::warn!("Failed to load settings: {:#}, using defaults", e);
            Settings::default()
        }
    }
}
