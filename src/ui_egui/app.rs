//! eframe application hosting the configuration panel.

use crate::models::settings::Settings;
use crate::services::settings::SettingsService;
use crate::ui_egui::panel::{render_config_panel, ConfigPanel};
use crate::ui_egui::theme::CalendarTheme;
use chrono::Local;

pub struct DemoApp {
    /// Calendar display and its configuration controls
    panel: ConfigPanel,
    /// Currently applied theme colors
    active_theme: CalendarTheme,
}

impl DemoApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: &Settings) -> Self {
        let active_theme = CalendarTheme::for_preference(settings.theme);
        active_theme.apply_to_context(&cc.egui_ctx);

        let locale = SettingsService::preferred_locale(settings);
        log::info!(
            "Starting with locale {} ({}), dark theme: {}",
            locale.code(),
            locale.label(),
            active_theme.is_dark
        );

        Self {
            panel: ConfigPanel::new(Local::now().date_naive(), locale),
            active_theme,
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let events = egui::CentralPanel::default()
            .show(ctx, |ui| {
                egui::ScrollArea::both()
                    .auto_shrink([false; 2])
                    .show(ui, |ui| render_config_panel(ui, &self.panel, &self.active_theme))
                    .inner
            })
            .inner;

        if !events.is_empty() {
            self.panel.handle_all(events);
            ctx.request_repaint();
        }
    }
}
