//! Application module
//!
//! Hosts the showcase screen inside eframe:
//! - header, platform card, feature toggle and footer (see [`screen`])
//! - egui painting of the screen (see `ui_panels`)
//! - F12 diagnostics window with build info and profiling controls

#[cfg(test)]
mod headless;
pub mod screen;
pub(crate) mod settings;
mod ui_panels;

use crate::app::screen::ScreenController;
use crate::app::settings::Settings;
use crate::app::ui_panels::ScreenAction;
use crate::platform::CurrentPlatform;
use eframe::egui;

/// Main application structure
pub struct ShowcaseApp {
    /// The only screen of the app
    screen: ScreenController,

    /// Show the diagnostics window
    show_diagnostics: bool,

    /// Build summary shown in the diagnostics window
    version_info: String,
}

impl ShowcaseApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = Settings::from_cli();
        settings.apply(&cc.egui_ctx);
        Self::mount(&cc.egui_ctx)
    }

    /// Mount the screen and repaint `ctx` whenever its state changes.
    fn mount(ctx: &egui::Context) -> Self {
        let mut screen = ScreenController::mount(&CurrentPlatform);
        let repaint_ctx = ctx.clone();
        screen.subscribe(move || repaint_ctx.request_repaint());

        tracing::info!("Running on {}", screen.platform_name());

        Self {
            screen,
            show_diagnostics: false,
            version_info: eframe_entrypoints::short_version_info(&crate::APP_INFO),
        }
    }

    /// One frame of input handling and painting.
    fn show(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::F12)) {
            self.show_diagnostics = !self.show_diagnostics;
        }

        let view = self.screen.render();
        if let Some(ScreenAction::ToggleFeatures) = ui_panels::show_screen(ctx, &view) {
            self.screen.on_toggle();
        }

        if self.show_diagnostics {
            ui_panels::diagnostics_window(
                ctx,
                &mut self.show_diagnostics,
                &self.version_info,
                self.screen.platform_name(),
            );
        }
    }
}

#[profiling::all_functions]
impl eframe::App for ShowcaseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
        profiling::finish_frame!();
    }
}
