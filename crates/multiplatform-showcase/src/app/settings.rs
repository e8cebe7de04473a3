use clap::{Parser, ValueEnum};
use eframe_entrypoints::parse_args;

#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
/// Multiplatform Showcase - A single-screen egui demo that runs on desktop, web and Android
pub struct Settings {
    /// Color theme
    #[clap(long, value_enum, default_value_t = Theme::System)]
    pub theme: Theme,

    /// UI zoom factor (range: 0.5-3.0)
    #[clap(long, default_value = "1.0", value_parser = parse_zoom_factor)]
    pub zoom_factor: f32,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Follow the operating system
    #[default]
    System,
    Light,
    Dark,
}

impl From<Theme> for egui::ThemePreference {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::System => Self::System,
            Theme::Light => Self::Light,
            Theme::Dark => Self::Dark,
        }
    }
}

fn parse_zoom_factor(value: &str) -> Result<f32, String> {
    let zoom: f32 = value
        .parse()
        .map_err(|_| format!("`{value}` is not a number"))?;
    if (0.5..=3.0).contains(&zoom) {
        Ok(zoom)
    } else {
        Err(format!("{zoom} is outside 0.5-3.0"))
    }
}

impl Settings {
    /// Parse settings from the command line (native) or the page URL (web)
    pub fn from_cli() -> Self {
        match parse_args::<Settings>() {
            Ok(args) => args,
            Err(e) => {
                #[cfg(not(target_arch = "wasm32"))]
                e.exit();
                #[cfg(target_arch = "wasm32")]
                {
                    let user_msg = format!(
                        "Error parsing CLI:\n{}\n
    You should change the GET params, using the cli prefix.\n
    Starting anyway without args.",
                        e
                    );
                    if let Some(window) = web_sys::window() {
                        window.alert_with_message(&user_msg).unwrap_or(());
                    } else {
                        tracing::error!("{user_msg}");
                    }
                    Settings::parse_from(Vec::<String>::new()) // Default args on web if parsing fails
                }
            }
        }
    }

    /// Apply theme and zoom to the egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        ctx.set_theme(self.theme);
        ctx.set_zoom_factor(self.zoom_factor);
        tracing::debug!(
            "Applied theme {:?} with zoom factor {}",
            self.theme,
            self.zoom_factor
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::try_parse_from(["multiplatform-showcase"]).unwrap();
        assert_eq!(settings.theme, Theme::System);
        assert_eq!(settings.zoom_factor, 1.0);
    }

    #[test]
    fn test_theme_and_zoom_flags() {
        let settings = Settings::try_parse_from([
            "multiplatform-showcase",
            "--theme",
            "dark",
            "--zoom-factor",
            "1.5",
        ])
        .unwrap();
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.zoom_factor, 1.5);
    }

    #[test]
    fn test_zoom_factor_out_of_range_is_rejected() {
        assert!(Settings::try_parse_from(["app", "--zoom-factor", "10"]).is_err());
        assert!(Settings::try_parse_from(["app", "--zoom-factor", "big"]).is_err());
    }

    #[test]
    fn test_theme_maps_to_egui_preference() {
        assert_eq!(
            egui::ThemePreference::from(Theme::Dark),
            egui::ThemePreference::Dark
        );
        assert_eq!(
            egui::ThemePreference::from(Theme::default()),
            egui::ThemePreference::System
        );
    }

    #[test]
    fn test_apply_sets_theme_and_zoom_on_the_context() {
        let settings =
            Settings::try_parse_from(["app", "--theme", "dark", "--zoom-factor", "2"]).unwrap();
        let ctx = egui::Context::default();
        settings.apply(&ctx);
        // Zoom changes take effect when the next frame starts.
        let _ = ctx.run(egui::RawInput::default(), |_| {});

        assert_eq!(ctx.zoom_factor(), 2.0);
        assert_eq!(
            ctx.options(|o| o.theme_preference),
            egui::ThemePreference::Dark
        );
        assert_eq!(ctx.theme(), egui::Theme::Dark);
    }

    #[test]
    fn test_default_settings_keep_the_context_defaults() {
        let settings = Settings::try_parse_from(["app"]).unwrap();
        let ctx = egui::Context::default();
        settings.apply(&ctx);
        let _ = ctx.run(egui::RawInput::default(), |_| {});

        assert_eq!(ctx.zoom_factor(), 1.0);
        assert_eq!(
            ctx.options(|o| o.theme_preference),
            egui::ThemePreference::System
        );
    }
}
