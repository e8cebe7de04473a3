//! UI panels for the application
//!
//! Painters turning a [`View`] into egui widgets. They hold no state of their
//! own; user input comes back to the caller as a [`ScreenAction`].

use crate::app::screen::{FeatureRow, View};
use egui::{Color32, CornerRadius, Frame, Margin, RichText, Ui};

/// Seconds the feature list takes to fade in.
const FEATURE_FADE_SECONDS: f32 = 0.25;

/// Tallest the feature card grows before it scrolls.
const FEATURE_LIST_MAX_HEIGHT: f32 = 320.0;

/// Something the user did on the screen this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenAction {
    ToggleFeatures,
}

/// Draw the whole screen for `view`.
pub fn show_screen(ctx: &egui::Context, view: &View) -> Option<ScreenAction> {
    let mut action = None;

    egui::TopBottomPanel::bottom("footer")
        .show_separator_line(false)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.label(RichText::new(view.footer).size(14.0).weak());
                ui.add_space(8.0);
            });
        });

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(32.0);
            header(ui, view);

            ui.add_space(16.0);
            platform_card(ui, &view.platform_card);

            ui.add_space(16.0);
            if toggle_button(ui, view.toggle_label) {
                action = Some(ScreenAction::ToggleFeatures);
            }

            ui.add_space(16.0);
            feature_list(ui, view.features.as_deref());
        });
    });

    action
}

fn header(ui: &mut Ui, view: &View) {
    ui.label(RichText::new(view.title).size(32.0).strong());
    let accent = ui.visuals().hyperlink_color;
    ui.label(RichText::new(view.subtitle).size(24.0).color(accent));
}

fn card_frame(fill: Color32) -> Frame {
    Frame::new()
        .fill(fill)
        .corner_radius(CornerRadius::same(12))
        .inner_margin(Margin::same(16))
}

fn platform_card(ui: &mut Ui, text: &str) {
    let fill = ui.visuals().selection.bg_fill.gamma_multiply(0.35);
    card_frame(fill).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(text).size(18.0).strong());
    });
}

fn toggle_button(ui: &mut Ui, label: &str) -> bool {
    ui.add(egui::Button::new(RichText::new(label).size(16.0)).min_size(egui::vec2(160.0, 36.0)))
        .clicked()
}

fn feature_list(ui: &mut Ui, rows: Option<&[FeatureRow]>) {
    profiling::scope!("feature_list");

    let opacity = ui.ctx().animate_bool_with_time(
        egui::Id::new("feature_list_fade"),
        rows.is_some(),
        FEATURE_FADE_SECONDS,
    );
    let Some(rows) = rows else {
        return;
    };

    ui.scope(|ui| {
        ui.multiply_opacity(opacity);
        card_frame(ui.visuals().faint_bg_color).show(ui, |ui| {
            ui.set_width(ui.available_width());
            egui::ScrollArea::vertical()
                .max_height(FEATURE_LIST_MAX_HEIGHT)
                .auto_shrink([false, true])
                .show(ui, |ui| {
                    for row in rows {
                        feature_row(ui, row);
                    }
                });
        });
    });
}

fn feature_row(ui: &mut Ui, row: &FeatureRow) {
    ui.horizontal(|ui| {
        let accent = ui.visuals().hyperlink_color;
        ui.label(RichText::new(row.glyph).size(20.0).color(accent));
        ui.add_space(8.0);
        ui.label(RichText::new(row.text).size(16.0));
    });
    ui.add_space(4.0);
}

/// Version, platform and profiling controls (toggled with F12).
pub fn diagnostics_window(ctx: &egui::Context, open: &mut bool, version: &str, platform: &str) {
    egui::Window::new("Diagnostics")
        .open(open)
        .resizable(false)
        .collapsible(false)
        .show(ctx, |ui| {
            ui.label(version);
            ui.label(format!("Platform: {platform}"));
            ui.separator();
            eframe_entrypoints::profiling_ui(ui);
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::headless;
    use crate::app::screen::{CHECK_GLYPH, FEATURES, FeatureVisibility, render};

    fn run_frame(
        ctx: &egui::Context,
        view: &View,
        events: Vec<egui::Event>,
    ) -> (Option<ScreenAction>, egui::FullOutput) {
        let mut action = None;
        let output = ctx.run(headless::input(events), |ctx| {
            action = show_screen(ctx, view);
        });
        (action, output)
    }

    fn painted_features(output: &egui::FullOutput) -> Vec<String> {
        headless::texts(output)
            .into_iter()
            .map(|(text, _)| text)
            .filter(|text| FEATURES.contains(&text.as_str()))
            .collect()
    }

    /// Click at `pos` over three frames and return every action reported.
    fn click(ctx: &egui::Context, view: &View, pos: egui::Pos2) -> Vec<ScreenAction> {
        headless::click_frames(pos)
            .into_iter()
            .filter_map(|events| run_frame(ctx, view, events).0)
            .collect()
    }

    #[test]
    fn test_collapsed_screen_paints_without_input() {
        let view = render("Test", &FEATURES, FeatureVisibility::Collapsed);
        let ctx = egui::Context::default();
        assert_eq!(run_frame(&ctx, &view, Vec::new()).0, None);
    }

    #[test]
    fn test_clicking_the_button_requests_a_toggle() {
        let view = render("Test", &FEATURES, FeatureVisibility::Collapsed);
        let ctx = egui::Context::default();
        let (_, output) = run_frame(&ctx, &view, Vec::new());
        let button = headless::text_center(&output, "Show Features").expect("button is painted");

        assert_eq!(
            click(&ctx, &view, button),
            vec![ScreenAction::ToggleFeatures]
        );
    }

    #[test]
    fn test_clicking_elsewhere_does_not_toggle() {
        let view = render("Test", &FEATURES, FeatureVisibility::Collapsed);
        let ctx = egui::Context::default();
        let (_, output) = run_frame(&ctx, &view, Vec::new());

        for label in ["Multiplatform Showcase", "Running on: Test", "Built with egui"] {
            let pos = headless::text_center(&output, label).expect("label is painted");
            assert!(click(&ctx, &view, pos).is_empty(), "click on {label}");
        }
    }

    #[test]
    fn test_expanded_screen_paints_every_feature_in_order() {
        let ctx = egui::Context::default();
        let expanded = render("Test", &FEATURES, FeatureVisibility::Expanded);
        let (_, output) = run_frame(&ctx, &expanded, Vec::new());

        assert_eq!(painted_features(&output), FEATURES.to_vec());
        let glyphs = headless::texts(&output)
            .into_iter()
            .filter(|(text, _)| text == CHECK_GLYPH)
            .count();
        assert_eq!(glyphs, FEATURES.len());
    }

    #[test]
    fn test_collapsed_screen_paints_no_features() {
        let ctx = egui::Context::default();
        let collapsed = render("Test", &FEATURES, FeatureVisibility::Collapsed);
        let (_, output) = run_frame(&ctx, &collapsed, Vec::new());

        assert!(painted_features(&output).is_empty());
        assert!(headless::text_center(&output, "Show Features").is_some());
    }

    #[test]
    fn test_diagnostics_window_paints() {
        let ctx = egui::Context::default();
        let mut open = true;
        let _ = ctx.run(headless::input(Vec::new()), |ctx| {
            diagnostics_window(ctx, &mut open, "Demo 0.1.0", "Test");
        });
        assert!(open);
    }
}
