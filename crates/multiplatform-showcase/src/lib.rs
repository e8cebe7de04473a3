//! Multiplatform Showcase - Application Library
//!
//! A single screen with a platform card and a toggleable feature list, built
//! for desktop, web and Android from the same code.

mod app;
pub mod platform;

pub use app::ShowcaseApp;
pub use app::screen;

// Define all platform entry points using the unified macro
eframe_entrypoints::eframe_app!("Multiplatform Showcase", |cc| Box::new(
    ShowcaseApp::new(cc)
));
