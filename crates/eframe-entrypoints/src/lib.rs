//! Cross-platform entry points system for egui/eframe applications
//!
//! This crate provides reusable entry points for native (desktop/mobile) and web platforms,
//! along with utilities for CLI parsing, logging, profiling, and build metadata.
//!
//! # Usage
//!
//! In your application's `lib.rs`, use the `eframe_app!` macro to define all entry points:
//!
//! ```ignore
//! eframe_entrypoints::eframe_app!(
//!     "My App Name",
//!     |cc| Box::new(MyApp::new(cc))
//! );
//! ```
//!
//! This generates:
//! - Web: a `#[wasm_bindgen(start)]` function registering the app for [`WebHandle`]
//! - Android: `android_main` entry point
//! - Native: `run_native()` function to call from `main.rs`
//!
//! In your `main.rs`:
//!
//! ```ignore
//! fn main() {
//!     if let Err(err) = my_app::run_native() {
//!         eprintln!("{err}");
//!     }
//! }
//! ```

pub mod cli;
mod error;
mod metadata;
pub mod profiling;

#[cfg(target_arch = "wasm32")]
pub mod web;

// Re-export commonly used types
pub use cli::{get_env, parse_args, parse_env};
pub use error::LaunchError;
pub use metadata::{AppInfo, log_version_info, short_version_info};
pub use profiling::profiling_ui;

#[cfg(target_arch = "wasm32")]
pub use web::WebHandle;

// Re-export eframe types commonly needed for app creation
pub use eframe;
pub use eframe::CreationContext;

/// Signature of the function that builds the root [`eframe::App`].
pub type AppCreator = fn(&eframe::CreationContext<'_>) -> Box<dyn eframe::App>;

/// Unified macro to define all platform entry points for an eframe application.
///
/// # Arguments
///
/// * `$app_name` - A string literal with the application name (window title, logging, etc.)
/// * `$app_creator` - A non-capturing closure that takes `&CreationContext` and returns
///   `Box<dyn eframe::App>`
///
/// The calling crate must depend on `winit` (Android) and `wasm-bindgen` (web) for the
/// generated code to resolve.
///
/// # Generated Code
///
/// For **Web (WASM)** targets, generates a `register_eframe_app` start function that hands
/// the creator to [`WebHandle`].
///
/// For **Android** targets, generates:
/// ```ignore
/// #[no_mangle]
/// pub fn android_main(app: winit::platform::android::activity::AndroidApp) { ... }
/// ```
///
/// For **native** targets, generates:
/// ```ignore
/// pub fn run_native() -> Result<(), eframe_entrypoints::LaunchError> { ... }
/// ```
#[macro_export]
macro_rules! eframe_app {
    ($app_name:expr, $app_creator:expr) => {
        /// Name and version reported by the generated entry points.
        pub const APP_INFO: $crate::AppInfo =
            $crate::AppInfo::new($app_name, env!("CARGO_PKG_VERSION"));

        // ==========================================
        // Web (WASM) entry point
        // ==========================================
        #[cfg(target_arch = "wasm32")]
        #[::wasm_bindgen::prelude::wasm_bindgen(start)]
        pub fn register_eframe_app() {
            let creator: $crate::AppCreator = $app_creator;
            $crate::web::register_app(APP_INFO, creator);
        }

        // ==========================================
        // Android entry point
        // ==========================================
        #[cfg(target_os = "android")]
        #[unsafe(no_mangle)] // SAFETY: there is no other global function of this name
        pub fn android_main(app: ::winit::platform::android::activity::AndroidApp) {
            let creator: $crate::AppCreator = $app_creator;
            $crate::android_main_impl(APP_INFO, app, creator);
        }

        // ==========================================
        // Native entry point (called from main.rs)
        // ==========================================
        /// Run the application on native (desktop) platforms.
        ///
        /// Blocks until the window is closed.
        #[cfg(not(target_arch = "wasm32"))]
        pub fn run_native() -> Result<(), $crate::LaunchError> {
            let creator: $crate::AppCreator = $app_creator;
            $crate::native_main_impl(APP_INFO, creator)
        }
    };
}

/// Internal implementation for Android entry point.
/// Use the `eframe_app!` macro instead of calling this directly.
#[cfg(target_os = "android")]
#[doc(hidden)]
pub fn android_main_impl(
    app_info: AppInfo,
    app: winit::platform::android::activity::AndroidApp,
    app_creator: AppCreator,
) {
    use winit::platform::android::EventLoopBuilderExtAndroid;

    android_logger::init_once(
        android_logger::Config::default().with_max_level(log::LevelFilter::Info),
    );
    log::info!("Starting {} on Android", app_info.name);

    unsafe {
        // Safe: single-threaded at startup
        std::env::set_var("RUST_BACKTRACE", "full");
    }

    log_version_info(&app_info);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_title(app_info.name),
        event_loop_builder: Some(Box::new(move |builder| {
            builder.with_android_app(app);
        })),
        ..Default::default()
    };

    if let Err(err) = eframe::run_native(
        app_info.name,
        native_options,
        Box::new(move |cc| Ok(app_creator(cc))),
    )
    .map_err(LaunchError::from)
    {
        log::error!("{err}");
    }
}

/// Internal implementation for native (desktop) entry point.
/// Use the `eframe_app!` macro instead of calling this directly.
#[cfg(not(target_arch = "wasm32"))]
#[doc(hidden)]
pub fn native_main_impl(app_info: AppInfo, app_creator: AppCreator) -> Result<(), LaunchError> {
    // This MUST be done before any logging, so both fmt and chrome layers
    // are registered together in the same subscriber
    profiling::setup_logging_and_profiling();

    log_version_info(&app_info);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 760.0])
            .with_min_inner_size([320.0, 480.0])
            .with_title(app_info.name),
        ..Default::default()
    };

    eframe::run_native(
        app_info.name,
        native_options,
        Box::new(move |cc| Ok(app_creator(cc))),
    )?;

    tracing::info!("{} window closed, exiting", app_info.name);
    Ok(())
}
