//! Web entry point for egui/eframe applications
//!
//! The app crate registers its creator through the `eframe_app!` macro (a
//! `#[wasm_bindgen(start)]` function); JavaScript then builds a [`WebHandle`]
//! and calls `start(canvas)`.

use once_cell::sync::OnceCell;
use wasm_bindgen::prelude::*;

use crate::{AppCreator, AppInfo, LaunchError};

static REGISTERED_APP: OnceCell<(AppInfo, AppCreator)> = OnceCell::new();

/// Register the app started by [`WebHandle::start`]. Only the first registration wins.
pub fn register_app(app_info: AppInfo, creator: AppCreator) {
    if REGISTERED_APP.set((app_info, creator)).is_err() {
        tracing::warn!(
            "{} registered twice; keeping the first registration",
            app_info.name
        );
    }
}

fn log_level() -> tracing::Level {
    match crate::cli::get_env::<String>("LOG_LEVEL")
        .map(|level| level.to_uppercase())
        .as_deref()
    {
        Some("TRACE") => tracing::Level::TRACE,
        Some("DEBUG") => tracing::Level::DEBUG,
        Some("INFO") => tracing::Level::INFO,
        Some("WARN") => tracing::Level::WARN,
        Some("ERROR") => tracing::Level::ERROR,
        _ if cfg!(debug_assertions) => tracing::Level::DEBUG,
        _ => tracing::Level::INFO,
    }
}

/// Handle to the web app from JavaScript.
#[derive(Clone)]
#[wasm_bindgen]
pub struct WebHandle {
    runner: eframe::WebRunner,
}

#[wasm_bindgen]
impl WebHandle {
    /// Installs logging and a panic hook, then returns.
    #[allow(clippy::new_without_default)]
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        // Parse env early so LOG_LEVEL is visible below
        crate::cli::parse_env();
        {
            use tracing_subscriber::layer::SubscriberExt;
            use tracing_subscriber::util::SubscriberInitExt;
            use tracing_wasm::WASMLayerConfigBuilder;

            let mut builder = WASMLayerConfigBuilder::new();
            builder.set_max_level(log_level());
            let _ = tracing_subscriber::registry()
                .with(tracing_wasm::WASMLayer::new(builder.build()))
                .try_init();
        }
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));

        Self {
            runner: eframe::WebRunner::new(),
        }
    }

    /// Call this once from JavaScript to start your app.
    #[wasm_bindgen]
    pub async fn start(&self, canvas: web_sys::HtmlCanvasElement) -> Result<(), JsValue> {
        let Some(&(app_info, creator)) = REGISTERED_APP.get() else {
            let err = LaunchError::NotRegistered;
            tracing::error!("{err}");
            return Err(JsValue::from_str(&err.to_string()));
        };

        crate::log_version_info(&app_info);

        self.runner
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(move |cc| Ok(creator(cc))),
            )
            .await
            .inspect_err(|js_err| {
                tracing::error!("{}", LaunchError::WebRunner(format!("{js_err:?}")));
            })
    }

    /// Destroys the app and frees resources.
    #[wasm_bindgen]
    pub fn destroy(&self) {
        self.runner.destroy();
    }

    /// The JavaScript can check whether or not your app has crashed.
    #[wasm_bindgen]
    pub fn has_panicked(&self) -> bool {
        self.runner.has_panicked()
    }

    /// Returns the panic message if the app has panicked.
    #[wasm_bindgen]
    pub fn panic_message(&self) -> Option<String> {
        self.runner.panic_summary().map(|s| s.message())
    }

    /// Returns the panic callstack if the app has panicked.
    #[wasm_bindgen]
    pub fn panic_callstack(&self) -> Option<String> {
        self.runner.panic_summary().map(|s| s.callstack())
    }
}
