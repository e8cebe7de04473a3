/*!
Profiling and logging integration for eframe-entrypoints.

This module exposes a consistent API regardless of whether the profiling
feature is compiled in. There are two implementations:

- real: compiled only with `feature = "profiling"` on native targets.
  A reloadable tracing-chrome layer is registered at startup and can be
  switched on and off at runtime; each session writes a `trace-*.json` file
  into the working directory that opens in Perfetto or `chrome://tracing`.
- stub: compiled in all other configurations. Logging-only initialization
  and no-op profiling functions.

Top-level API (always available):
- `setup_logging_and_profiling()`
- `start_profiling()`
- `stop_profiling()`
- `is_profiling_enabled() -> bool`
- `profiling_ui(&mut egui::Ui)`
*/

/// Filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    if cfg!(debug_assertions) {
        "debug,eframe=warn,egui::context=warn,wgpu_core=warn,wgpu_hal=warn,naga=warn"
    } else {
        "info,eframe=warn,egui=warn,wgpu_core=warn,wgpu_hal=warn"
    }
}

fn env_filter() -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_log_filter()))
}

#[cfg(all(feature = "profiling", not(target_arch = "wasm32")))]
mod inner {
    use std::path::PathBuf;
    use std::sync::{Mutex, MutexGuard};

    use tracing_chrome::{ChromeLayer, FlushGuard};
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{Registry, reload};

    /// State used by the real profiling implementation.
    struct ProfilingState {
        /// Reload handle for the chrome layer
        reload_handle: reload::Handle<Option<ChromeLayer<Registry>>, Registry>,
        /// Guard which, when dropped, flushes the trace file
        guard: Option<FlushGuard>,
        /// Last trace file written, shown in the UI
        last_trace_file: Option<PathBuf>,
    }

    static PROFILING_STATE: Mutex<Option<ProfilingState>> = Mutex::new(None);

    fn profiling_state() -> MutexGuard<'static, Option<ProfilingState>> {
        PROFILING_STATE.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("Profiling state mutex poisoned; recovering");
            poisoned.into_inner()
        })
    }

    /// Initialize logging and the (initially empty) profiling reload layer.
    pub fn setup_logging_and_profiling() {
        use tracing_subscriber::fmt;

        let fmt_layer = fmt::layer().with_filter(super::env_filter());

        let (reload_layer, reload_handle) = reload::Layer::new(None::<ChromeLayer<Registry>>);
        let registry = tracing_subscriber::registry()
            .with(reload_layer)
            .with(fmt_layer);

        *profiling_state() = Some(ProfilingState {
            reload_handle,
            guard: None,
            last_trace_file: None,
        });

        if registry.try_init().is_err() {
            tracing::warn!("A global tracing subscriber was already installed");
        }
        tracing::info!("Tracing initialized with reloadable chrome profiling layer");

        if std::env::var("ENABLE_PROFILING").is_ok() {
            tracing::info!("ENABLE_PROFILING set - starting profiling session at startup");
            start_profiling();
        }
    }

    /// Start a profiling session by enabling the chrome layer and creating a FlushGuard.
    pub fn start_profiling() {
        let mut state_opt = profiling_state();
        let Some(state) = state_opt.as_mut() else {
            tracing::error!("Profiling state not initialized");
            return;
        };

        if state.guard.is_some() {
            tracing::warn!("Profiling already enabled");
            return;
        }

        let (chrome_layer, guard) = tracing_chrome::ChromeLayerBuilder::new().build();
        if let Err(e) = state.reload_handle.reload(Some(chrome_layer)) {
            tracing::error!("Failed to enable chrome layer: {e:?}");
            return;
        }
        state.guard = Some(guard);

        tracing::info!("Profiling session started");
    }

    /// Stop profiling: disable the chrome layer and drop the guard to flush the file.
    pub fn stop_profiling() {
        let mut state_opt = profiling_state();
        let Some(state) = state_opt.as_mut() else {
            tracing::error!("Profiling state not initialized");
            return;
        };

        if state.guard.is_none() {
            tracing::warn!("Profiling not enabled");
            return;
        }

        if let Err(e) = state.reload_handle.reload(None::<ChromeLayer<Registry>>) {
            tracing::error!("Failed to disable chrome layer: {e:?}");
        }
        state.guard = None;

        state.last_trace_file = find_latest_trace_file();
        match &state.last_trace_file {
            Some(path) => tracing::info!(
                "Profiling session stopped, open {} in https://ui.perfetto.dev",
                path.display()
            ),
            None => tracing::warn!("Profiling stopped but no trace-*.json file was found"),
        }
    }

    fn find_latest_trace_file() -> Option<PathBuf> {
        let current_dir = std::env::current_dir().ok()?;

        std::fs::read_dir(current_dir)
            .ok()?
            .filter_map(|e| e.ok())
            .filter(|e| {
                e.file_name()
                    .to_str()
                    .is_some_and(|s| s.starts_with("trace-") && s.ends_with(".json"))
            })
            .filter_map(|entry| {
                let mtime = entry.metadata().ok()?.modified().ok()?;
                Some((entry.path(), mtime))
            })
            .max_by_key(|(_, mtime)| *mtime)
            .map(|(path, _)| path)
    }

    pub fn is_profiling_enabled() -> bool {
        profiling_state()
            .as_ref()
            .is_some_and(|s| s.guard.is_some())
    }

    pub fn profiling_ui(ui: &mut egui::Ui) {
        egui::warn_if_debug_build(ui);

        let mut enabled = is_profiling_enabled();
        if ui.checkbox(&mut enabled, "Enable Profiling").changed() {
            if enabled {
                start_profiling();
            } else {
                stop_profiling();
            }
        }

        if enabled {
            ui.label("⏺ Recording active");
        } else if let Some(path) = profiling_state()
            .as_ref()
            .and_then(|s| s.last_trace_file.clone())
        {
            ui.label(format!("Last trace: {}", path.display()));
        } else {
            ui.label("Enable to start profiling.");
        }
    }
}

#[cfg(not(all(feature = "profiling", not(target_arch = "wasm32"))))]
mod inner {
    use tracing_subscriber::prelude::*;

    /// Initialize logging with sensible defaults; profiling is a no-op here.
    pub fn setup_logging_and_profiling() {
        use tracing_subscriber::fmt;

        let fmt_layer = fmt::layer().with_filter(super::env_filter());
        let _ = tracing_subscriber::registry().with(fmt_layer).try_init();

        tracing::info!("Logging initialized (profiling disabled in this build)");
    }

    pub fn start_profiling() {
        tracing::info!("start_profiling() called but profiling is disabled in this build");
    }

    pub fn stop_profiling() {
        tracing::info!("stop_profiling() called but profiling is disabled in this build");
    }

    pub fn is_profiling_enabled() -> bool {
        false
    }

    pub fn profiling_ui(ui: &mut egui::Ui) {
        ui.label("Profiling feature not enabled in this build.");
    }
}

// Re-export a stable API surface regardless of which `inner` module was compiled.
pub use inner::{
    is_profiling_enabled, profiling_ui, setup_logging_and_profiling, start_profiling,
    stop_profiling,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_quiets_renderer_noise() {
        let filter = default_log_filter();
        assert!(filter.contains("wgpu_core=warn"));
        assert!(tracing_subscriber::EnvFilter::try_new(filter).is_ok());
    }

    #[test]
    fn test_profiling_starts_disabled() {
        assert!(!is_profiling_enabled());
    }
}
