use thiserror::Error;

/// Failures while bringing up the host shell.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The native event loop or renderer could not be created.
    #[cfg(not(target_arch = "wasm32"))]
    #[error("failed to start the native event loop: {0}")]
    Eframe(#[from] eframe::Error),

    /// The browser runner rejected the canvas or failed to initialize WebGL/WebGPU.
    #[error("failed to start the web runner: {0}")]
    WebRunner(String),

    /// `WebHandle::start` was called before any app was registered.
    #[error("no application registered; expand `eframe_app!` in the app crate")]
    NotRegistered,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_failing_stage() {
        let err = LaunchError::WebRunner("canvas not found".to_string());
        assert_eq!(
            err.to_string(),
            "failed to start the web runner: canvas not found"
        );
        assert!(LaunchError::NotRegistered.to_string().contains("eframe_app!"));
    }
}
