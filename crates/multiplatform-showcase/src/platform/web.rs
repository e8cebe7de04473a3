use super::PlatformProbe;

/// Browsers running the `wasm32` build.
#[derive(Debug, Clone, Copy, Default)]
pub struct Web;

impl PlatformProbe for Web {
    fn platform_name(&self) -> String {
        super::cached_name(|| "Web (WebAssembly)".to_string())
    }
}
