use super::PlatformProbe;

#[derive(Debug, Clone, Copy, Default)]
pub struct Android;

impl PlatformProbe for Android {
    fn platform_name(&self) -> String {
        super::cached_name(|| format!("Android ({})", std::env::consts::ARCH))
    }
}
