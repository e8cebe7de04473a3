use super::PlatformProbe;

#[derive(Debug, Clone, Copy, Default)]
pub struct Ios;

impl PlatformProbe for Ios {
    fn platform_name(&self) -> String {
        super::cached_name(|| format!("iOS ({})", std::env::consts::ARCH))
    }
}
