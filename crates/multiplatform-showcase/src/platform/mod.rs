//! Platform identification
//!
//! Every deployment target contributes exactly one [`PlatformProbe`] implementation,
//! picked with `#[cfg]` at compile time and re-exported as [`CurrentPlatform`]:
//!
//! - desktop (Linux, macOS, Windows, BSDs): [`desktop`]
//! - web (`wasm32`): [`web`]
//! - Android: [`android`]
//! - iOS: [`ios`]

use once_cell::sync::OnceCell;

#[cfg(not(any(target_arch = "wasm32", target_os = "android", target_os = "ios")))]
pub mod desktop;
#[cfg(not(any(target_arch = "wasm32", target_os = "android", target_os = "ios")))]
pub use desktop::Desktop as CurrentPlatform;

#[cfg(target_arch = "wasm32")]
pub mod web;
#[cfg(target_arch = "wasm32")]
pub use web::Web as CurrentPlatform;

#[cfg(target_os = "android")]
pub mod android;
#[cfg(target_os = "android")]
pub use android::Android as CurrentPlatform;

#[cfg(target_os = "ios")]
pub mod ios;
#[cfg(target_os = "ios")]
pub use ios::Ios as CurrentPlatform;

/// Shown when the host cannot be described.
pub const UNKNOWN_PLATFORM: &str = "Unknown platform";

/// Capability returning a human-readable name for the environment the app runs in.
///
/// Implementations never fail and return the same non-empty value for the whole run.
pub trait PlatformProbe {
    fn platform_name(&self) -> String;
}

/// Name of the platform this binary was built for.
pub fn current_platform_name() -> String {
    CurrentPlatform.platform_name()
}

static DETECTED_NAME: OnceCell<String> = OnceCell::new();

/// Run `detect` once per process and hand out the cached result afterwards.
fn cached_name(detect: fn() -> String) -> String {
    DETECTED_NAME
        .get_or_init(|| non_empty_or_unknown(detect()))
        .clone()
}

fn non_empty_or_unknown(name: String) -> String {
    if name.trim().is_empty() {
        UNKNOWN_PLATFORM.to_string()
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_platform_name_is_non_empty() {
        assert!(!current_platform_name().trim().is_empty());
    }

    #[test]
    fn test_current_platform_name_is_stable() {
        let first = current_platform_name();
        for _ in 0..10 {
            assert_eq!(current_platform_name(), first);
        }
    }

    #[test]
    fn test_blank_names_fall_back() {
        assert_eq!(non_empty_or_unknown(String::new()), UNKNOWN_PLATFORM);
        assert_eq!(non_empty_or_unknown("  ".to_string()), UNKNOWN_PLATFORM);
        assert_eq!(non_empty_or_unknown("Desktop".to_string()), "Desktop");
    }
}
