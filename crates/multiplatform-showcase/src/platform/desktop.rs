use super::PlatformProbe;

/// Desktop operating systems (Linux, macOS, Windows, BSDs).
#[derive(Debug, Clone, Copy, Default)]
pub struct Desktop;

impl PlatformProbe for Desktop {
    fn platform_name(&self) -> String {
        super::cached_name(|| describe(std::env::consts::OS, std::env::consts::ARCH))
    }
}

fn pretty_os(os: &str) -> &str {
    match os {
        "linux" => "Linux",
        "macos" => "macOS",
        "windows" => "Windows",
        "freebsd" => "FreeBSD",
        "openbsd" => "OpenBSD",
        "netbsd" => "NetBSD",
        other => other,
    }
}

/// `Desktop (Linux x86_64)`; empty when the OS is unknown.
fn describe(os: &str, arch: &str) -> String {
    if os.is_empty() {
        return String::new();
    }
    if arch.is_empty() {
        return format!("Desktop ({})", pretty_os(os));
    }
    format!("Desktop ({} {})", pretty_os(os), arch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_known_systems() {
        assert_eq!(describe("linux", "x86_64"), "Desktop (Linux x86_64)");
        assert_eq!(describe("macos", "aarch64"), "Desktop (macOS aarch64)");
        assert_eq!(describe("windows", ""), "Desktop (Windows)");
    }

    #[test]
    fn test_describe_passes_unknown_systems_through() {
        assert_eq!(describe("haiku", "x86_64"), "Desktop (haiku x86_64)");
        assert_eq!(describe("", "x86_64"), "");
    }

    #[test]
    fn test_current_platform_starts_with_desktop() {
        assert!(Desktop.platform_name().starts_with("Desktop ("));
    }
}
