use shadow_rs::shadow;

shadow!(build);

/// Name and version of the application being launched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppInfo {
    pub name: &'static str,
    pub version: &'static str,
}

impl AppInfo {
    pub const fn new(name: &'static str, version: &'static str) -> Self {
        Self { name, version }
    }
}

/// Log version info using the appropriate logging mechanism for the platform.
/// On Android, we use the `log` crate (which android_logger handles).
/// On other platforms, we use `tracing` (which our tracing_subscriber handles).
pub fn log_version_info(app: &AppInfo) {
    #[cfg(target_os = "android")]
    {
        log::info!("{}", short_version_info(app));
        log::info!(
            "Build date: {} ({})",
            build::BUILD_TIME_2822,
            build::BUILD_RUST_CHANNEL
        );
    }
    #[cfg(not(target_os = "android"))]
    {
        tracing::info!("{}", short_version_info(app));
        tracing::info!(
            "Build date: {} ({})",
            build::BUILD_TIME_2822,
            build::BUILD_RUST_CHANNEL
        );
    }
}

/// One-line `name version (branch@commit)` summary; git details are omitted when the
/// build did not happen inside a git checkout.
pub fn short_version_info(app: &AppInfo) -> String {
    if build::SHORT_COMMIT.is_empty() {
        return format!("{} {}", app.name, app.version);
    }
    format!(
        "{} {} ({}@{}{})",
        app.name,
        app.version,
        build::BRANCH,
        build::SHORT_COMMIT,
        if build::GIT_CLEAN { "" } else { "+dirty" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_version_info_starts_with_name_and_version() {
        let info = AppInfo::new("Demo", "1.2.3");
        assert!(short_version_info(&info).starts_with("Demo 1.2.3"));
    }
}
