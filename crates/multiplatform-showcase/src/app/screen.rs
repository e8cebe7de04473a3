//! The showcase screen
//!
//! [`ScreenController`] owns the only mutable state of the app, whether the
//! feature list is visible, and turns it into a [`View`]: a plain description
//! of what to draw that the egui painters in `ui_panels` consume. Views are
//! recomputed from scratch on every frame and carry no egui types, so the
//! screen logic runs (and is tested) without a window.

use crate::platform::PlatformProbe;

/// Features listed on the screen, in display order.
pub const FEATURES: [&str; 8] = [
    "Cross-platform UI with Compose",
    "Android Support",
    "iOS Support",
    "Desktop Support (JVM)",
    "Web Support (Wasm)",
    "Shared Business Logic",
    "Material 3 Design",
    "Reactive State Management",
];

/// Glyph drawn in front of every feature.
pub const CHECK_GLYPH: &str = "✓";

pub const TITLE: &str = "Multiplatform Showcase";
pub const SUBTITLE: &str = "egui UI Demo";
pub const FOOTER: &str = "Built with egui";

/// Whether the feature list is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeatureVisibility {
    #[default]
    Collapsed,
    Expanded,
}

impl FeatureVisibility {
    pub fn toggled(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }

    pub fn is_expanded(self) -> bool {
        self == Self::Expanded
    }

    /// Label of the button that switches away from this state.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Collapsed => "Show Features",
            Self::Expanded => "Hide Features",
        }
    }
}

/// One line of the feature list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureRow {
    pub glyph: &'static str,
    pub text: &'static str,
}

/// Everything the screen displays for one state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Text of the platform card, e.g. `Running on: Desktop (Linux x86_64)`
    pub platform_card: String,
    pub toggle_label: &'static str,
    /// `None` while collapsed
    pub features: Option<Vec<FeatureRow>>,
    pub footer: &'static str,
}

/// Build the view for the given inputs. Pure: equal inputs give equal views.
pub fn render(
    platform_name: &str,
    features: &[&'static str],
    visibility: FeatureVisibility,
) -> View {
    profiling::scope!("screen::render");

    let features = visibility.is_expanded().then(|| {
        features
            .iter()
            .map(|&text| FeatureRow {
                glyph: CHECK_GLYPH,
                text,
            })
            .collect()
    });

    View {
        title: TITLE,
        subtitle: SUBTITLE,
        platform_card: format!("Running on: {platform_name}"),
        toggle_label: visibility.toggle_label(),
        features,
        footer: FOOTER,
    }
}

/// Owner of the screen state.
///
/// Observers registered with [`ScreenController::subscribe`] run after every
/// state change; the app uses one to request an egui repaint.
pub struct ScreenController {
    platform_name: String,
    visibility: FeatureVisibility,
    observers: Vec<Box<dyn FnMut()>>,
}

impl ScreenController {
    /// Query `platform` once and start collapsed.
    pub fn mount(platform: &impl PlatformProbe) -> Self {
        let platform_name = platform.platform_name();
        tracing::debug!("Screen mounted on {platform_name}");

        Self {
            platform_name,
            visibility: FeatureVisibility::default(),
            observers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, observer: impl FnMut() + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Flip the feature list visibility and notify observers.
    pub fn on_toggle(&mut self) {
        self.visibility = self.visibility.toggled();
        tracing::debug!("Feature list {:?}", self.visibility);

        for observer in &mut self.observers {
            observer();
        }
    }

    pub fn render(&self) -> View {
        render(&self.platform_name, &FEATURES, self.visibility)
    }

    pub fn visibility(&self) -> FeatureVisibility {
        self.visibility
    }

    /// Name reported by the platform at mount time.
    pub fn platform_name(&self) -> &str {
        &self.platform_name
    }
}
