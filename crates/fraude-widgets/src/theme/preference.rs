//! The light/dark preference and system color-scheme detection.

use std::fmt;
use std::str::FromStr;
use std::sync::{Mutex, PoisonError};

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// The visual mode of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Pastel background, dark text.
    Light,
    /// Deep navy background, light text.
    Dark,
}

impl ThemePreference {
    /// The persisted string form, also used as the `data-theme` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    /// Maps a "prefers dark" signal to a preference.
    pub fn from_is_dark(is_dark: bool) -> Self {
        if is_dark {
            ThemePreference::Dark
        } else {
            ThemePreference::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemePreference::Dark
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a stored string is not a known preference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPreference(pub String);

impl fmt::Display for UnknownPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown theme preference '{}'", self.0)
    }
}

impl std::error::Error for UnknownPreference {}

impl FromStr for ThemePreference {
    type Err = UnknownPreference;

    /// Parses the exact persisted forms `"light"` and `"dark"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            other => Err(UnknownPreference(other.to_string())),
        }
    }
}

type ThemeDetector = fn() -> ThemePreference;

static THEME_DETECTOR: Lazy<Mutex<ThemeDetector>> = Lazy::new(|| Mutex::new(os_theme_detector));

/// Overrides the detector used to read the operating system's color scheme.
///
/// Useful for tests, or to pin a mode on platforms where detection is
/// unreliable.
///
/// ```rust
/// use fraude_widgets::{detect_system_preference, set_theme_detector, ThemePreference};
///
/// set_theme_detector(|| ThemePreference::Dark);
/// assert_eq!(detect_system_preference(), ThemePreference::Dark);
/// ```
pub fn set_theme_detector(detector: ThemeDetector) {
    let mut guard = THEME_DETECTOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = detector;
}

/// Restores OS-based detection after [`set_theme_detector`].
pub fn reset_theme_detector() {
    set_theme_detector(os_theme_detector);
}

/// Reads the system color scheme through the current detector.
pub fn detect_system_preference() -> ThemePreference {
    let detector = THEME_DETECTOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    (*detector)()
}

fn os_theme_detector() -> ThemePreference {
    match detect_os_theme() {
        Ok(OsThemeMode::Dark) => ThemePreference::Dark,
        Ok(_) => ThemePreference::Light,
        Err(err) => {
            tracing::warn!(error = %err, "color scheme detection failed, assuming light");
            ThemePreference::Light
        }
    }
}
