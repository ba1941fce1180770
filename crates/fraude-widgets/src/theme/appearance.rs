//! Visual state derived from the active preference.

use serde::{Deserialize, Serialize};

use super::preference::ThemePreference;

const DARK_BACKGROUND: &str = "linear-gradient(135deg, #1a1a2e 0%, #16213e 100%)";
const DARK_TEXT: &str = "#e9e9f2";
const LIGHT_BACKGROUND: &str =
    "linear-gradient(135deg, #f3eefa 0%, #e8f0fe 50%, #fce4ec 100%)";
const LIGHT_TEXT: &str = "#3a3a4a";

/// Which page style the controller drives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageVariant {
    /// Regular pages: the controller recolors background and text.
    #[default]
    Standard,
    /// Fraude pages keep their own fixed palette.
    Fraude,
}

/// What the document root should look like for a given mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Appearance {
    /// Value of the root `data-theme` attribute.
    pub data_theme: ThemePreference,
    /// Background treatment, `None` when the page keeps its own.
    pub background: Option<&'static str>,
    /// Body text color, `None` when the page keeps its own.
    pub text_color: Option<&'static str>,
    /// Icon on the toggle control: the mode a click switches to.
    pub toggle_icon: &'static str,
}

impl Appearance {
    pub fn for_mode(mode: ThemePreference, variant: PageVariant) -> Self {
        let (background, text_color) = match (variant, mode) {
            (PageVariant::Fraude, _) => (None, None),
            (PageVariant::Standard, ThemePreference::Dark) => {
                (Some(DARK_BACKGROUND), Some(DARK_TEXT))
            }
            (PageVariant::Standard, ThemePreference::Light) => {
                (Some(LIGHT_BACKGROUND), Some(LIGHT_TEXT))
            }
        };

        Self {
            data_theme: mode,
            background,
            text_color,
            toggle_icon: toggle_icon(mode),
        }
    }
}

/// Transient confirmation shown after each mode change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub mode: ThemePreference,
    pub icon: &'static str,
}

impl Notification {
    pub fn for_mode(mode: ThemePreference) -> Self {
        let icon = match mode {
            ThemePreference::Dark => "🌙",
            ThemePreference::Light => "☀️",
        };
        Self { mode, icon }
    }
}

fn toggle_icon(mode: ThemePreference) -> &'static str {
    match mode {
        ThemePreference::Dark => "☀️",
        ThemePreference::Light => "🌙",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_dark_recolors() {
        let look = Appearance::for_mode(ThemePreference::Dark, PageVariant::Standard);
        assert_eq!(look.data_theme, ThemePreference::Dark);
        assert_eq!(look.text_color, Some(DARK_TEXT));
        assert!(look.background.unwrap().contains("#1a1a2e"));
        assert_eq!(look.toggle_icon, "☀️");
    }

    #[test]
    fn standard_light_recolors() {
        let look = Appearance::for_mode(ThemePreference::Light, PageVariant::Standard);
        assert_eq!(look.text_color, Some(LIGHT_TEXT));
        assert_eq!(look.toggle_icon, "🌙");
    }

    #[test]
    fn fraude_keeps_its_palette_but_reports_mode() {
        for mode in [ThemePreference::Light, ThemePreference::Dark] {
            let look = Appearance::for_mode(mode, PageVariant::Fraude);
            assert_eq!(look.data_theme, mode);
            assert_eq!(look.background, None);
            assert_eq!(look.text_color, None);
        }
    }

    #[test]
    fn notification_icon_shows_new_mode() {
        assert_eq!(Notification::for_mode(ThemePreference::Dark).icon, "🌙");
        assert_eq!(Notification::for_mode(ThemePreference::Light).icon, "☀️");
    }
}
