//! Adaptive style palettes.
//!
//! A [`Palette`] holds a base style per name plus optional light and dark
//! overrides. Resolving it for a [`ThemePreference`] yields the [`Styles`]
//! the `style` template filter applies:
//!
//! ```rust
//! use console::{Color, Style};
//! use fraude_render::Palette;
//! use fraude_widgets::ThemePreference;
//!
//! let palette = Palette::new()
//!     .add("muted", Style::new().dim())
//!     .add_adaptive(
//!         "accent",
//!         Style::new().bold(),
//!         Some(Style::new().fg(Color::Magenta)),
//!         Some(Style::new().fg(Color::Cyan)),
//!     );
//!
//! let dark = palette.resolve(ThemePreference::Dark);
//! assert!(dark.has("accent"));
//! assert!(dark.has("muted"));
//! ```

use std::collections::HashMap;

use console::{Color, Style};
use fraude_widgets::ThemePreference;

use crate::output::StyleMode;

/// Prepended to text styled with a name the palette does not define.
pub const DEFAULT_MISSING_STYLE_INDICATOR: &str = "(!?)";

/// Named styles with per-mode overrides.
#[derive(Debug, Clone, Default)]
pub struct Palette {
    base: HashMap<String, Style>,
    light: HashMap<String, Style>,
    dark: HashMap<String, Style>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    /// The palette used by the site templates.
    ///
    /// Light mode leans on the pastel purples of the page, dark mode on
    /// cyan and pink that read well on a navy background.
    pub fn site() -> Self {
        Palette::new()
            .add_adaptive(
                "title",
                Style::new().bold(),
                Some(Style::new().bold().fg(Color::Color256(97))),
                Some(Style::new().bold().fg(Color::Cyan)),
            )
            .add("prompt", Style::new().bold())
            .add("choice", Style::new())
            .add_adaptive(
                "selected",
                Style::new().bold().underlined(),
                Some(Style::new().bold().underlined().fg(Color::Color256(134))),
                Some(Style::new().bold().underlined().fg(Color::Color256(213))),
            )
            .add("correct", Style::new().bold().fg(Color::Green))
            .add("wrong", Style::new().bold().fg(Color::Red))
            .add("muted", Style::new().dim())
            .add_adaptive(
                "accent",
                Style::new(),
                Some(Style::new().fg(Color::Color256(140))),
                Some(Style::new().fg(Color::Yellow)),
            )
            .add_adaptive(
                "amount",
                Style::new(),
                Some(Style::new().fg(Color::Blue)),
                Some(Style::new().fg(Color::Cyan)),
            )
            .add_adaptive(
                "total",
                Style::new().bold(),
                Some(Style::new().bold().fg(Color::Color256(97))),
                Some(Style::new().bold().fg(Color::Color256(219))),
            )
            .add_adaptive(
                "stat",
                Style::new().bold(),
                Some(Style::new().bold().fg(Color::Magenta)),
                Some(Style::new().bold().fg(Color::Color256(219))),
            )
            .add("celebratory", Style::new().bold().fg(Color::Cyan))
            .add("moderate", Style::new().bold().fg(Color::Color256(214)))
            .add("developing", Style::new().bold().fg(Color::Red))
    }

    /// Adds a style that looks the same in both modes.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.base.insert(name.to_string(), style);
        self
    }

    /// Adds a style with optional light and dark overrides of `base`.
    pub fn add_adaptive(
        mut self,
        name: &str,
        base: Style,
        light: Option<Style>,
        dark: Option<Style>,
    ) -> Self {
        self.base.insert(name.to_string(), base);
        if let Some(light_style) = light {
            self.light.insert(name.to_string(), light_style);
        }
        if let Some(dark_style) = dark {
            self.dark.insert(name.to_string(), dark_style);
        }
        self
    }

    /// Picks the override for `mode` where one exists, the base otherwise.
    pub fn resolve(&self, mode: ThemePreference) -> Styles {
        let overrides = match mode {
            ThemePreference::Light => &self.light,
            ThemePreference::Dark => &self.dark,
        };

        let styles = self
            .base
            .iter()
            .map(|(name, base)| {
                let style = overrides.get(name).unwrap_or(base);
                (name.clone(), style.clone())
            })
            .collect();

        Styles {
            styles,
            missing_indicator: DEFAULT_MISSING_STYLE_INDICATOR.to_string(),
        }
    }

    /// Styles from `other` take precedence.
    pub fn merge(mut self, other: Palette) -> Self {
        self.base.extend(other.base);
        self.light.extend(other.light);
        self.dark.extend(other.dark);
        self
    }

    pub fn len(&self) -> usize {
        self.base.len()
    }

    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }
}

/// Styles resolved for one mode.
#[derive(Debug, Clone)]
pub struct Styles {
    styles: HashMap<String, Style>,
    missing_indicator: String,
}

impl Styles {
    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Style> {
        self.styles.get(name)
    }

    /// Applies a named style with ANSI codes.
    pub fn apply(&self, name: &str, text: &str) -> String {
        match self.styles.get(name) {
            Some(style) => style.clone().force_styling(true).apply_to(text).to_string(),
            None => self.missing(text),
        }
    }

    /// Checks the name but emits no escape codes.
    pub fn apply_plain(&self, name: &str, text: &str) -> String {
        if self.has(name) {
            text.to_string()
        } else {
            self.missing(text)
        }
    }

    /// Renders the style name as bracket tags.
    pub fn apply_debug(&self, name: &str, text: &str) -> String {
        if self.has(name) {
            format!("[{}]{}[/{}]", name, text, name)
        } else {
            self.missing(text)
        }
    }

    pub fn apply_as(&self, name: &str, text: &str, mode: StyleMode) -> String {
        match mode {
            StyleMode::Ansi => self.apply(name, text),
            StyleMode::Plain => self.apply_plain(name, text),
            StyleMode::Tagged => self.apply_debug(name, text),
        }
    }

    fn missing(&self, text: &str) -> String {
        if self.missing_indicator.is_empty() {
            text.to_string()
        } else {
            format!("{} {}", self.missing_indicator, text)
        }
    }
}
