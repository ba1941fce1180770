//! Where rendered widgets go and how their styles show.

use console::Term;

/// Output selection for a [`SiteRenderer`](crate::SiteRenderer).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Colors when stdout is a color terminal, plain text otherwise.
    #[default]
    Auto,
    /// Colors wherever the output goes.
    Term,
    /// Plain text.
    Text,
    /// Palette names as `[name]text[/name]`, to see which entry styled what.
    TermDebug,
    /// The widget's view as pretty JSON; no template runs.
    Json,
}

/// How the `style` filter marks up text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleMode {
    Ansi,
    Plain,
    Tagged,
}

impl OutputMode {
    /// The markup templates render with, or `None` when the view is emitted
    /// as data.
    pub fn style_mode(self) -> Option<StyleMode> {
        match self {
            OutputMode::Auto if stdout_has_color() => Some(StyleMode::Ansi),
            OutputMode::Auto | OutputMode::Text => Some(StyleMode::Plain),
            OutputMode::Term => Some(StyleMode::Ansi),
            OutputMode::TermDebug => Some(StyleMode::Tagged),
            OutputMode::Json => None,
        }
    }
}

fn stdout_has_color() -> bool {
    let term = Term::stdout();
    term.is_term() && term.features().colors_supported()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_modes_resolve_without_a_terminal() {
        assert_eq!(OutputMode::Term.style_mode(), Some(StyleMode::Ansi));
        assert_eq!(OutputMode::Text.style_mode(), Some(StyleMode::Plain));
        assert_eq!(OutputMode::TermDebug.style_mode(), Some(StyleMode::Tagged));
        assert_eq!(OutputMode::Json.style_mode(), None);
    }

    #[test]
    fn auto_always_renders_a_template() {
        assert!(matches!(
            OutputMode::Auto.style_mode(),
            Some(StyleMode::Ansi | StyleMode::Plain)
        ));
    }
}
