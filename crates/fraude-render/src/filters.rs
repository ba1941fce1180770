//! MiniJinja filter registration.

use minijinja::{Environment, Error, ErrorKind, Value};

use crate::format::{format_currency, pad_right};
use crate::output::StyleMode;
use crate::palette::Styles;

/// Registers the site filters on a minijinja environment.
///
/// - `style(name)` applies a named style from `styles`
/// - `amount` formats an integer as Turkish lira
/// - `pad(width)` left-aligns in a column of `width` cells
/// - `nl` appends a newline
pub(crate) fn register_filters(env: &mut Environment<'static>, styles: Styles, mode: StyleMode) {
    env.add_filter("style", move |value: Value, name: String| -> String {
        styles.apply_as(&name, &value.to_string(), mode)
    });

    env.add_filter("amount", |value: Value| -> Result<String, Error> {
        let amount = u64::try_from(value.clone()).map_err(|_| {
            Error::new(
                ErrorKind::InvalidOperation,
                format!("amount expects a non-negative integer, got {}", value),
            )
        })?;
        Ok(format_currency(amount))
    });

    env.add_filter("pad", |value: Value, width: usize| -> String {
        pad_right(&value.to_string(), width)
    });

    // {{ "" | nl }} outputs a blank line
    env.add_filter("nl", |value: Value| -> String { format!("{}\n", value) });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Palette;
    use console::Style;
    use fraude_widgets::ThemePreference;
    use minijinja::context;

    fn env(mode: StyleMode) -> Environment<'static> {
        let styles = Palette::new()
            .add("accent", Style::new().bold())
            .resolve(ThemePreference::Light);
        let mut env = Environment::new();
        register_filters(&mut env, styles, mode);
        env
    }

    #[test]
    fn test_style_filter_plain() {
        let out = env(StyleMode::Plain)
            .render_str(r#"{{ "hi" | style("accent") }}"#, context! {})
            .unwrap();
        assert_eq!(out, "hi");
    }

    #[test]
    fn test_style_filter_ansi() {
        let out = env(StyleMode::Ansi)
            .render_str(r#"{{ "hi" | style("accent") }}"#, context! {})
            .unwrap();
        assert!(out.contains("\x1b[1m"));
        assert!(out.contains("hi"));
    }

    #[test]
    fn test_style_filter_tagged() {
        let out = env(StyleMode::Tagged)
            .render_str(r#"{{ "hi" | style("accent") }}"#, context! {})
            .unwrap();
        assert_eq!(out, "[accent]hi[/accent]");
    }

    #[test]
    fn test_amount_filter() {
        let out = env(StyleMode::Plain)
            .render_str("{{ total | amount }}", context! { total => 41000 })
            .unwrap();
        assert_eq!(out, "41.000 TL");
    }

    #[test]
    fn test_amount_filter_rejects_text() {
        let result = env(StyleMode::Plain).render_str("{{ 'x' | amount }}", context! {});
        assert!(result.is_err());
    }

    #[test]
    fn test_pad_and_nl() {
        let out = env(StyleMode::Plain)
            .render_str(r#"{{ "ab" | pad(4) }}|{{ "" | nl }}"#, context! {})
            .unwrap();
        assert_eq!(out, "ab  |\n");
    }
}
