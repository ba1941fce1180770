//! Template renderers.

use minijinja::Environment;
use serde::Serialize;

use fraude_widgets::{
    Appearance, Notification, PreferenceStore, QuizEngine, QuizSummary, Quote, StatsCarousel,
    ThemeController, ThemePreference,
};

use crate::error::RenderError;
use crate::filters::register_filters;
use crate::output::{OutputMode, StyleMode};
use crate::palette::{Palette, Styles};
use crate::templates::BUILTIN;
use crate::views::{
    AppearanceView, NotificationView, QuestionView, QuoteView, ResultView, StatView,
};

/// A renderer with pre-registered templates.
///
/// ```rust
/// use fraude_render::{OutputMode, Palette, Renderer};
/// use fraude_widgets::ThemePreference;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Data { total: u64 }
///
/// let styles = Palette::site().resolve(ThemePreference::Dark);
/// let mut renderer = Renderer::with_output(styles, OutputMode::Text);
/// renderer.add_template("total", "{{ total | amount | style(\"total\") }}").unwrap();
///
/// let output = renderer.render("total", &Data { total: 26000 }).unwrap();
/// assert_eq!(output, "26.000 TL");
/// ```
pub struct Renderer {
    env: Environment<'static>,
    mode: OutputMode,
    /// `None` renders views as JSON.
    style_mode: Option<StyleMode>,
}

impl Renderer {
    /// Creates a new renderer with automatic color detection.
    pub fn new(styles: Styles) -> Self {
        Self::with_output(styles, OutputMode::Auto)
    }

    /// Creates a new renderer with explicit output mode.
    pub fn with_output(styles: Styles, mode: OutputMode) -> Self {
        let style_mode = mode.style_mode();
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        register_filters(&mut env, styles, style_mode.unwrap_or(StyleMode::Plain));
        Self {
            env,
            mode,
            style_mode,
        }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Registers a named template, replacing any template of that name.
    ///
    /// The template is compiled immediately; errors are returned if syntax is invalid.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), RenderError> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())?;
        Ok(())
    }

    /// Renders a registered template with the given data.
    ///
    /// In [`OutputMode::Json`] the data is serialized instead and the
    /// template is never consulted.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, RenderError> {
        if self.style_mode.is_none() {
            return Ok(serde_json::to_string_pretty(data)?);
        }
        let tmpl = self.env.get_template(name)?;
        Ok(tmpl.render(data)?)
    }
}

/// Renders every site widget with the built-in templates.
///
/// Styles are resolved once for the given mode; build a new renderer after
/// the theme changes.
pub struct SiteRenderer {
    renderer: Renderer,
    theme: ThemePreference,
}

impl SiteRenderer {
    pub fn new(theme: ThemePreference, mode: OutputMode) -> Result<Self, RenderError> {
        Self::with_palette(&Palette::site(), theme, mode)
    }

    /// Uses the mode the controller currently applies.
    pub fn for_controller<S: PreferenceStore>(
        controller: &ThemeController<S>,
        mode: OutputMode,
    ) -> Result<Self, RenderError> {
        Self::new(controller.mode(), mode)
    }

    pub fn with_palette(
        palette: &Palette,
        theme: ThemePreference,
        mode: OutputMode,
    ) -> Result<Self, RenderError> {
        let mut renderer = Renderer::with_output(palette.resolve(theme), mode);
        for (name, source) in BUILTIN {
            renderer.add_template(name, source)?;
        }
        Ok(Self { renderer, theme })
    }

    pub fn theme(&self) -> ThemePreference {
        self.theme
    }

    /// For replacing a built-in template.
    pub fn renderer_mut(&mut self) -> &mut Renderer {
        &mut self.renderer
    }

    /// The question on screen, or `None` when the quiz is not running.
    pub fn question(&self, quiz: &QuizEngine) -> Result<Option<String>, RenderError> {
        QuestionView::from_engine(quiz)
            .map(|view| self.renderer.render("question", &view))
            .transpose()
    }

    pub fn result(&self, summary: &QuizSummary) -> Result<String, RenderError> {
        self.renderer.render("result", &ResultView::from(summary))
    }

    pub fn quote(&self, quote: &Quote) -> Result<String, RenderError> {
        self.renderer.render("quote", &QuoteView::from(quote))
    }

    pub fn stat(&self, carousel: &StatsCarousel) -> Result<String, RenderError> {
        self.renderer.render("stat", &StatView::from(carousel))
    }

    pub fn notification(&self, notification: &Notification) -> Result<String, RenderError> {
        self.renderer
            .render("notification", &NotificationView::from(notification))
    }

    pub fn appearance(&self, appearance: &Appearance) -> Result<String, RenderError> {
        self.renderer
            .render("appearance", &AppearanceView::from(appearance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fraude_widgets::{PageVariant, SiteConfig};

    fn text(theme: ThemePreference) -> SiteRenderer {
        SiteRenderer::new(theme, OutputMode::Text).unwrap()
    }

    #[test]
    fn test_builtin_templates_compile() {
        assert!(SiteRenderer::new(ThemePreference::Light, OutputMode::Term).is_ok());
    }

    #[test]
    fn test_unknown_template() {
        let renderer = Renderer::with_output(
            Palette::site().resolve(ThemePreference::Light),
            OutputMode::Text,
        );
        let err = renderer.render("missing", &()).unwrap_err();
        assert!(matches!(err, RenderError::TemplateNotFound(_)));
    }

    #[test]
    fn test_bad_template_syntax() {
        let mut renderer = Renderer::new(Palette::new().resolve(ThemePreference::Dark));
        let err = renderer.add_template("bad", "{{ unclosed").unwrap_err();
        assert!(matches!(err, RenderError::TemplateError(_)));
    }

    #[test]
    fn test_question_none_before_start() {
        let quiz = QuizEngine::hr_assessment(&SiteConfig::default());
        assert!(text(ThemePreference::Light).question(&quiz).unwrap().is_none());
    }

    #[test]
    fn test_appearance_fraude_variant_has_no_colors() {
        let appearance = Appearance::for_mode(ThemePreference::Dark, PageVariant::Fraude);
        let out = text(ThemePreference::Dark).appearance(&appearance).unwrap();
        assert_eq!(out, "☀️ data-theme=\"dark\"");
    }

    #[test]
    fn test_json_mode_serializes_view() {
        let renderer = SiteRenderer::new(ThemePreference::Dark, OutputMode::Json).unwrap();
        let notification = Notification::for_mode(ThemePreference::Dark);
        let out = renderer.notification(&notification).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["mode"], "dark");
        assert_eq!(value["icon"], "🌙");
    }
}
