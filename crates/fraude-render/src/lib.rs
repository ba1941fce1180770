//! # Fraude Render - Terminal views of the site widgets
//!
//! `fraude-render` turns the state held by `fraude-widgets` into styled text.
//! Each widget is flattened into a serializable view, rendered through a
//! MiniJinja template, and colored with named `console` styles taken from a
//! [`Palette`] resolved for the active light or dark mode.
//!
//! ## Quick Start
//!
//! ```rust
//! use fraude_render::{OutputMode, SiteRenderer};
//! use fraude_widgets::{compute_quote, AddOn, QuoteInputs, ThemePreference};
//!
//! let renderer = SiteRenderer::new(ThemePreference::Dark, OutputMode::Text).unwrap();
//! let quote = compute_quote(&QuoteInputs::new(2, 5000).with_add_on(AddOn::AudioDesign));
//!
//! let output = renderer.quote(&quote).unwrap();
//! assert!(output.contains("26.000 TL"));
//! ```
//!
//! ## Template Filters
//!
//! - `style(name)`: applies a palette style, `(!?)` marks an unknown name
//! - `amount`: integer lira with `.` digit grouping
//! - `pad(width)`: left-aligns in a column of terminal cells
//! - `nl`: appends a newline
//!
//! ## Output Modes
//!
//! [`OutputMode::Text`] never emits escape codes, [`OutputMode::Term`] always
//! does, and [`OutputMode::Auto`] asks the terminal. [`OutputMode::TermDebug`]
//! shows style names as `[name]text[/name]` and [`OutputMode::Json`] skips the
//! template and prints the view data.

mod error;
mod filters;
mod format;
mod output;
mod palette;
mod renderer;
pub mod templates;
pub mod views;

pub use error::RenderError;
pub use format::{format_amount, format_currency, pad_right, progress_bar, CURRENCY};
pub use output::{OutputMode, StyleMode};
pub use palette::{Palette, Styles, DEFAULT_MISSING_STYLE_INDICATOR};
pub use renderer::{Renderer, SiteRenderer};
pub use views::{
    AppearanceView, ChoiceState, ChoiceView, NotificationView, QuestionView, QuoteLineView,
    QuoteView, ResultView, RevealView, StatView,
};
