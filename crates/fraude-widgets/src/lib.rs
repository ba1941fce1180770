//! # Fraude Widgets - Interactive behavior of The Fraude Games site
//!
//! `fraude-widgets` holds the logic behind the site's interactive pieces,
//! independent of any rendering surface:
//!
//! - [`ThemeController`]: dark/light mode with a persisted preference that
//!   falls back to the operating system until the user chooses
//! - [`QuizEngine`]: a linear multiple-choice quiz with scoring and a delayed
//!   move to the next question
//! - [`compute_quote`]: a pure price calculator with an itemized breakdown
//! - [`StatsCarousel`]: wrap-around rotation of awareness statistics
//!
//! Delayed transitions are modeled on a virtual [`Timeline`], so nothing in
//! this crate sleeps and tests simulate time by calling `tick`.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::time::Duration;
//! use fraude_widgets::{
//!     compute_quote, MemoryStore, QuizEngine, QuizPhase, QuoteInputs, SiteConfig,
//!     ThemeController, ThemePreference,
//! };
//!
//! let config = SiteConfig::default();
//!
//! let mut theme =
//!     ThemeController::initialize(MemoryStore::new(), &config, ThemePreference::Dark).unwrap();
//! assert_eq!(theme.toggle().unwrap(), ThemePreference::Light);
//!
//! let mut quiz = QuizEngine::hr_assessment(&config);
//! quiz.start();
//! for _ in 0..quiz.total_questions() {
//!     quiz.select_choice(0).unwrap();
//!     quiz.advance();
//!     quiz.tick(Duration::from_secs(1));
//! }
//! assert_eq!(quiz.phase(), QuizPhase::Finished);
//!
//! let quote = compute_quote(&QuoteInputs::new(1, 0));
//! assert_eq!(quote.total, 3000);
//! ```
//!
//! ## Configuration
//!
//! [`SiteConfig`] carries the persisted slot name, the page variant and the
//! two timings. It can be loaded from YAML; omitted fields keep the site's
//! defaults.

mod config;
mod error;
pub mod quiz;
pub mod quote;
mod schedule;
pub mod stats;
pub mod theme;

pub use config::{
    SiteConfig, DEFAULT_NOTIFICATION_MS, DEFAULT_QUIZ_ADVANCE_DELAY_MS, DEFAULT_STORAGE_KEY,
};
pub use error::{Result, WidgetError};
pub use schedule::{TimerHandle, Timeline};

pub use theme::{
    detect_system_preference, reset_theme_detector, set_theme_detector, Appearance, FileStore,
    MemoryStore, Notification, PageVariant, PreferenceStore, ThemeController, ThemePreference,
    UnknownPreference,
};

pub use quiz::{
    hr_assessment, Progress, Question, QuestionPhase, QuizEngine, QuizPhase, QuizSession,
    QuizSummary, ResultTier, Reveal, TierCopy, CHOICE_COUNT, POINTS_PER_CORRECT,
};

pub use quote::{
    compute_quote, parse_level_count, AddOn, LineItem, LineKind, Quote, QuoteInputs, ServiceTier,
    LEVEL_COST,
};

pub use stats::{awareness_stats, AwarenessStat, StatsCarousel};
