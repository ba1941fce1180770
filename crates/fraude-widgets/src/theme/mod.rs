//! Light/dark theme with a persisted preference.
//!
//! - [`ThemePreference`]: the two modes and their persisted string form
//! - [`ThemeController`]: applies a mode, toggles it, follows the OS until the
//!   user chooses explicitly
//! - [`PreferenceStore`]: the single persisted slot, with [`MemoryStore`] and
//!   [`FileStore`] backends
//! - [`Appearance`]: what the document root looks like for a mode
//!
//! System color-scheme detection goes through a process-wide detector that
//! tests can replace with [`set_theme_detector`].

mod appearance;
mod controller;
mod preference;
mod store;

pub use appearance::{Appearance, Notification, PageVariant};
pub use controller::ThemeController;
pub use preference::{
    detect_system_preference, reset_theme_detector, set_theme_detector, ThemePreference,
    UnknownPreference,
};
pub use store::{FileStore, MemoryStore, PreferenceStore};
