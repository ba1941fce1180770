//! The theme controller: persisted preference, applied mode, system fallback.

use std::time::Duration;

use crate::config::SiteConfig;
use crate::error::Result;
use crate::schedule::{TimerHandle, Timeline};

use super::appearance::{Appearance, Notification, PageVariant};
use super::preference::{detect_system_preference, ThemePreference};
use super::store::PreferenceStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ThemeEvent {
    DismissNotification,
}

#[derive(Debug)]
struct ActiveNotification {
    notification: Notification,
    timer: TimerHandle,
}

/// Owns the applied light/dark mode of one page.
///
/// The persisted slot is the single source of truth for whether the user
/// made an explicit choice: an empty slot means the page follows the
/// operating system, a stored value pins the mode forever.
///
/// ```rust
/// use fraude_widgets::{MemoryStore, PreferenceStore, SiteConfig, ThemeController, ThemePreference};
///
/// let mut theme =
///     ThemeController::initialize(MemoryStore::new(), &SiteConfig::default(), ThemePreference::Light)
///         .unwrap();
///
/// // No explicit choice yet: the OS signal is followed.
/// assert!(theme.on_system_preference_change(true).unwrap());
/// assert_eq!(theme.mode(), ThemePreference::Dark);
///
/// // After a toggle the OS signal is ignored.
/// theme.toggle().unwrap();
/// assert!(!theme.on_system_preference_change(true).unwrap());
/// assert_eq!(theme.mode(), ThemePreference::Light);
/// assert_eq!(theme.store().get("theme").unwrap().as_deref(), Some("light"));
/// ```
#[derive(Debug)]
pub struct ThemeController<S> {
    store: S,
    key: String,
    variant: PageVariant,
    mode: ThemePreference,
    notification_duration: Duration,
    timeline: Timeline<ThemeEvent>,
    notification: Option<ActiveNotification>,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Reads the stored preference, falling back to `system` when the slot
    /// is empty, and applies the result.
    pub fn initialize(store: S, config: &SiteConfig, system: ThemePreference) -> Result<Self> {
        let mut controller = Self {
            store,
            key: config.storage_key.clone(),
            variant: config.page_variant,
            mode: system,
            notification_duration: config.notification_duration(),
            timeline: Timeline::new(),
            notification: None,
        };

        let stored = controller.stored_preference()?;
        let initial = stored.unwrap_or(system);
        tracing::debug!(
            mode = %initial,
            explicit = stored.is_some(),
            "theme initialized"
        );
        controller.apply(initial);
        Ok(controller)
    }

    /// Like [`initialize`](Self::initialize), reading the system preference
    /// through the installed detector.
    pub fn initialize_with_os(store: S, config: &SiteConfig) -> Result<Self> {
        Self::initialize(store, config, detect_system_preference())
    }

    /// Flips light and dark and persists the new value.
    ///
    /// If the write fails the applied mode is left unchanged.
    pub fn toggle(&mut self) -> Result<ThemePreference> {
        let next = self.mode.toggled();
        self.store.set(&self.key, next.as_str())?;
        tracing::debug!(mode = %next, "theme toggled");
        self.apply(next);
        Ok(next)
    }

    /// Reacts to the operating system switching color scheme.
    ///
    /// Returns `true` if the page followed the signal, `false` if an explicit
    /// preference is stored and the signal was ignored.
    pub fn on_system_preference_change(&mut self, is_dark: bool) -> Result<bool> {
        if self.stored_preference()?.is_some() {
            tracing::debug!(is_dark, "system preference change ignored, explicit choice stored");
            return Ok(false);
        }

        self.apply(ThemePreference::from_is_dark(is_dark));
        Ok(true)
    }

    /// The explicit preference in the persisted slot, if any.
    ///
    /// A value that is not `"light"` or `"dark"` counts as no preference.
    pub fn stored_preference(&self) -> Result<Option<ThemePreference>> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(None);
        };

        match raw.parse() {
            Ok(pref) => Ok(Some(pref)),
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "ignoring stored theme value");
                Ok(None)
            }
        }
    }

    pub fn follows_system(&self) -> Result<bool> {
        Ok(self.stored_preference()?.is_none())
    }

    /// Moves the controller's clock forward, dismissing an expired
    /// confirmation.
    pub fn tick(&mut self, elapsed: Duration) {
        for event in self.timeline.advance(elapsed) {
            match event {
                ThemeEvent::DismissNotification => self.notification = None,
            }
        }
    }

    fn apply(&mut self, mode: ThemePreference) {
        self.mode = mode;

        if let Some(previous) = self.notification.take() {
            self.timeline.cancel(previous.timer);
        }
        let timer = self
            .timeline
            .schedule(self.notification_duration, ThemeEvent::DismissNotification);
        self.notification = Some(ActiveNotification {
            notification: Notification::for_mode(mode),
            timer,
        });
    }
}

impl<S> ThemeController<S> {
    pub fn mode(&self) -> ThemePreference {
        self.mode
    }

    pub fn variant(&self) -> PageVariant {
        self.variant
    }

    /// Visual state for the current mode and page variant.
    pub fn appearance(&self) -> Appearance {
        Appearance::for_mode(self.mode, self.variant)
    }

    /// The confirmation currently on screen, if it has not been dismissed.
    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref().map(|active| &active.notification)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
