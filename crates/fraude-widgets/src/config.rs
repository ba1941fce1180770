//! Site-wide widget configuration.
//!
//! Every field has a default matching the live site, so an empty YAML
//! document (or [`SiteConfig::default`]) reproduces its behavior:
//!
//! ```rust
//! use std::time::Duration;
//! use fraude_widgets::{PageVariant, SiteConfig};
//!
//! let config = SiteConfig::from_yaml(r#"
//! page_variant: fraude
//! quiz_advance_delay_ms: 250
//! "#).unwrap();
//!
//! assert_eq!(config.storage_key, "theme");
//! assert_eq!(config.page_variant, PageVariant::Fraude);
//! assert_eq!(config.quiz_advance_delay(), Duration::from_millis(250));
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WidgetError};
use crate::theme::PageVariant;

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_QUIZ_ADVANCE_DELAY_MS: u64 = 1000;
pub const DEFAULT_NOTIFICATION_MS: u64 = 1500;

/// Configuration shared by the widgets of one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Name of the persisted slot holding the theme preference.
    pub storage_key: String,
    /// Which page style the theme controller drives.
    pub page_variant: PageVariant,
    /// Delay between revealing an answer and showing the next question.
    pub quiz_advance_delay_ms: u64,
    /// How long a theme-change confirmation stays on screen.
    pub notification_ms: u64,
}

impl SiteConfig {
    /// Parses a configuration from YAML. Missing fields take their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Reads and parses a YAML configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| WidgetError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    pub fn quiz_advance_delay(&self) -> Duration {
        Duration::from_millis(self.quiz_advance_delay_ms)
    }

    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_ms)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            page_variant: PageVariant::Standard,
            quiz_advance_delay_ms: DEFAULT_QUIZ_ADVANCE_DELAY_MS,
            notification_ms: DEFAULT_NOTIFICATION_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_document_is_default() {
        let config = SiteConfig::from_yaml("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn defaults_match_site_timings() {
        let config = SiteConfig::default();
        assert_eq!(config.quiz_advance_delay(), Duration::from_secs(1));
        assert_eq!(config.notification_duration(), Duration::from_millis(1500));
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = SiteConfig::from_yaml("storage_key: site-theme\n").unwrap();
        assert_eq!(config.storage_key, "site-theme");
        assert_eq!(config.page_variant, PageVariant::Standard);
        assert_eq!(config.notification_ms, DEFAULT_NOTIFICATION_MS);
    }

    #[test]
    fn unknown_variant_is_rejected() {
        let result = SiteConfig::from_yaml("page_variant: neon\n");
        assert!(matches!(result, Err(WidgetError::Config(_))));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "page_variant: fraude").unwrap();

        let config = SiteConfig::from_file(file.path()).unwrap();
        assert_eq!(config.page_variant, PageVariant::Fraude);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = SiteConfig::from_file("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, WidgetError::ConfigIo { .. }));
        assert!(err.to_string().contains("here.yaml"));
    }
}
