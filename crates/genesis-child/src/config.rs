//! Extension configuration.
//!
//! [`ChildThemeConfig`] carries the handful of facts the extension cannot
//! learn from the host at render time: where the child theme's stylesheet
//! lives on disk, the URL it is served from, the display name used to derive
//! the enqueue handle, and whether the site runs in debug mode. Configs can
//! be built programmatically or loaded from YAML:
//!
//! ```rust
//! use genesis_child::ChildThemeConfig;
//!
//! let config = ChildThemeConfig::from_yaml(r#"
//! theme-name: My Child Theme
//! stylesheet-dir: /srv/www/themes/my-child
//! stylesheet-url: https://example.com/themes/my-child
//! debug: true
//! "#).unwrap();
//!
//! assert_eq!(config.theme_name.as_deref(), Some("My Child Theme"));
//! assert!(config.debug);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Static configuration for the child-theme extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ChildThemeConfig {
    /// Display name of the child theme; slugified into the enqueue handle.
    /// When absent the handle falls back to
    /// [`FALLBACK_HANDLE`](crate::enqueue::FALLBACK_HANDLE).
    #[serde(default)]
    pub theme_name: Option<String>,

    /// Directory holding the child theme's stylesheet files.
    pub stylesheet_dir: PathBuf,

    /// Base URL the stylesheet directory is served from.
    pub stylesheet_url: String,

    /// Debug mode: selects the unminified stylesheet and keeps the host's
    /// deprecated code paths loadable.
    #[serde(default)]
    pub debug: bool,
}

impl ChildThemeConfig {
    /// Creates a config with the required stylesheet location fields.
    pub fn new(stylesheet_dir: impl Into<PathBuf>, stylesheet_url: impl Into<String>) -> Self {
        Self {
            theme_name: None,
            stylesheet_dir: stylesheet_dir.into(),
            stylesheet_url: stylesheet_url.into(),
            debug: false,
        }
    }

    /// Sets the child theme's display name, returning `self` for chaining.
    pub fn with_theme_name(mut self, name: impl Into<String>) -> Self {
        self.theme_name = Some(name.into());
        self
    }

    /// Sets debug mode, returning `self` for chaining.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Parses a config from YAML text.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads a config from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_yaml_uses_defaults() {
        let config = ChildThemeConfig::from_yaml(
            "stylesheet-dir: /theme\nstylesheet-url: https://example.com/theme\n",
        )
        .unwrap();
        assert_eq!(config.theme_name, None);
        assert!(!config.debug);
        assert_eq!(config.stylesheet_dir, PathBuf::from("/theme"));
        assert_eq!(config.stylesheet_url, "https://example.com/theme");
    }

    #[test]
    fn test_missing_required_field_is_an_error() {
        let result = ChildThemeConfig::from_yaml("theme-name: Nope\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_builder_matches_yaml() {
        let built = ChildThemeConfig::new("/theme", "https://example.com/theme")
            .with_theme_name("My Child Theme")
            .with_debug(true);
        let parsed = ChildThemeConfig::from_yaml(
            "theme-name: My Child Theme\n\
             stylesheet-dir: /theme\n\
             stylesheet-url: https://example.com/theme\n\
             debug: true\n",
        )
        .unwrap();
        assert_eq!(built, parsed);
    }

    #[test]
    fn test_from_file_missing_file() {
        let result = ChildThemeConfig::from_file("/nonexistent/config.yaml");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
