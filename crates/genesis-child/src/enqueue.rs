//! Main stylesheet registration.
//!
//! Builds the record the host needs to deliver the child theme's main
//! stylesheet: a handle derived from the theme name, the file URL, and a
//! cache-busting version token derived from the file's modification time.
//! Debug mode selects `style.css`; production selects `style.min.css`.

use std::fs;
use std::path::Path;
use std::time::UNIX_EPOCH;

use deunicode::deunicode;

use crate::config::ChildThemeConfig;
use crate::error::EnqueueError;

/// Priority for the main-stylesheet entry on the enqueue event, early
/// enough that theme styles land before anything registered at the default
/// priority.
pub const ENQUEUE_PRIORITY: i32 = 5;

/// Handle used when no theme name is configured.
pub const FALLBACK_HANDLE: &str = "child-theme";

/// A stylesheet the host should deliver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylesheetRegistration {
    /// Unique handle the host files this registration under.
    pub handle: String,
    /// URL of the stylesheet file.
    pub url: String,
    /// Cache-busting version token (stylesheet mtime, seconds since epoch).
    pub version: String,
}

/// Registrations collected while the enqueue event runs.
#[derive(Debug, Clone, Default)]
pub struct StylesheetQueue {
    registrations: Vec<StylesheetRegistration>,
}

impl StylesheetQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a registration to the queue.
    pub fn enqueue(&mut self, registration: StylesheetRegistration) {
        self.registrations.push(registration);
    }

    /// All registrations collected so far, in enqueue order.
    pub fn registrations(&self) -> &[StylesheetRegistration] {
        &self.registrations
    }

    /// Returns true if a registration with the given handle was collected.
    pub fn contains_handle(&self, handle: &str) -> bool {
        self.registrations.iter().any(|r| r.handle == handle)
    }
}

/// File name suffix for the active script mode: minified in production,
/// plain in debug.
pub fn stylesheet_suffix(debug: bool) -> &'static str {
    if debug {
        ""
    } else {
        ".min"
    }
}

/// Builds the registration for the child theme's main stylesheet.
///
/// The version token is read from the stylesheet file's modification time,
/// so a deploy that touches the file busts caches without any manual
/// version bump.
///
/// # Errors
///
/// Returns [`EnqueueError::Stylesheet`] when the stylesheet file cannot be
/// inspected (typically: it does not exist for the active suffix).
pub fn main_stylesheet(config: &ChildThemeConfig) -> Result<StylesheetRegistration, EnqueueError> {
    let suffix = stylesheet_suffix(config.debug);
    let file_name = format!("style{suffix}.css");
    let path = config.stylesheet_dir.join(&file_name);

    let version = mtime_token(&path)?;

    let handle = config
        .theme_name
        .as_deref()
        .map(slugify)
        .filter(|slug| !slug.is_empty())
        .unwrap_or_else(|| FALLBACK_HANDLE.to_string());

    let url = format!(
        "{}/{file_name}",
        config.stylesheet_url.trim_end_matches('/')
    );

    log::debug!("registering stylesheet {handle}: {url} (v{version})");

    Ok(StylesheetRegistration {
        handle,
        url,
        version,
    })
}

fn mtime_token(path: &Path) -> Result<String, EnqueueError> {
    let modified = fs::metadata(path)
        .and_then(|meta| meta.modified())
        .map_err(|source| EnqueueError::Stylesheet {
            path: path.to_path_buf(),
            source,
        })?;

    // Pre-epoch mtimes collapse to zero rather than failing registration.
    let seconds = modified
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    Ok(seconds.to_string())
}

/// Lowercased, transliterated, dash-separated form of a theme name.
fn slugify(name: &str) -> String {
    let transliterated = deunicode(name);
    let mut slug: String = transliterated
        .to_lowercase()
        .replace(' ', "-")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect();
    // Collapse consecutive dashes
    while slug.contains("--") {
        slug = slug.replace("--", "-");
    }
    slug.trim_matches('-').to_string()
}
