//! The read-only seam to the host CMS.
//!
//! Everything this extension needs to know about the active theme flows
//! through [`ThemeHost`]. The host owns feature flags, header state, and
//! markup mode; this crate only reads them. Keeping the seam narrow means a
//! test host is a plain struct with a handful of fields.

/// Feature name for the themeable header region.
pub const CUSTOM_HEADER: &str = "custom-header";

/// Option key for the theme-registered head rendering callback.
///
/// When the theme registered its own callback, the fallback header style in
/// [`HeaderSettings::assemble`](crate::HeaderSettings::assemble) must not run.
pub const HEAD_CALLBACK: &str = "wp-head-callback";

/// Option key for the CSS selector override of the header container.
pub const HEADER_SELECTOR: &str = "header-selector";

/// Option key for the theme-declared default text color.
pub const DEFAULT_TEXT_COLOR: &str = "default-text-color";

/// Read-only queries against the active theme and its header state.
///
/// Option values are strings or absent: the three options this extension
/// reads (`wp-head-callback`, `header-selector`, `default-text-color`) are
/// all string-valued, and "did the theme register a head callback" is just
/// `feature_option(..).is_some()`.
pub trait ThemeHost {
    /// Whether the active theme declares support for `feature`.
    fn supports_feature(&self, feature: &str) -> bool;

    /// The value of `key` declared under `feature` support, if any.
    fn feature_option(&self, feature: &str, key: &str) -> Option<String>;

    /// URL of the configured header image, if one is set.
    fn header_image_url(&self) -> Option<String>;

    /// Current header text color (hex digits, no `#`).
    fn header_text_color(&self) -> String;

    /// Whether header title/description text should be displayed.
    fn displays_header_text(&self) -> bool;

    /// Whether the theme renders HTML5 markup (class selectors) rather than
    /// the legacy ID-based selector set.
    fn uses_html5_markup(&self) -> bool;
}
