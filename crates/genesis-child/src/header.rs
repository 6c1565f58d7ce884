//! Conditional CSS assembly for the custom header region.
//!
//! [`HeaderSettings`] is a transient snapshot of everything the header style
//! depends on; [`assemble`](HeaderSettings::assemble) turns it into the CSS
//! text to inject into the document head, or nothing when no styling is
//! called for. The function is pure: same settings, same output, no state.

use cssparser::{ToCss, Token};

use crate::host::{self, ThemeHost};

/// Snapshot of header styling inputs for one render.
///
/// Construct directly, or from a live host with
/// [`from_host`](HeaderSettings::from_host). Color fields carry hex digits
/// without a leading `#`; well-formedness is the producer's responsibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSettings {
    /// Whether the active theme declares `custom-header` support.
    pub custom_header_supported: bool,
    /// Whether the theme registered its own head callback. When true this
    /// fallback stays silent.
    pub has_custom_callback: bool,
    /// URL of the configured header image, absent if none.
    pub header_image_url: Option<String>,
    /// Whether header title/description text should be displayed.
    pub show_header_text: bool,
    /// Current text color.
    pub text_color: String,
    /// Theme-declared default text color.
    pub default_text_color: String,
    /// CSS selector override for the header container.
    pub header_selector_override: Option<String>,
    /// HTML5 (class) vs legacy (ID) selector set.
    pub use_html5_markup: bool,
}

impl HeaderSettings {
    /// Reads a settings snapshot from the host.
    pub fn from_host<H: ThemeHost + ?Sized>(theme: &H) -> Self {
        Self {
            custom_header_supported: theme.supports_feature(host::CUSTOM_HEADER),
            has_custom_callback: theme
                .feature_option(host::CUSTOM_HEADER, host::HEAD_CALLBACK)
                .is_some(),
            header_image_url: theme.header_image_url(),
            show_header_text: theme.displays_header_text(),
            text_color: theme.header_text_color(),
            default_text_color: theme
                .feature_option(host::CUSTOM_HEADER, host::DEFAULT_TEXT_COLOR)
                .unwrap_or_default(),
            header_selector_override: theme.feature_option(host::CUSTOM_HEADER, host::HEADER_SELECTOR),
            use_html5_markup: theme.uses_html5_markup(),
        }
    }

    /// Builds the custom header CSS, or `None` when nothing should be
    /// emitted.
    ///
    /// Nothing is emitted when the theme lacks `custom-header` support or
    /// registered its own head callback, and likewise when no image is set,
    /// header text is hidden, and the text color still matches the theme
    /// default (so the host never writes an empty `<style>` block).
    ///
    /// The caller wraps the returned text in a style element and
    /// HTML-escapes it; the image URL is already serialized for a CSS
    /// `url()` context here.
    pub fn assemble(&self) -> Option<String> {
        if !self.custom_header_supported || self.has_custom_callback {
            return None;
        }

        let image = self.header_image_url.as_deref().filter(|url| !url.is_empty());
        let color_differs = self.text_color != self.default_text_color;

        if image.is_none() && !self.show_header_text && !color_differs {
            return None;
        }

        let mut output = String::new();

        if let Some(url) = image {
            output.push_str(&format!(
                "{}{{background-image:{} !important; background-repeat:no-repeat !important;}}",
                self.header_selector(),
                css_url(url),
            ));
        }

        if self.show_header_text && color_differs {
            let title = self.title_selector();
            let desc = self.description_selector();
            output.push_str(&format!(
                "{title} a, {title} a:hover, {desc} {{ color: #{} !important; }}",
                self.text_color,
            ));
        }

        if output.is_empty() {
            None
        } else {
            Some(output)
        }
    }

    /// Selector for the header container. An explicit non-empty override
    /// wins regardless of markup mode.
    fn header_selector(&self) -> &str {
        match self.header_selector_override.as_deref() {
            Some(selector) if !selector.is_empty() => selector,
            _ if self.use_html5_markup => ".custom-header .site-header",
            _ => ".custom-header #header",
        }
    }

    fn title_selector(&self) -> &'static str {
        if self.use_html5_markup {
            ".custom-header .site-title"
        } else {
            ".custom-header #title"
        }
    }

    fn description_selector(&self) -> &'static str {
        if self.use_html5_markup {
            ".custom-header .site-description"
        } else {
            ".custom-header #description"
        }
    }
}

/// Serializes a URL for embedding in a CSS `url()` context, escaping
/// anything that would terminate the token early.
fn css_url(url: &str) -> String {
    Token::UnquotedUrl(url.into()).to_css_string()
}
