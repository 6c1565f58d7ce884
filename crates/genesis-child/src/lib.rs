//! # Genesis Child - Header Styling Fixes for Genesis-Style Themes
//!
//! `genesis-child` replaces a theme host's default custom-header styling
//! with a corrected one, registers the child theme's main stylesheet with a
//! modification-time version token, forces automatic updates for the Genesis
//! parent theme, and skips deprecated host code outside of debug mode.
//!
//! The heart of the crate is [`HeaderSettings::assemble`]: a pure function
//! from a snapshot of header settings to the CSS text (if any) to inject
//! into the document head.
//!
//! ## Assembling header CSS
//!
//! ```rust
//! use genesis_child::HeaderSettings;
//!
//! let settings = HeaderSettings {
//!     custom_header_supported: true,
//!     has_custom_callback: false,
//!     header_image_url: Some("http://example.com/banner.png".into()),
//!     show_header_text: true,
//!     text_color: "222222".into(),
//!     default_text_color: "000000".into(),
//!     header_selector_override: None,
//!     use_html5_markup: true,
//! };
//!
//! let css = settings.assemble().unwrap();
//! assert!(css.contains("background-image:url(http://example.com/banner.png)"));
//! assert!(css.contains("color: #222222"));
//! ```
//!
//! ## Wiring into a host lifecycle
//!
//! The extension takes its configuration and a [`ThemeHost`] handle
//! explicitly, then declares its hook entries into a caller-owned
//! [`Lifecycle`]:
//!
//! ```rust
//! use genesis_child::{ChildThemeConfig, GenesisChild, Lifecycle, ThemeHost};
//!
//! struct Host;
//!
//! impl ThemeHost for Host {
//!     fn supports_feature(&self, feature: &str) -> bool {
//!         feature == "custom-header"
//!     }
//!     fn feature_option(&self, _: &str, _: &str) -> Option<String> {
//!         None
//!     }
//!     fn header_image_url(&self) -> Option<String> {
//!         Some("http://example.com/banner.png".into())
//!     }
//!     fn header_text_color(&self) -> String {
//!         "000000".into()
//!     }
//!     fn displays_header_text(&self) -> bool {
//!         false
//!     }
//!     fn uses_html5_markup(&self) -> bool {
//!         true
//!     }
//! }
//!
//! let config = ChildThemeConfig::new("/srv/theme", "https://example.com/theme");
//! let lifecycle = GenesisChild::new(config, Host).install(Lifecycle::new());
//!
//! let head = lifecycle.render_head();
//! assert!(head.styles()[0].contains("background-image"));
//! ```

pub mod config;
pub mod enqueue;
pub mod error;
pub mod header;
pub mod host;
pub mod setup;
pub mod update;

pub use config::ChildThemeConfig;
pub use enqueue::{
    main_stylesheet, stylesheet_suffix, StylesheetQueue, StylesheetRegistration, ENQUEUE_PRIORITY,
    FALLBACK_HANDLE,
};
pub use error::{ConfigError, EnqueueError};
pub use header::HeaderSettings;
pub use host::ThemeHost;
pub use setup::{
    GenesisChild, HeadOutput, Lifecycle, AUTO_UPDATE_HOOK, HEAD_STYLE_HOOK, LOAD_DEPRECATED_HOOK,
    MAIN_STYLESHEET_HOOK,
};
pub use update::{auto_update_decision, UpdateItem, GENESIS_SLUG};

// Re-export the hook primitives so hosts can build lifecycles without a
// direct genesis-hooks dependency.
pub use genesis_hooks::{Action, Filter, OverrideTable, DEFAULT_PRIORITY};
