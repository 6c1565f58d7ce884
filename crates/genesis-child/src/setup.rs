//! Lifecycle wiring.
//!
//! [`Lifecycle`] is the slice of the host's hook table this extension cares
//! about: the document-head action, the stylesheet-enqueue action, and the
//! auto-update and deprecated-code filters. The host owns the lifecycle and
//! drives its events; [`GenesisChild::install`] declares this extension's
//! entries and overrides into it.
//!
//! There is no process-wide instance anywhere: the extension is constructed
//! with its configuration and host handle, and installation is an explicit
//! call on a caller-owned lifecycle.

use std::rc::Rc;

use genesis_hooks::{Action, Filter, OverrideTable, DEFAULT_PRIORITY};

use crate::config::ChildThemeConfig;
use crate::enqueue::{self, StylesheetQueue, ENQUEUE_PRIORITY};
use crate::header::HeaderSettings;
use crate::host::ThemeHost;
use crate::update::{self, UpdateItem};

/// Name of the document-head entry that renders the custom header style.
///
/// Hosts register their default header styling under this name; `install`
/// replaces it in place via an override.
pub const HEAD_STYLE_HOOK: &str = "custom-header-style";

/// Name of the enqueue entry registering the main stylesheet.
pub const MAIN_STYLESHEET_HOOK: &str = "main-stylesheet";

/// Name of the auto-update filter entry.
pub const AUTO_UPDATE_HOOK: &str = "genesis-auto-update";

/// Name of the deprecated-code gate filter entry.
pub const LOAD_DEPRECATED_HOOK: &str = "skip-deprecated";

/// Inline fragments destined for the document head.
///
/// Callbacks on the document-head action push raw CSS here; the host wraps
/// each fragment in a style element and HTML-escapes it exactly once per
/// render.
#[derive(Debug, Clone, Default)]
pub struct HeadOutput {
    styles: Vec<String>,
}

impl HeadOutput {
    /// Creates an empty head output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a CSS fragment.
    pub fn push_style(&mut self, css: impl Into<String>) {
        self.styles.push(css.into());
    }

    /// All collected CSS fragments, in emission order.
    pub fn styles(&self) -> &[String] {
        &self.styles
    }

    /// Returns true if nothing was emitted.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

/// The host hook slots this extension participates in.
#[derive(Debug, Clone, Default)]
pub struct Lifecycle {
    /// Runs once per page render to collect inline head styles.
    pub document_head: Action<HeadOutput>,
    /// Runs when the host gathers stylesheets for delivery.
    pub enqueue_scripts: Action<StylesheetQueue>,
    /// Consulted per updatable item with the host's own decision.
    pub auto_update: Filter<bool, UpdateItem>,
    /// Consulted once at boot; `false` skips loading deprecated host code.
    pub load_deprecated: Filter<bool>,
}

impl Lifecycle {
    /// Creates a lifecycle with no entries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the document-head event and returns what it produced.
    pub fn render_head(&self) -> HeadOutput {
        let mut output = HeadOutput::new();
        self.document_head.run(&mut output);
        output
    }

    /// Runs the enqueue event and returns the collected registrations.
    pub fn collect_stylesheets(&self) -> StylesheetQueue {
        let mut queue = StylesheetQueue::new();
        self.enqueue_scripts.run(&mut queue);
        queue
    }
}

/// The child-theme extension: custom header styling, main stylesheet
/// registration, forced Genesis updates, and the deprecated-code gate.
///
/// All state is explicit: configuration and the host handle come in through
/// [`new`](GenesisChild::new), and the extension only touches the lifecycle
/// handed to [`install`](GenesisChild::install).
#[derive(Debug)]
pub struct GenesisChild<H> {
    config: ChildThemeConfig,
    host: Rc<H>,
}

impl<H: ThemeHost + 'static> GenesisChild<H> {
    /// Creates the extension from its configuration and host handle.
    pub fn new(config: ChildThemeConfig, host: H) -> Self {
        Self {
            config,
            host: Rc::new(host),
        }
    }

    /// The extension's configuration.
    pub fn config(&self) -> &ChildThemeConfig {
        &self.config
    }

    /// Declares this extension's hook entries into `lifecycle` and returns
    /// the wired result.
    ///
    /// Call after the host registered its defaults: the header-style
    /// callback replaces the host's [`HEAD_STYLE_HOOK`] entry in place, so
    /// ordering relative to the host's other head callbacks is preserved.
    pub fn install(&self, mut lifecycle: Lifecycle) -> Lifecycle {
        let host = Rc::clone(&self.host);
        let overrides = OverrideTable::new().replace(HEAD_STYLE_HOOK, move |out: &mut HeadOutput| {
            if let Some(css) = HeaderSettings::from_host(host.as_ref()).assemble() {
                out.push_style(css);
            }
        });
        lifecycle.document_head = lifecycle.document_head.with_overrides(&overrides);

        let config = self.config.clone();
        lifecycle.enqueue_scripts = lifecycle.enqueue_scripts.add(
            MAIN_STYLESHEET_HOOK,
            ENQUEUE_PRIORITY,
            move |queue: &mut StylesheetQueue| match enqueue::main_stylesheet(&config) {
                Ok(registration) => queue.enqueue(registration),
                Err(err) => log::warn!("skipping main stylesheet: {err}"),
            },
        );

        lifecycle.auto_update = lifecycle.auto_update.add(
            AUTO_UPDATE_HOOK,
            DEFAULT_PRIORITY,
            |current, item: &UpdateItem| update::auto_update_decision(current, item),
        );

        if !self.config.debug {
            lifecycle.load_deprecated =
                lifecycle
                    .load_deprecated
                    .add(LOAD_DEPRECATED_HOOK, DEFAULT_PRIORITY, |_, _: &()| false);
        }

        lifecycle
    }
}
