//! Auto-update decisions.
//!
//! The host asks, per updatable item, whether to apply an update
//! automatically and offers its own decision as the starting point. This
//! extension forces updates on for the Genesis parent theme and leaves every
//! other item to the host's decision. That allowlist is intentionally this
//! narrow; it is not a configurable policy.

/// Theme slug whose updates are always applied.
pub const GENESIS_SLUG: &str = "genesis";

/// An updatable item offered to the auto-update filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateItem {
    /// Host-assigned slug identifying the item.
    pub slug: String,
}

impl UpdateItem {
    /// Creates an item with the given slug.
    pub fn new(slug: impl Into<String>) -> Self {
        Self { slug: slug.into() }
    }
}

/// Decides whether `item` should auto-update, given the host's `current`
/// decision.
///
/// Returns `true` unconditionally for the Genesis parent theme; otherwise
/// passes `current` through unchanged.
pub fn auto_update_decision(current: bool, item: &UpdateItem) -> bool {
    log::debug!("auto-update check for {}: host decision {current}", item.slug);

    if item.slug == GENESIS_SLUG {
        true
    } else {
        current
    }
}
