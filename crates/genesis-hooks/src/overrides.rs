//! Declarative replacement of host-registered action entries.

use std::fmt;
use std::rc::Rc;

use crate::action::ActionFn;

/// A table of action-entry replacements, applied when a hook table is
/// assembled via [`Action::with_overrides`](crate::Action::with_overrides).
///
/// This replaces the remove-then-re-add idiom: instead of mutating a live
/// registry, an extension declares which named defaults it supersedes and
/// the host applies the table once, after its own defaults are registered.
pub struct OverrideTable<Args> {
    replacements: Vec<(String, ActionFn<Args>)>,
}

impl<Args> OverrideTable<Args> {
    /// Creates an empty override table.
    pub fn new() -> Self {
        Self {
            replacements: Vec::new(),
        }
    }

    /// Returns true if no replacements are declared.
    pub fn is_empty(&self) -> bool {
        self.replacements.is_empty()
    }

    /// Declares that the entry named `name` is replaced by `f`.
    ///
    /// Later declarations for the same name win.
    pub fn replace<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&mut Args) + 'static,
    {
        let name = name.into();
        self.replacements.retain(|(n, _)| *n != name);
        self.replacements.push((name, Rc::new(f)));
        self
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item = &(String, ActionFn<Args>)> {
        self.replacements.iter()
    }
}

impl<Args> Default for OverrideTable<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> fmt::Debug for OverrideTable<Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverrideTable")
            .field(
                "replacements",
                &self
                    .replacements
                    .iter()
                    .map(|(name, _)| name.as_str())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
