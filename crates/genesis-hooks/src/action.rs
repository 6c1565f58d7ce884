//! Priority-ordered callback lists for host events.

use std::fmt;
use std::rc::Rc;

use crate::overrides::OverrideTable;

/// Priority assigned to entries that don't care about ordering.
pub const DEFAULT_PRIORITY: i32 = 10;

/// Type alias for action callback functions.
///
/// Callbacks receive mutable access to the event payload so they can append
/// output, queue registrations, or otherwise record their effect.
pub type ActionFn<Args> = Rc<dyn Fn(&mut Args)>;

struct ActionEntry<Args> {
    name: String,
    priority: i32,
    callback: ActionFn<Args>,
}

/// A named, priority-ordered list of callbacks for one host event.
///
/// Lower priorities run first; entries with equal priority run in
/// registration order. Entry names are unique handles used by
/// [`remove`](Action::remove) and [`OverrideTable`] replacement.
pub struct Action<Args> {
    entries: Vec<ActionEntry<Args>>,
}

impl<Args> Action<Args> {
    /// Creates an action with no entries.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns true if no entries are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if an entry with the given name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    /// Registers a callback under `name` at the given priority.
    pub fn add<F>(mut self, name: impl Into<String>, priority: i32, f: F) -> Self
    where
        F: Fn(&mut Args) + 'static,
    {
        self.entries.push(ActionEntry {
            name: name.into(),
            priority,
            callback: Rc::new(f),
        });
        self
    }

    /// Removes the entry with the given name.
    ///
    /// Returns true if an entry was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.name != name);
        self.entries.len() != before
    }

    /// Applies an override table, replacing same-named entries in place.
    ///
    /// A replaced entry keeps its priority slot. Overrides naming no
    /// existing entry are appended at [`DEFAULT_PRIORITY`] so a callback is
    /// never silently dropped when the host registered nothing to replace.
    pub fn with_overrides(mut self, table: &OverrideTable<Args>) -> Self {
        for (name, callback) in table.entries() {
            match self.entries.iter_mut().find(|e| &e.name == name) {
                Some(entry) => entry.callback = Rc::clone(callback),
                None => self.entries.push(ActionEntry {
                    name: name.clone(),
                    priority: DEFAULT_PRIORITY,
                    callback: Rc::clone(callback),
                }),
            }
        }
        self
    }

    /// Runs all entries in priority order against the payload.
    pub fn run(&self, args: &mut Args) {
        let mut order: Vec<&ActionEntry<Args>> = self.entries.iter().collect();
        order.sort_by_key(|e| e.priority);
        for entry in order {
            (entry.callback)(args);
        }
    }
}

impl<Args> Default for Action<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> Clone for Action<Args> {
    fn clone(&self) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .map(|e| ActionEntry {
                    name: e.name.clone(),
                    priority: e.priority,
                    callback: Rc::clone(&e.callback),
                })
                .collect(),
        }
    }
}

// Rc<dyn Fn> has no Debug; show entry names and priorities instead.
impl<Args> fmt::Debug for Action<Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field(
                "entries",
                &self
                    .entries
                    .iter()
                    .map(|e| (e.name.as_str(), e.priority))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
