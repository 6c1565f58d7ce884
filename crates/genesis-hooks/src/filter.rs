//! Value-threading decision chains.

use std::fmt;
use std::rc::Rc;

use crate::action::DEFAULT_PRIORITY;

/// Type alias for filter callback functions.
///
/// Each entry receives the value produced by the previous entry (or the
/// host's initial value) plus the event payload, and returns the value to
/// hand to the next entry.
pub type FilterFn<T, Args> = Rc<dyn Fn(T, &Args) -> T>;

struct FilterEntry<T, Args> {
    name: String,
    priority: i32,
    callback: FilterFn<T, Args>,
}

/// A named, priority-ordered chain of value transformations.
///
/// The host seeds [`apply`](Filter::apply) with an initial value; the chain
/// threads it through every entry in priority order and returns the result.
/// An empty filter is the identity.
pub struct Filter<T, Args = ()> {
    entries: Vec<FilterEntry<T, Args>>,
}

impl<T, Args> Filter<T, Args> {
    /// Creates a filter with no entries.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns true if no entries are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if an entry with the given name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    /// Registers a transformation under `name` at the given priority.
    pub fn add<F>(mut self, name: impl Into<String>, priority: i32, f: F) -> Self
    where
        F: Fn(T, &Args) -> T + 'static,
    {
        self.entries.push(FilterEntry {
            name: name.into(),
            priority,
            callback: Rc::new(f),
        });
        self
    }

    /// Registers a transformation at [`DEFAULT_PRIORITY`].
    pub fn add_default<F>(self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(T, &Args) -> T + 'static,
    {
        self.add(name, DEFAULT_PRIORITY, f)
    }

    /// Removes the entry with the given name.
    ///
    /// Returns true if an entry was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.name != name);
        self.entries.len() != before
    }

    /// Threads `initial` through all entries in priority order.
    pub fn apply(&self, initial: T, args: &Args) -> T {
        let mut order: Vec<&FilterEntry<T, Args>> = self.entries.iter().collect();
        order.sort_by_key(|e| e.priority);

        let mut current = initial;
        for entry in order {
            current = (entry.callback)(current, args);
        }
        current
    }
}

impl<T, Args> Default for Filter<T, Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, Args> Clone for Filter<T, Args> {
    fn clone(&self) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .map(|e| FilterEntry {
                    name: e.name.clone(),
                    priority: e.priority,
                    callback: Rc::clone(&e.callback),
                })
                .collect(),
        }
    }
}

impl<T, Args> fmt::Debug for Filter<T, Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter")
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
