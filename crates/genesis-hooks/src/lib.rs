//! # Genesis Hooks - Host Event Registry
//!
//! `genesis-hooks` provides the hook primitives a theme or plugin host uses
//! to expose extension points: priority-ordered [`Action`] lists for events
//! that produce side effects, value-threading [`Filter`] chains for decisions
//! an extension may amend, and a declarative [`OverrideTable`] for replacing
//! a host-registered default callback without runtime remove-then-add calls.
//!
//! ## Actions
//!
//! An action is a named list of callbacks run in priority order (lower runs
//! first, ties run in registration order). Callbacks receive mutable access
//! to the event's payload:
//!
//! ```rust
//! use genesis_hooks::{Action, DEFAULT_PRIORITY};
//!
//! let head: Action<Vec<String>> = Action::new()
//!     .add("analytics", 20, |out: &mut Vec<String>| {
//!         out.push("analytics snippet".into());
//!     })
//!     .add("meta", DEFAULT_PRIORITY, |out: &mut Vec<String>| {
//!         out.push("meta tags".into());
//!     });
//!
//! let mut output = Vec::new();
//! head.run(&mut output);
//! assert_eq!(output, vec!["meta tags".to_string(), "analytics snippet".into()]);
//! ```
//!
//! ## Filters
//!
//! A filter threads a value through its entries, each receiving the previous
//! entry's result. The host seeds the initial value and uses whatever comes
//! out the other end:
//!
//! ```rust
//! use genesis_hooks::{Filter, DEFAULT_PRIORITY};
//!
//! let allow_upload: Filter<bool, u64> = Filter::new()
//!     .add("size-cap", DEFAULT_PRIORITY, |allowed, size: &u64| {
//!         allowed && *size < 1024
//!     });
//!
//! assert!(allow_upload.apply(true, &512));
//! assert!(!allow_upload.apply(true, &4096));
//! ```
//!
//! ## Overrides
//!
//! An [`OverrideTable`] replaces same-named action entries in place, keeping
//! the original entry's priority slot. This is the declarative equivalent of
//! unhooking a host default and installing a replacement:
//!
//! ```rust
//! use genesis_hooks::{Action, OverrideTable};
//!
//! let head: Action<Vec<String>> = Action::new()
//!     .add("banner", 10, |out: &mut Vec<String>| out.push("host banner".into()));
//!
//! let overrides = OverrideTable::new()
//!     .replace("banner", |out: &mut Vec<String>| out.push("custom banner".into()));
//!
//! let head = head.with_overrides(&overrides);
//! let mut output = Vec::new();
//! head.run(&mut output);
//! assert_eq!(output, vec!["custom banner".to_string()]);
//! ```

mod action;
mod filter;
mod overrides;

pub use action::{Action, ActionFn, DEFAULT_PRIORITY};
pub use filter::{Filter, FilterFn};
pub use overrides::OverrideTable;
