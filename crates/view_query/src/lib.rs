//! Selector queries over a host view hierarchy.
//!
//! A [`Query`] binds an [`Origin`] and a list of [`Selector`]s to a
//! [`ViewTree`](view_node::ViewTree). The result set is computed lazily on
//! first read and memoized until explicitly invalidated.
//!
//! ```text
//! Query::select(tree, origin, selectors)
//!     ↓ results()
//! blank list?  → origin view
//! otherwise    → direct references ++ matching descendants of the roots
//!     ↓
//! scoped(..) / wrap(..) derive child queries rooted at these results
//! ```
//!
//! Resolution is fail-soft: unknown selectors, missing origins and malformed
//! trees produce empty or partial results, never errors.
//!
//! # Example
//!
//! ```ignore
//! use view_query::{Origin, Query, Selector};
//!
//! let query = Query::select(&tree, Origin::View(root), [Selector::tag("row")]);
//! let buttons = query.scoped([Selector::kind("Button")]);
//! for button in buttons.results().iter() {
//!     // ...
//! }
//! ```

#![allow(
    clippy::module_name_repetitions,
    reason = "Names like QueryConfig are clearer than Config"
)]
#![allow(clippy::missing_panics_doc, reason = "Internal crate")]

mod cache;
mod config;
mod engine;
mod matcher;
mod origin;
mod query;
mod selector;
mod traversal;

#[cfg(test)]
mod fixture;

// Re-exports
pub use cache::SelectionCache;
pub use config::QueryConfig;
pub use engine::{resolve, traversal_roots};
pub use matcher::{matches, matches_any};
pub use origin::Origin;
pub use query::{Query, Selected};
pub use selector::{Selector, is_blank_list};
pub use traversal::{flatten_all, flatten_subtree};
