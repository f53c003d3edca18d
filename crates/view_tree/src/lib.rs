//! In-memory view hierarchy.
//!
//! [`ViewArena`] implements [`ViewTree`](view_node::ViewTree) over an
//! `indextree` arena, with interned kind names and a single-inheritance kind
//! hierarchy for covariant kind checks. [`Window`] and [`StyleSheet`] provide
//! the activity, screen and stylesheet containers queries originate from.

mod arena;
mod host;
mod kinds;

pub use arena::{ViewArena, ViewKey};
pub use host::{StyleSheet, Window};
