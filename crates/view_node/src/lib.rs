//! View hierarchy boundary.
//!
//! The query engine never owns views. Everything it needs from the host
//! platform goes through the traits in this crate:
//!
//! - [`ViewTree`]: child/parent access, identity, kind checks and geometry
//! - [`ViewData`]: the metadata record attached to every view
//! - [`Controller`] and [`Stylesheet`]: the containers a query can originate from
//!
//! Implement [`ViewTree`] for your platform layer.

mod controller;
mod data;
mod frame;

pub use controller::{Controller, ControllerKind, Stylesheet};
pub use data::ViewData;
pub use frame::Frame;

use core::fmt::Debug;
use core::hash::Hash;

/// An adapter that abstracts the host view hierarchy.
///
/// Handles are cheap copies; the tree that produced them is the only thing
/// that can answer questions about them.
pub trait ViewTree {
    /// Opaque handle to a single view.
    type Node: Copy + Eq + Hash + Debug;

    /// Number of direct children. Leaves and non-container views return 0.
    fn child_count(&self, node: Self::Node) -> usize;

    /// Child at `index`, or `None` when the platform has nothing there.
    fn child_at(&self, node: Self::Node, index: usize) -> Option<Self::Node>;

    /// Parent view if any. The child does not own its parent.
    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// Stable, process-unique key for a view.
    fn identity(&self, node: Self::Node) -> u64;

    /// Metadata attached to the view, if the platform tracks any.
    fn view_data(&self, node: Self::Node) -> Option<&ViewData>;

    /// Covariant "is-a" check: subtypes of `kind` match.
    fn is_kind_of(&self, node: Self::Node, kind: &str) -> bool;

    /// Short kind name for diagnostics.
    fn kind_name(&self, node: Self::Node) -> &str;

    /// Geometry in parent coordinates. Diagnostics only.
    fn frame(&self, node: Self::Node) -> Frame;

    /// Platform-assigned numeric id, when the platform has one.
    fn view_id(&self, _node: Self::Node) -> Option<i32> {
        None
    }

    /// Iterate the direct children of `node`, skipping empty slots.
    ///
    /// The default walks `child_at` for every index. Hosts whose child
    /// lookup is not constant time should override it.
    fn children(&self, node: Self::Node) -> impl Iterator<Item = Self::Node>
    where
        Self: Sized,
    {
        Children {
            tree: self,
            node,
            index: 0,
            count: self.child_count(node),
        }
    }
}

/// Index-based iterator over the direct children of a view.
struct Children<'tree, T: ViewTree> {
    tree: &'tree T,
    node: T::Node,
    index: usize,
    count: usize,
}

impl<T: ViewTree> Iterator for Children<'_, T> {
    type Item = T::Node;

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < self.count {
            let index = self.index;
            self.index += 1;
            if let Some(child) = self.tree.child_at(self.node, index) {
                return Some(child);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.count.saturating_sub(self.index)))
    }
}
