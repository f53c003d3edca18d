//! Subtree flattening.
//!
//! Order is children-level-then-nested: a view's direct children are emitted
//! first, then each child's own descendants in child order. For `A: [B, C]`,
//! `B: [D]` the result is `[B, C, D]`.

use log::trace;
use rustc_hash::FxHashSet;
use view_node::ViewTree;

/// All descendants of `node`, excluding `node` itself.
///
/// Children that claim to be their own parent are skipped, as is any view
/// already emitted, so malformed trees terminate.
pub fn flatten_subtree<T: ViewTree>(tree: &T, node: T::Node) -> Vec<T::Node> {
    let mut out = Vec::new();
    let mut seen = FxHashSet::default();
    seen.insert(tree.identity(node));
    collect_descendants(tree, node, &mut seen, &mut out);
    out
}

/// Flatten every root in order and concatenate. Roots are not included.
pub fn flatten_all<T: ViewTree>(tree: &T, roots: &[T::Node]) -> Vec<T::Node> {
    roots
        .iter()
        .flat_map(|root| flatten_subtree(tree, *root))
        .collect()
}

fn collect_descendants<T: ViewTree>(
    tree: &T,
    node: T::Node,
    seen: &mut FxHashSet<u64>,
    out: &mut Vec<T::Node>,
) {
    let parent_identity = tree.identity(node);
    let start = out.len();
    for child in tree.children(node) {
        let identity = tree.identity(child);
        if identity == parent_identity {
            trace!(target: "view_query", "skipping self-referential child {child:?}");
            continue;
        }
        if !seen.insert(identity) {
            trace!(target: "view_query", "skipping already visited view {child:?}");
            continue;
        }
        out.push(child);
    }

    let end = out.len();
    for index in start..end {
        let child = out[index];
        collect_descendants(tree, child, seen, out);
    }
}
