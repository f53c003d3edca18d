//! Single-view selector matching.

use crate::Selector;
use view_node::{ViewData, ViewTree};

/// Match a selector list against a view. Entries are OR'd.
pub fn matches_any<'sel, T>(
    tree: &T,
    node: T::Node,
    selectors: impl IntoIterator<Item = &'sel Selector<T::Node>>,
) -> bool
where
    T: ViewTree,
    T::Node: 'sel,
{
    selectors
        .into_iter()
        .any(|selector| matches(tree, node, selector))
}

/// Match one selector against a view. Never fails; unusable selectors match nothing.
pub fn matches<T: ViewTree>(tree: &T, node: T::Node, selector: &Selector<T::Node>) -> bool {
    match selector {
        Selector::Node(other) => tree.identity(node) == tree.identity(*other),
        Selector::Id(identity) => tree.identity(node) == *identity,
        Selector::Kind(kind) => !kind.is_empty() && tree.is_kind_of(node, kind),
        Selector::Tag(tag) => tree
            .view_data(node)
            .is_some_and(|data| data.has_tag(tag)),
        Selector::Style(style_name) => tree
            .view_data(node)
            .and_then(ViewData::style_name)
            .is_some_and(|assigned| assigned == style_name),
        Selector::Unknown(_) => false,
    }
}
