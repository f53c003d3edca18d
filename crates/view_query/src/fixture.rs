//! Minimal in-crate view tree for unit tests. Allows malformed links.

use core::cell::Cell;
use view_node::{Frame, ViewData, ViewTree};

const KIND_PARENTS: &[(&str, &str)] = &[
    ("Button", "TextView"),
    ("TextView", "View"),
    ("ImageView", "View"),
    ("ViewGroup", "View"),
    ("LinearLayout", "ViewGroup"),
];

pub struct FixtureNode {
    kind: &'static str,
    data: ViewData,
    parent: Option<usize>,
    children: Vec<usize>,
}

#[derive(Default)]
pub struct FixtureTree {
    nodes: Vec<FixtureNode>,
    child_count_calls: Cell<usize>,
}

impl FixtureTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, kind: &'static str, data: ViewData) -> usize {
        self.nodes.push(FixtureNode {
            kind,
            data,
            parent: None,
            children: Vec::new(),
        });
        self.nodes.len() - 1
    }

    /// Link without any validation; `link(n, n)` builds a self-loop.
    pub fn link(&mut self, parent: usize, child: usize) {
        self.nodes[parent].children.push(child);
        self.nodes[child].parent = Some(parent);
    }

    pub fn child_count_calls(&self) -> usize {
        self.child_count_calls.get()
    }
}

impl ViewTree for FixtureTree {
    type Node = usize;

    fn child_count(&self, node: usize) -> usize {
        self.child_count_calls.set(self.child_count_calls.get() + 1);
        self.nodes.get(node).map_or(0, |entry| entry.children.len())
    }

    fn child_at(&self, node: usize, index: usize) -> Option<usize> {
        self.nodes.get(node)?.children.get(index).copied()
    }

    fn parent(&self, node: usize) -> Option<usize> {
        self.nodes.get(node)?.parent
    }

    fn identity(&self, node: usize) -> u64 {
        node as u64
    }

    fn view_data(&self, node: usize) -> Option<&ViewData> {
        self.nodes.get(node).map(|entry| &entry.data)
    }

    fn is_kind_of(&self, node: usize, kind: &str) -> bool {
        let Some(entry) = self.nodes.get(node) else {
            return false;
        };
        let mut current = Some(entry.kind);
        while let Some(name) = current {
            if name == kind {
                return true;
            }
            current = KIND_PARENTS
                .iter()
                .find(|(child, _)| *child == name)
                .map(|(_, parent)| *parent);
        }
        false
    }

    fn kind_name(&self, node: usize) -> &str {
        self.nodes.get(node).map_or("", |entry| entry.kind)
    }

    fn frame(&self, _node: usize) -> Frame {
        Frame::default()
    }
}
