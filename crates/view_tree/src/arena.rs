//! Arena-backed view hierarchy.

use crate::kinds::KindTable;
use anyhow::{Context as _, Result, bail};
use indextree::{Arena, Node as ArenaNode, NodeId};
use lasso::Spur;
use log::trace;
use view_node::{Frame, ViewData, ViewTree};

/// Handle to a view inside a [`ViewArena`].
pub type ViewKey = NodeId;

#[derive(Debug)]
struct ViewNode {
    kind: Spur,
    data: ViewData,
    frame: Frame,
    view_id: Option<i32>,
}

/// Owns every view and its kind hierarchy.
///
/// `View` and `ViewGroup` are registered up front; other kinds are interned
/// on first use and can be given a parent with [`ViewArena::register_kind`].
#[derive(Debug)]
pub struct ViewArena {
    arena: Arena<ViewNode>,
    kinds: KindTable,
}

impl Default for ViewArena {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewArena {
    pub fn new() -> Self {
        let mut kinds = KindTable::new();
        kinds.register("View", None);
        kinds.register("ViewGroup", Some("View"));
        Self {
            arena: Arena::new(),
            kinds,
        }
    }

    /// Register a kind and its parent kind.
    pub fn register_kind(&mut self, name: &str, parent: Option<&str>) {
        trace!(target: "view_tree", "register kind {name} <: {parent:?}");
        self.kinds.register(name, parent);
    }

    /// Create a detached view with empty metadata.
    pub fn create(&mut self, kind: &str) -> ViewKey {
        self.create_with(kind, ViewData::new())
    }

    pub fn create_with(&mut self, kind: &str, data: ViewData) -> ViewKey {
        let kind = self.kinds.intern(kind);
        self.arena.new_node(ViewNode {
            kind,
            data,
            frame: Frame::default(),
            view_id: None,
        })
    }

    /// Append `child` as the last child of `parent`.
    ///
    /// # Errors
    /// Fails when either view was removed, when `child` already has a parent,
    /// or when the link would create a cycle.
    pub fn append(&mut self, parent: ViewKey, child: ViewKey) -> Result<()> {
        if self.is_removed(parent) || self.is_removed(child) {
            bail!("cannot link removed view ({parent} -> {child})");
        }
        if self.arena.get(child).and_then(ArenaNode::parent).is_some() {
            bail!("view {child} already has a parent");
        }
        parent
            .checked_append(child, &mut self.arena)
            .with_context(|| format!("appending view {child} to {parent}"))?;
        trace!(target: "view_tree", "appended {child} to {parent}");
        Ok(())
    }

    /// Detach `node` (and its subtree) from its parent.
    pub fn detach(&mut self, node: ViewKey) {
        node.detach(&mut self.arena);
    }

    /// Remove `node` and its whole subtree from the arena.
    pub fn remove_subtree(&mut self, node: ViewKey) {
        node.remove_subtree(&mut self.arena);
    }

    pub fn data_mut(&mut self, node: ViewKey) -> Option<&mut ViewData> {
        self.node_mut(node).map(|view| &mut view.data)
    }

    pub fn set_frame(&mut self, node: ViewKey, frame: Frame) {
        if let Some(view) = self.node_mut(node) {
            view.frame = frame;
        }
    }

    pub fn set_view_id(&mut self, node: ViewKey, view_id: i32) {
        if let Some(view) = self.node_mut(node) {
            view.view_id = Some(view_id);
        }
    }

    /// Number of live views.
    pub fn len(&self) -> usize {
        self.arena.iter().filter(|node| !node.is_removed()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_removed(&self, node: ViewKey) -> bool {
        self.arena.get(node).is_none_or(ArenaNode::is_removed)
    }

    fn node(&self, node: ViewKey) -> Option<&ViewNode> {
        self.arena
            .get(node)
            .filter(|entry| !entry.is_removed())
            .map(ArenaNode::get)
    }

    fn node_mut(&mut self, node: ViewKey) -> Option<&mut ViewNode> {
        self.arena
            .get_mut(node)
            .filter(|entry| !entry.is_removed())
            .map(ArenaNode::get_mut)
    }
}

impl ViewTree for ViewArena {
    type Node = ViewKey;

    fn child_count(&self, node: ViewKey) -> usize {
        if self.is_removed(node) {
            return 0;
        }
        node.children(&self.arena).count()
    }

    fn child_at(&self, node: ViewKey, index: usize) -> Option<ViewKey> {
        if self.is_removed(node) {
            return None;
        }
        node.children(&self.arena).nth(index)
    }

    fn children(&self, node: ViewKey) -> impl Iterator<Item = ViewKey> {
        (!self.is_removed(node))
            .then(|| node.children(&self.arena))
            .into_iter()
            .flatten()
    }

    fn parent(&self, node: ViewKey) -> Option<ViewKey> {
        self.arena
            .get(node)
            .filter(|entry| !entry.is_removed())
            .and_then(ArenaNode::parent)
    }

    fn identity(&self, node: ViewKey) -> u64 {
        usize::from(node) as u64
    }

    fn view_data(&self, node: ViewKey) -> Option<&ViewData> {
        self.node(node).map(|view| &view.data)
    }

    fn is_kind_of(&self, node: ViewKey, kind: &str) -> bool {
        self.node(node)
            .is_some_and(|view| self.kinds.is_kind_of(view.kind, kind))
    }

    fn kind_name(&self, node: ViewKey) -> &str {
        self.node(node).map_or("", |view| self.kinds.name(view.kind))
    }

    fn frame(&self, node: ViewKey) -> Frame {
        self.node(node).map_or_else(Frame::default, |view| view.frame)
    }

    fn view_id(&self, node: ViewKey) -> Option<i32> {
        self.node(node).and_then(|view| view.view_id)
    }
}
