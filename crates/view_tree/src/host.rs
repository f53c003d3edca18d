//! Activity, screen and stylesheet hosts for arena views.

use crate::ViewKey;
use core::cell::Cell;
use std::rc::Rc;
use view_node::{Controller, ControllerKind, Stylesheet};

/// An activity or screen owning a root view.
#[derive(Debug)]
pub struct Window {
    kind: ControllerKind,
    name: String,
    root: Cell<Option<ViewKey>>,
}

impl Window {
    pub fn activity(name: impl Into<String>) -> Self {
        Self::new(ControllerKind::Activity, name)
    }

    pub fn screen(name: impl Into<String>) -> Self {
        Self::new(ControllerKind::Screen, name)
    }

    fn new(kind: ControllerKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            root: Cell::new(None),
        }
    }

    /// Builder-style root assignment.
    #[must_use]
    pub fn with_root(self, root: ViewKey) -> Self {
        self.root.set(Some(root));
        self
    }

    pub fn set_root_view(&self, root: Option<ViewKey>) {
        self.root.set(root);
    }
}

impl Controller<ViewKey> for Window {
    fn kind(&self) -> ControllerKind {
        self.kind
    }

    fn root_view(&self) -> Option<ViewKey> {
        self.root.get()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// A stylesheet bound to the controller it styles.
#[derive(Default)]
pub struct StyleSheet {
    controller: Option<Rc<dyn Controller<ViewKey>>>,
}

impl StyleSheet {
    pub fn new(controller: Rc<dyn Controller<ViewKey>>) -> Self {
        Self {
            controller: Some(controller),
        }
    }

    /// A stylesheet not yet attached to any controller.
    pub fn detached() -> Self {
        Self::default()
    }
}

impl Stylesheet<ViewKey> for StyleSheet {
    fn controller(&self) -> Option<Rc<dyn Controller<ViewKey>>> {
        self.controller.as_ref().map(Rc::clone)
    }
}
