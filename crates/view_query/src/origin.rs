//! Where a query's traversal starts.

use core::fmt;
use log::debug;
use std::rc::Rc;
use view_node::{Controller, ControllerKind, Stylesheet};

/// The context a query was created from.
#[derive(Default)]
pub enum Origin<N> {
    /// An activity; its root view is the traversal root.
    Activity(Rc<dyn Controller<N>>),
    /// A screen; its root view is the traversal root.
    Screen(Rc<dyn Controller<N>>),
    /// A single view.
    View(N),
    /// No context. Only direct references can be selected.
    #[default]
    None,
}

impl<N: Copy> Origin<N> {
    /// Classify a controller by its kind.
    pub fn from_controller(controller: Rc<dyn Controller<N>>) -> Self {
        match controller.kind() {
            ControllerKind::Activity => Self::Activity(controller),
            ControllerKind::Screen => Self::Screen(controller),
        }
    }

    /// A stylesheet resolves to its owning controller, or to no origin.
    pub fn from_stylesheet(stylesheet: &dyn Stylesheet<N>) -> Self {
        stylesheet.controller().map_or_else(
            || {
                debug!(target: "view_query", "stylesheet has no controller; origin is empty");
                Self::None
            },
            Self::from_controller,
        )
    }

    /// The single view this origin stands for: a controller's root view or
    /// the view itself.
    pub fn view(&self) -> Option<N> {
        match self {
            Self::Activity(controller) | Self::Screen(controller) => controller.root_view(),
            Self::View(node) => Some(*node),
            Self::None => None,
        }
    }

    /// True when the query has no context at all.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl<N> From<Option<N>> for Origin<N> {
    fn from(node: Option<N>) -> Self {
        node.map_or(Self::None, Self::View)
    }
}

impl<N: Clone> Clone for Origin<N> {
    fn clone(&self) -> Self {
        match self {
            Self::Activity(controller) => Self::Activity(Rc::clone(controller)),
            Self::Screen(controller) => Self::Screen(Rc::clone(controller)),
            Self::View(node) => Self::View(node.clone()),
            Self::None => Self::None,
        }
    }
}

impl<N: fmt::Debug> fmt::Debug for Origin<N> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Activity(controller) => write!(formatter, "Activity({})", controller.name()),
            Self::Screen(controller) => write!(formatter, "Screen({})", controller.name()),
            Self::View(node) => formatter.debug_tuple("View").field(node).finish(),
            Self::None => formatter.write_str("None"),
        }
    }
}
