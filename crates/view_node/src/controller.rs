//! Containers a query can originate from.

use std::rc::Rc;

/// Which flavor of container a controller is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControllerKind {
    /// Platform activity; owns the top-level content view.
    Activity,
    /// Application-level screen wrapping a root view.
    Screen,
}

/// An activity- or screen-like container exposing its top-level view.
pub trait Controller<N> {
    fn kind(&self) -> ControllerKind;

    /// Top-level view, or `None` before the content has been set.
    fn root_view(&self) -> Option<N>;

    /// Name used in diagnostics.
    fn name(&self) -> &str;
}

/// A stylesheet; queries created from one resolve to its controller.
pub trait Stylesheet<N> {
    fn controller(&self) -> Option<Rc<dyn Controller<N>>>;
}
