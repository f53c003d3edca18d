//! The chainable query handle.

use crate::cache::SelectionCache;
use crate::engine::{dedupe, resolve, traversal_roots};
use crate::{Origin, QueryConfig, Selector};
use core::cell::RefCell;
use core::fmt;
use log::trace;
use std::rc::Rc;
use view_node::{Controller, ViewTree};

/// A selection over a view tree.
///
/// Cloning is cheap and yields another handle to the same selection. The
/// result set is computed on first read and memoized. Changing the selectors
/// does not invalidate the memoized result; call [`Query::invalidate`].
pub struct Query<'tree, T: ViewTree> {
    state: Rc<QueryState<'tree, T>>,
}

struct QueryState<'tree, T: ViewTree> {
    tree: &'tree T,
    origin: Origin<T::Node>,
    parent: Option<Query<'tree, T>>,
    selectors: RefCell<Vec<Selector<T::Node>>>,
    selected: RefCell<SelectionCache<T::Node>>,
    config: QueryConfig,
}

/// Result of [`Query::single`]: the sole view, or the whole result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selected<N> {
    /// Exactly one view was selected.
    One(N),
    /// Zero or several views, in result order.
    Many(Rc<[N]>),
}

impl<N: Copy> Selected<N> {
    /// Number of views held.
    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(selected) => selected.len(),
        }
    }

    /// True when nothing was selected.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The sole view, if there is exactly one.
    pub fn one(&self) -> Option<N> {
        match self {
            Self::One(node) => Some(*node),
            Self::Many(_) => None,
        }
    }

    /// Owned copy of every view held.
    pub fn to_vec(&self) -> Vec<N> {
        match self {
            Self::One(node) => vec![*node],
            Self::Many(selected) => selected.to_vec(),
        }
    }
}

impl<'tree, T: ViewTree> Query<'tree, T> {
    /// Create a query. Nothing is resolved until the first read.
    pub fn select(
        tree: &'tree T,
        origin: Origin<T::Node>,
        selectors: impl IntoIterator<Item = Selector<T::Node>>,
    ) -> Self {
        Self::select_with(tree, origin, selectors, QueryConfig::default())
    }

    /// Create a query with explicit engine options.
    pub fn select_with(
        tree: &'tree T,
        origin: Origin<T::Node>,
        selectors: impl IntoIterator<Item = Selector<T::Node>>,
        config: QueryConfig,
    ) -> Self {
        Self::build(tree, origin, None, selectors.into_iter().collect(), config)
    }

    fn build(
        tree: &'tree T,
        origin: Origin<T::Node>,
        parent: Option<Self>,
        selectors: Vec<Selector<T::Node>>,
        config: QueryConfig,
    ) -> Self {
        Self {
            state: Rc::new(QueryState {
                tree,
                origin,
                parent,
                selectors: RefCell::new(selectors),
                selected: RefCell::new(SelectionCache::Empty),
                config,
            }),
        }
    }

    /// The selected views. Resolves on first call, then returns the same
    /// shared slice until invalidated.
    pub fn results(&self) -> Rc<[T::Node]> {
        let cached = self.state.selected.borrow().get();
        if let Some(selected) = cached {
            trace!(target: "view_query", "cache hit for {}", self.handle_id());
            return selected;
        }

        trace!(target: "view_query", "cache miss for {}", self.handle_id());
        let computed: Rc<[T::Node]> = {
            let selectors = self.state.selectors.borrow();
            resolve(
                self.state.tree,
                &self.state.origin,
                &selectors,
                &self.state.config,
                || self.origin_views(),
            )
            .into()
        };
        self.state.selected.borrow_mut().set(Rc::clone(&computed));
        computed
    }

    /// The sole view when exactly one is selected, otherwise every view.
    pub fn single(&self) -> Selected<T::Node> {
        let selected = self.results();
        if let &[only] = &*selected {
            return Selected::One(only);
        }
        Selected::Many(selected)
    }

    /// Query within this query's results.
    pub fn scoped(&self, selectors: impl IntoIterator<Item = Selector<T::Node>>) -> Self {
        Self::build(
            self.state.tree,
            self.state.origin.clone(),
            Some(self.clone()),
            selectors.into_iter().collect(),
            self.state.config,
        )
    }

    /// Wrap explicit views into a query whose result is already known.
    ///
    /// Only direct view references survive; every other selector is dropped.
    /// Repeats are dropped too when the config de-duplicates. The selectors
    /// equal the result, so re-resolving yields the same views.
    pub fn wrap(&self, items: impl IntoIterator<Item = Selector<T::Node>>) -> Self {
        let mut nodes: Vec<T::Node> = items
            .into_iter()
            .filter_map(|item| item.as_node().copied())
            .collect();
        if self.state.config.dedupe_results {
            dedupe(self.state.tree, &mut nodes);
        }
        let wrapped = Self::build(
            self.state.tree,
            self.state.origin.clone(),
            Some(self.clone()),
            nodes.iter().copied().map(Selector::Node).collect(),
            self.state.config,
        );
        wrapped.set_selected(nodes);
        wrapped
    }

    /// Assign the result directly and mark the cache valid.
    pub fn set_selected(&self, nodes: impl IntoIterator<Item = T::Node>) {
        let selected: Rc<[T::Node]> = nodes.into_iter().collect();
        self.state.selected.borrow_mut().set(selected);
    }

    /// Replace the selectors. The memoized result is kept.
    pub fn set_selectors(&self, selectors: impl IntoIterator<Item = Selector<T::Node>>) {
        *self.state.selectors.borrow_mut() = selectors.into_iter().collect();
    }

    /// Force the next read to recompute.
    pub fn invalidate(&self) {
        self.state.selected.borrow_mut().invalidate();
    }

    /// True until the result has been computed or assigned.
    pub fn is_dirty(&self) -> bool {
        !self.state.selected.borrow().is_valid()
    }

    /// Number of selected views. Resolves if dirty.
    pub fn count(&self) -> usize {
        self.results().len()
    }

    /// True when nothing is selected. Resolves if dirty.
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// True iff exactly one view is selected and it is the origin's view.
    pub fn is_root_selection(&self) -> bool {
        let selected = self.results();
        match (&*selected, self.origin_view()) {
            ([only], Some(origin_view)) => {
                self.state.tree.identity(*only) == self.state.tree.identity(origin_view)
            }
            _ => false,
        }
    }

    /// Copy of the current selector list.
    pub fn selectors(&self) -> Vec<Selector<T::Node>> {
        self.state.selectors.borrow().clone()
    }

    #[inline]
    pub fn origin(&self) -> &Origin<T::Node> {
        &self.state.origin
    }

    #[inline]
    pub fn parent(&self) -> Option<&Self> {
        self.state.parent.as_ref()
    }

    /// The originating activity, when the origin is one.
    pub fn activity(&self) -> Option<&Rc<dyn Controller<T::Node>>> {
        match &self.state.origin {
            Origin::Activity(controller) => Some(controller),
            Origin::Screen(_) | Origin::View(_) | Origin::None => None,
        }
    }

    /// The origin's single view.
    pub fn origin_view(&self) -> Option<T::Node> {
        self.state.origin.view()
    }

    /// Views whose descendants are searched by criteria selectors.
    pub fn origin_views(&self) -> Vec<T::Node> {
        let parent_results = self.state.parent.as_ref().map(Self::results);
        traversal_roots(&self.state.origin, parent_results.as_deref())
    }

    #[inline]
    pub fn tree(&self) -> &'tree T {
        self.state.tree
    }

    /// Engine options; child handles share them.
    #[inline]
    pub fn config(&self) -> QueryConfig {
        self.state.config
    }

    /// Address-based id for diagnostics. Stable while any clone is alive.
    pub fn handle_id(&self) -> usize {
        Rc::as_ptr(&self.state).addr()
    }
}

impl<T: ViewTree> Clone for Query<'_, T> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<T: ViewTree> fmt::Display for Query<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let selected = self.results();
        write!(
            formatter,
            "Query {:#x}. {} selected. selectors: {:?}",
            self.handle_id(),
            selected.len(),
            self.state.selectors.borrow()
        )?;
        if let [only] = *selected {
            write!(formatter, "\n[{only:?}]")?;
        }
        Ok(())
    }
}

impl<T: ViewTree> fmt::Debug for Query<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Query")
            .field("origin", &self.state.origin)
            .field("selectors", &self.state.selectors.borrow())
            .field("selected", &self.state.selected.borrow())
            .field("scoped", &self.state.parent.is_some())
            .finish()
    }
}
