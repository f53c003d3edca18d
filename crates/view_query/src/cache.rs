//! Memoized result set for a single query.

use std::rc::Rc;

/// Two-state cache. Reads of `Empty` recompute; `Valid` is returned as-is
/// until someone calls [`SelectionCache::invalidate`].
#[derive(Debug, Default)]
pub enum SelectionCache<N> {
    /// Dirty; the next read resolves.
    #[default]
    Empty,
    /// Memoized result shared with every reader.
    Valid(Rc<[N]>),
}

impl<N> SelectionCache<N> {
    /// Shared handle to the cached result, if valid.
    #[inline]
    pub fn get(&self) -> Option<Rc<[N]>> {
        match self {
            Self::Empty => None,
            Self::Valid(selected) => Some(Rc::clone(selected)),
        }
    }

    /// Store a result and mark the cache valid.
    #[inline]
    pub fn set(&mut self, selected: Rc<[N]>) {
        *self = Self::Valid(selected);
    }

    /// Drop the result.
    #[inline]
    pub fn invalidate(&mut self) {
        *self = Self::Empty;
    }

    #[inline]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }
}
