//! Per-view metadata record.

use smallvec::SmallVec;

/// Metadata the query engine reads from every view.
///
/// Tags behave as a set but keep insertion order so diagnostic output is
/// deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewData {
    style_name: Option<String>,
    tags: SmallVec<String, 4>,
    screen_root: bool,
}

impl ViewData {
    /// Create an empty record.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style style name assignment.
    #[inline]
    #[must_use]
    pub fn with_style(mut self, style_name: impl Into<String>) -> Self {
        self.style_name = Some(style_name.into());
        self
    }

    /// Builder-style tagging.
    #[inline]
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag(tag);
        self
    }

    /// Style name assigned by the stylesheet, if any.
    #[inline]
    pub fn style_name(&self) -> Option<&str> {
        self.style_name.as_deref()
    }

    /// Replace the style name.
    #[inline]
    pub fn set_style_name(&mut self, style_name: Option<String>) {
        self.style_name = style_name;
    }

    /// Add a tag. Returns `false` when the tag was already present.
    pub fn tag(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        if self.has_tag(&tag) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    /// Remove a tag. Returns `true` when it was present.
    pub fn untag(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|existing| existing != tag);
        self.tags.len() != before
    }

    /// True if the view carries `tag`.
    #[inline]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|existing| existing == tag)
    }

    /// Tags in insertion order.
    #[inline]
    pub fn tag_names(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// Number of tags.
    #[inline]
    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }

    /// Whether this view is the root view of a screen.
    #[inline]
    pub fn is_screen_root(&self) -> bool {
        self.screen_root
    }

    #[inline]
    pub fn set_screen_root(&mut self, screen_root: bool) {
        self.screen_root = screen_root;
    }
}
