//! Selector kinds accepted by a query.

/// One criterion in a selector list.
///
/// A list is OR'd: a view is selected when it matches any entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Selector<N> {
    /// A direct reference; placed in the result as-is.
    Node(N),
    /// A tag present in the view's metadata.
    Tag(String),
    /// A kind name; subtypes match.
    Kind(String),
    /// A style name assigned by the stylesheet.
    Style(String),
    /// A view identity as reported by the tree.
    Id(u64),
    /// Input that could not be interpreted. Matches nothing.
    Unknown(String),
}

impl<N> Selector<N> {
    /// Select `node` directly.
    #[inline]
    pub const fn node(node: N) -> Self {
        Self::Node(node)
    }

    /// Views carrying `tag`.
    #[inline]
    pub fn tag(tag: impl Into<String>) -> Self {
        Self::Tag(tag.into())
    }

    /// Views of kind `kind` or any of its subtypes.
    #[inline]
    pub fn kind(kind: impl Into<String>) -> Self {
        Self::Kind(kind.into())
    }

    /// Views whose style name equals `style_name`.
    #[inline]
    pub fn style(style_name: impl Into<String>) -> Self {
        Self::Style(style_name.into())
    }

    /// The view with this identity.
    #[inline]
    pub const fn id(identity: u64) -> Self {
        Self::Id(identity)
    }

    /// Blank selectors are treated as absent.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Node(_) | Self::Id(_) => false,
            Self::Tag(value) | Self::Kind(value) | Self::Style(value) => value.is_empty(),
            Self::Unknown(_) => true,
        }
    }

    /// The referenced view, for direct references.
    #[inline]
    pub const fn as_node(&self) -> Option<&N> {
        if let Self::Node(node) = self {
            Some(node)
        } else {
            None
        }
    }
}

impl<N> From<&str> for Selector<N> {
    #[inline]
    fn from(tag: &str) -> Self {
        Self::Tag(tag.to_owned())
    }
}

impl<N> From<String> for Selector<N> {
    #[inline]
    fn from(tag: String) -> Self {
        Self::Tag(tag)
    }
}

/// True when the list is empty or every entry is blank.
pub fn is_blank_list<'sel, N: 'sel>(selectors: impl IntoIterator<Item = &'sel Selector<N>>) -> bool {
    selectors.into_iter().all(Selector::is_blank)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_detection() {
        assert!(Selector::<u32>::tag("").is_blank());
        assert!(Selector::<u32>::Unknown("3.5".into()).is_blank());
        assert!(!Selector::<u32>::tag("x").is_blank());
        assert!(!Selector::node(0_u32).is_blank());
        assert!(!Selector::<u32>::id(0).is_blank());
    }

    #[test]
    fn blank_lists() {
        let empty: [Selector<u32>; 0] = [];
        assert!(is_blank_list(&empty));

        let blanks: [Selector<u32>; 2] = [Selector::style(""), Selector::Unknown(String::new())];
        assert!(is_blank_list(&blanks));

        let mixed: [Selector<u32>; 2] = [Selector::style(""), "t".into()];
        assert!(!is_blank_list(&mixed));
        assert!(is_blank_list(mixed.iter().take(1)));
    }

    #[test]
    fn strings_coerce_to_tags() {
        let from_str: Selector<u32> = "button".into();
        let from_string: Selector<u32> = String::from("button").into();
        assert_eq!(from_str, Selector::Tag("button".into()));
        assert_eq!(from_str, from_string);
        assert_eq!(Selector::node(7_u32).as_node(), Some(&7));
        assert_eq!(from_str.as_node(), None);
    }
}
