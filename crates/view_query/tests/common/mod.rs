//! Shared fixtures for query integration tests.

use core::cell::Cell;
use view_node::{Frame, ViewData, ViewTree};
use view_tree::{ViewArena, ViewKey};

/// Delegating tree that counts how often children are enumerated.
pub struct CountingTree<'tree> {
    inner: &'tree ViewArena,
    child_count_calls: Cell<usize>,
}

impl<'tree> CountingTree<'tree> {
    pub fn new(inner: &'tree ViewArena) -> Self {
        Self {
            inner,
            child_count_calls: Cell::new(0),
        }
    }

    pub fn traversals(&self) -> usize {
        self.child_count_calls.get()
    }
}

impl ViewTree for CountingTree<'_> {
    type Node = ViewKey;

    fn child_count(&self, node: ViewKey) -> usize {
        self.child_count_calls.set(self.child_count_calls.get() + 1);
        self.inner.child_count(node)
    }

    fn child_at(&self, node: ViewKey, index: usize) -> Option<ViewKey> {
        self.inner.child_at(node, index)
    }

    fn parent(&self, node: ViewKey) -> Option<ViewKey> {
        self.inner.parent(node)
    }

    fn identity(&self, node: ViewKey) -> u64 {
        self.inner.identity(node)
    }

    fn view_data(&self, node: ViewKey) -> Option<&ViewData> {
        self.inner.view_data(node)
    }

    fn is_kind_of(&self, node: ViewKey, kind: &str) -> bool {
        self.inner.is_kind_of(node, kind)
    }

    fn kind_name(&self, node: ViewKey) -> &str {
        self.inner.kind_name(node)
    }

    fn frame(&self, node: ViewKey) -> Frame {
        self.inner.frame(node)
    }
}

/// Views of the sample screen.
pub struct Screen {
    pub root: ViewKey,
    pub header: ViewKey,
    pub title: ViewKey,
    pub list: ViewKey,
    pub row_one: ViewKey,
    pub row_two: ViewKey,
    pub button: ViewKey,
    pub footer_button: ViewKey,
}

/// ```text
/// root (LinearLayout, screen root)
/// ├── header (LinearLayout) [section]
/// │   └── title (TextView, :title) [t]
/// ├── list (LinearLayout) [section]
/// │   ├── row_one (TextView) [row]
/// │   └── row_two (LinearLayout) [row]
/// │       └── button (Button, :primary) [t]
/// └── footer_button (Button) [t]
/// ```
pub fn sample_screen() -> anyhow::Result<(ViewArena, Screen)> {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut views = ViewArena::new();
    views.register_kind("LinearLayout", Some("ViewGroup"));
    views.register_kind("TextView", Some("View"));
    views.register_kind("Button", Some("TextView"));

    let mut root_data = ViewData::new();
    root_data.set_screen_root(true);
    let root = views.create_with("LinearLayout", root_data);
    let header = views.create_with("LinearLayout", ViewData::new().with_tag("section"));
    let title = views.create_with("TextView", ViewData::new().with_style("title").with_tag("t"));
    let list = views.create_with("LinearLayout", ViewData::new().with_tag("section"));
    let row_one = views.create_with("TextView", ViewData::new().with_tag("row"));
    let row_two = views.create_with("LinearLayout", ViewData::new().with_tag("row"));
    let button = views.create_with("Button", ViewData::new().with_style("primary").with_tag("t"));
    let footer_button = views.create_with("Button", ViewData::new().with_tag("t"));

    views.append(root, header)?;
    views.append(header, title)?;
    views.append(root, list)?;
    views.append(list, row_one)?;
    views.append(list, row_two)?;
    views.append(row_two, button)?;
    views.append(root, footer_button)?;

    Ok((
        views,
        Screen {
            root,
            header,
            title,
            list,
            row_one,
            row_two,
            button,
            footer_button,
        },
    ))
}
