//! Table and tree renderers.

use crate::InspectConfig;
use rustc_hash::FxHashSet;
use view_node::{ViewData, ViewTree};

const ID_WIDTH: usize = 12;
const FRAME_WIDTH: usize = 36;
const TAGS_WIDTH: usize = 38;

/// Renders views using a borrowed configuration.
#[derive(Clone, Copy, Debug)]
pub struct Inspector<'cfg> {
    config: &'cfg InspectConfig,
}

impl<'cfg> Inspector<'cfg> {
    pub const fn new(config: &'cfg InspectConfig) -> Self {
        Self { config }
    }

    /// One block per view: identity, kind, style and frame on the first row;
    /// parent, child count and tags on the second. Wide mode joins the rows.
    pub fn table<T: ViewTree>(&self, tree: &T, nodes: &[T::Node]) -> String {
        let wide = self.config.wide;
        let separator = self.separator();
        let mut out = String::new();

        let first_header = self.row(["id", "object id", "scr", "class", "style_name", "frame"]);
        let second_header = self.row(["sv id", "", "een", "superview", "subviews count", "tags"]);
        if wide {
            push_line(&mut out, &format!("{first_header}{second_header}"));
            push_line(&mut out, &format!("{separator}{separator}"));
        } else {
            push_line(&mut out, &first_header);
            push_line(&mut out, &second_header);
            push_line(&mut out, &separator);
        }

        for node in nodes {
            let first_row = self.first_row(tree, *node);
            let second_row = self.second_row(tree, *node);
            if wide {
                push_line(&mut out, &format!("{first_row}{second_row}"));
            } else {
                push_line(&mut out, &first_row);
                push_line(&mut out, &second_row);
                push_line(&mut out, &separator);
            }
        }
        out
    }

    /// Indented dump of each view and its full subtree.
    ///
    /// Children are listed in child order. Self-referential and repeated
    /// children are skipped so malformed trees terminate.
    pub fn tree<T: ViewTree>(&self, tree: &T, nodes: &[T::Node]) -> String {
        let mut out = String::new();
        for node in nodes {
            out.push('\n');
            let mut seen = FxHashSet::default();
            seen.insert(tree.identity(*node));
            self.tree_node(tree, *node, 0, &mut seen, &mut out);
        }
        out
    }

    fn tree_node<T: ViewTree>(
        &self,
        tree: &T,
        node: T::Node,
        depth: usize,
        seen: &mut FxHashSet<u64>,
        out: &mut String,
    ) {
        for level in 0..depth {
            out.push_str(if level + 1 == depth { "    ├" } else { "    │" });
        }
        out.push_str("───");

        let data = tree.view_data(node);
        out.push_str(&format!("{}|{} ", view_id(tree, node), tree.identity(node)));
        if data.is_some_and(ViewData::is_screen_root) {
            out.push_str("SCREEN ROOT/");
        }
        out.push_str(&head(tree.kind_name(node), self.config.kind_width));
        if let Some(style_name) = data.and_then(ViewData::style_name) {
            out.push_str(&format!("  ( :{} )", head(style_name, self.config.style_width)));
        }
        if let Some(meta) = data.filter(|meta| meta.tag_count() > 0) {
            out.push_str(&format!("  [ {} ]", tags(meta)));
        }
        out.push_str(&format!("   {}\n", tree.frame(node)));

        let identity = tree.identity(node);
        for child in tree.children(node) {
            let child_identity = tree.identity(child);
            if child_identity == identity || !seen.insert(child_identity) {
                continue;
            }
            self.tree_node(tree, child, depth + 1, seen, out);
        }
    }

    fn first_row<T: ViewTree>(&self, tree: &T, node: T::Node) -> String {
        let data = tree.view_data(node);
        let screen_root = if data.is_some_and(ViewData::is_screen_root) {
            " √ "
        } else {
            "   "
        };
        let style_name = data.and_then(ViewData::style_name).unwrap_or_default();
        self.row([
            &view_id(tree, node),
            &tree.identity(node).to_string(),
            screen_root,
            &tail(tree.kind_name(node), self.config.kind_width.saturating_sub(1)),
            &head(style_name, self.config.style_width),
            &tree.frame(node).to_string(),
        ])
    }

    fn second_row<T: ViewTree>(&self, tree: &T, node: T::Node) -> String {
        let (parent_id, parent_kind) = tree.parent(node).map_or_else(
            || (String::new(), String::new()),
            |parent| {
                (
                    view_id(tree, parent),
                    head(tree.kind_name(parent), self.config.kind_width),
                )
            },
        );
        let tag_list = tree.view_data(node).map(tags).unwrap_or_default();
        self.row([
            &parent_id,
            "",
            "   ",
            &parent_kind,
            &tree.child_count(node).to_string(),
            &tag_list,
        ])
    }

    fn row(&self, cells: [&str; 6]) -> String {
        let [first, second, third, fourth, fifth, sixth] = cells;
        format!(
            " {first:<id$}| {second:<id$}|{third:<3}| {fourth:<kind$}| {fifth:<style$}| {sixth:<frame$}|",
            id = ID_WIDTH,
            kind = self.config.kind_width,
            style = self.config.style_width,
            frame = FRAME_WIDTH.max(TAGS_WIDTH),
        )
    }

    fn separator(&self) -> String {
        [
            ID_WIDTH + 1,
            ID_WIDTH + 1,
            3,
            self.config.kind_width + 1,
            self.config.style_width + 1,
            FRAME_WIDTH.max(TAGS_WIDTH) + 1,
        ]
        .iter()
        .fold(String::new(), |mut line, width| {
            line.push_str(&"-".repeat(*width));
            line.push('|');
            line
        })
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

fn view_id<T: ViewTree>(tree: &T, node: T::Node) -> String {
    tree.view_id(node)
        .map_or_else(|| String::from("-"), |id_value| id_value.to_string())
}

fn tags(data: &ViewData) -> String {
    data.tag_names().collect::<Vec<_>>().join(",")
}

/// First `max` characters.
fn head(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Last `max` characters.
fn tail(text: &str, max: usize) -> String {
    let count = text.chars().count();
    text.chars().skip(count.saturating_sub(max)).collect()
}
