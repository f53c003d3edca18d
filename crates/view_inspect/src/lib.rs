//! Diagnostic dumps of query results.
//!
//! Renders the views selected by a [`Query`] as a table or as an indented
//! tree, and emits the result through the `log` facade or any writer.
//! Rendering reads the tree only; it never resolves anything beyond the
//! query's own result set.

mod config;
mod render;

pub use config::InspectConfig;
pub use render::Inspector;

use anyhow::{Context as _, Result};
use log::info;
use std::io::Write;
use view_node::ViewTree;
use view_query::Query;

/// Layout of a dump.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogStyle {
    /// Two rows per view, or one when the config asks for wide rows.
    Table,
    /// One row per view regardless of config.
    Wide,
    /// Indented subtree of every selected view.
    Tree,
}

/// Render a query's results.
pub fn render<T: ViewTree>(query: &Query<'_, T>, style: LogStyle, config: &InspectConfig) -> String {
    let selected = query.results();
    match style {
        LogStyle::Table => Inspector::new(config).table(query.tree(), &selected),
        LogStyle::Wide => {
            let wide = InspectConfig {
                wide: true,
                ..config.clone()
            };
            Inspector::new(&wide).table(query.tree(), &selected)
        }
        LogStyle::Tree => Inspector::new(config).tree(query.tree(), &selected),
    }
}

/// One-line description of a query.
pub fn inspect<T: ViewTree>(query: &Query<'_, T>) -> String {
    query.to_string()
}

/// Emit a dump line by line at `info` level, using the global config.
pub fn log_query<T: ViewTree>(query: &Query<'_, T>, style: LogStyle) {
    log_query_with(query, style, InspectConfig::global());
}

/// Emit a dump line by line at `info` level.
pub fn log_query_with<T: ViewTree>(query: &Query<'_, T>, style: LogStyle, config: &InspectConfig) {
    for line in render(query, style, config).lines() {
        if config.color {
            info!(target: "view_inspect", "\x1b[1;34m{line}\x1b[0m");
        } else {
            info!(target: "view_inspect", "{line}");
        }
    }
}

/// Write a dump to `writer`.
///
/// # Errors
/// Returns an error if writing or flushing fails.
pub fn write_report<T: ViewTree, W: Write>(
    writer: &mut W,
    query: &Query<'_, T>,
    style: LogStyle,
    config: &InspectConfig,
) -> Result<()> {
    writer
        .write_all(render(query, style, config).as_bytes())
        .with_context(|| format!("writing {style:?} report for {}", query.handle_id()))?;
    writer.flush().context("flushing report writer")?;
    Ok(())
}
