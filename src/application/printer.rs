//! Drives the pipeline: depth → balance → column table → level order → render.

use std::fmt::Display;
use std::io::Write;

use tracing::{debug, instrument};

use crate::application::render::render;
use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{balance, depth, is_balanced, level_order, ColumnTable, Node};

/// Renders the tree as a level-aligned diagram.
///
/// An empty tree renders as the empty string.
pub fn render_tree<T: Clone + Display>(root: Option<&Node<T>>) -> ApplicationResult<String> {
    render_tree_with_depth(root, depth(root))
}

/// Renders the tree when its depth is already known, e.g. from [`ensure_depth_within`].
///
/// `tree_depth` must be the depth of `root`: a smaller value cuts off the deepest
/// levels, a larger one pads the diagram with blank levels.
#[instrument(level = "debug", skip(root))]
pub fn render_tree_with_depth<T: Clone + Display>(
    root: Option<&Node<T>>,
    tree_depth: usize,
) -> ApplicationResult<String> {
    if root.is_none() || tree_depth == 0 {
        debug!("empty tree, nothing to render");
        return Ok(String::new());
    }

    let balanced = balance(root, tree_depth);
    debug_assert!(is_balanced(balanced.as_deref()));
    let table = ColumnTable::build(tree_depth);
    let values = level_order(balanced.as_deref());
    debug!(
        tree_depth,
        slots = table.slot_count(),
        width = table.width(),
        "rendering tree"
    );

    Ok(render(&values, &table)?)
}

/// Writes the diagram of `root` to `out`. Writes nothing for an empty tree.
pub fn print_tree<T, W>(root: Option<&Node<T>>, out: &mut W) -> ApplicationResult<()>
where
    T: Clone + Display,
    W: Write + ?Sized,
{
    write_diagram(&render_tree(root)?, out)
}

/// Like [`print_tree`], with the depth already computed by the caller.
pub fn print_tree_with_depth<T, W>(
    root: Option<&Node<T>>,
    tree_depth: usize,
    out: &mut W,
) -> ApplicationResult<()>
where
    T: Clone + Display,
    W: Write + ?Sized,
{
    write_diagram(&render_tree_with_depth(root, tree_depth)?, out)
}

fn write_diagram<W: Write + ?Sized>(diagram: &str, out: &mut W) -> ApplicationResult<()> {
    if diagram.is_empty() {
        return Ok(());
    }
    out.write_all(diagram.as_bytes())
        .with_context("write tree diagram")?;
    out.flush().with_context("flush output")
}

/// Returns the tree's depth, or `TooDeep` when it is beyond `max_depth`.
pub fn ensure_depth_within<T>(root: Option<&Node<T>>, max_depth: usize) -> ApplicationResult<usize> {
    let depth = depth(root);
    if depth > max_depth {
        return Err(ApplicationError::TooDeep {
            depth,
            max: max_depth,
        });
    }
    Ok(depth)
}
