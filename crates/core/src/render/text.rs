//! Text rendering of the process forest
//!
//! A single depth-first pre-order pass producing one line per process
//! reachable from the root, connected by fixed ASCII markers.

use crate::models::ProcessRecord;
use crate::tree::ProcessTree;

/// Printed once per ancestor depth level.
const CONTINUATION_MARKER: &str = "|   ";
/// Printed immediately before every non-root name.
const BRANCH_MARKER: &str = "+-- ";

/// Render the subtree reachable from the tree's root.
///
/// The root line carries no indentation and no branch marker; a node at
/// depth `d` is prefixed by `d` continuation markers and one branch marker.
/// Siblings print in whatever order [`ProcessTree::sort_children`]
/// established; each child is fully expanded before its next sibling.
/// Names are never truncated or wrapped.
///
/// The traversal uses an explicit stack, so a pathologically deep process
/// chain cannot overflow the call stack.
pub fn render_tree(tree: &ProcessTree, show_pids: bool) -> String {
    let mut out = String::new();
    let mut stack = vec![(tree.root_index(), 0usize)];

    while let Some((index, depth)) = stack.pop() {
        push_line(&mut out, tree.record(index), depth, show_pids);
        // Reversed so the first sibling pops first.
        for &child in tree.children_of(index).iter().rev() {
            stack.push((child, depth + 1));
        }
    }

    out
}

fn push_line(out: &mut String, record: &ProcessRecord, depth: usize, show_pids: bool) {
    for _ in 0..depth {
        out.push_str(CONTINUATION_MARKER);
    }
    if depth > 0 {
        out.push_str(BRANCH_MARKER);
    }
    out.push_str(&record.name);
    if show_pids {
        out.push_str(&format!("({})", record.pid));
    }
    out.push('\n');
}
