//! Render contract
//!
//! Flattens the tree into the entries a renderer shows, in display order.
//! Children appear only below expanded nodes.

use serde::Serialize;

use crate::domain::entities::{ExpansionState, MenuNode, MenuTree};

use super::route_matcher::ActiveBranch;

/// One visible, clickable row of the menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisibleEntry {
    /// Index path from the top level
    pub index_path: Vec<usize>,
    /// Depth level (0 = top level)
    pub depth: usize,
    pub title: String,
    pub has_children: bool,
    /// Whether the children of this entry are shown
    pub expanded: bool,
    /// Whether this entry lies on the active branch
    pub active: bool,
    /// Navigation target; `None` for containers
    pub target: Option<String>,
}

pub fn visible_entries(
    tree: &MenuTree,
    expansion: &ExpansionState,
    active: &ActiveBranch,
) -> Vec<VisibleEntry> {
    let mut out = Vec::new();
    for (i, node) in tree.top_level().iter().enumerate() {
        flatten_node(node, &[i], expansion, active, &mut out);
    }
    out
}

fn flatten_node(
    node: &MenuNode,
    path: &[usize],
    expansion: &ExpansionState,
    active: &ActiveBranch,
    out: &mut Vec<VisibleEntry>,
) {
    let expanded = node.has_children() && expansion.is_expanded(path);
    out.push(VisibleEntry {
        index_path: path.to_vec(),
        depth: path.len() - 1,
        title: node.title().to_string(),
        has_children: node.has_children(),
        expanded,
        active: active.contains(path),
        target: node.navigation_target(),
    });

    if expanded {
        for (i, child) in node.children().iter().enumerate() {
            let mut child_path = path.to_vec();
            child_path.push(i);
            flatten_node(child, &child_path, expansion, active, out);
        }
    }
}
