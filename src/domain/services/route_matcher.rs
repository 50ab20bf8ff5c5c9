//! Active branch resolution
//!
//! Decides which top-level entry (and which nested entries below it) hold
//! the current location.
//!
//! At the top level a descendant match beats a self match: an entry with
//! children is active through its own route only on an exact match. The
//! first qualifying entry wins; later siblings are not considered.

use serde::Serialize;

use crate::domain::entities::{MenuNode, MenuTree};
use crate::domain::value_objects::{match_route, RouteMatch};

/// Index chain from the top level down to the deepest active node
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ActiveBranch {
    chain: Vec<usize>,
}

impl ActiveBranch {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn from_chain(chain: Vec<usize>) -> Self {
        Self { chain }
    }

    /// Active top-level index
    pub fn top(&self) -> Option<usize> {
        self.chain.first().copied()
    }

    /// Active index one level below the active top-level entry
    pub fn child(&self) -> Option<usize> {
        self.chain.get(1).copied()
    }

    pub fn chain(&self) -> &[usize] {
        &self.chain
    }

    pub fn is_none(&self) -> bool {
        self.chain.is_empty()
    }

    /// Whether the node at `index_path` lies on the active chain
    pub fn contains(&self, index_path: &[usize]) -> bool {
        !index_path.is_empty() && self.chain.starts_with(index_path)
    }
}

/// Resolve the full active chain of `path` within `tree`
pub fn resolve_active_branch(tree: &MenuTree, path: &str) -> ActiveBranch {
    let Some(top) = active_top_index(tree.top_level(), path) else {
        return ActiveBranch::none();
    };

    let mut chain = vec![top];
    let mut node = &tree.top_level()[top];
    while let Some(child) = active_child_index(node, path) {
        chain.push(child);
        node = &node.children()[child];
    }
    ActiveBranch::from_chain(chain)
}

/// Top-level index containing `path`
pub fn active_top_index(nodes: &[MenuNode], path: &str) -> Option<usize> {
    nodes.iter().position(|node| {
        if node.has_children() && any_descendant_matches(node.children(), path) {
            return true;
        }
        match node.route().and_then(|route| match_route(route, path)) {
            Some(RouteMatch::Exact) => true,
            Some(RouteMatch::Prefix) => !node.has_children(),
            None => false,
        }
    })
}

/// First direct child of `node` whose own route or any descendant matches
pub fn active_child_index(node: &MenuNode, path: &str) -> Option<usize> {
    node.children()
        .iter()
        .position(|child| self_matches(child, path) || any_descendant_matches(child.children(), path))
}

/// Whether any node in `nodes` or below matches `path`
pub fn any_descendant_matches(nodes: &[MenuNode], path: &str) -> bool {
    nodes
        .iter()
        .any(|node| self_matches(node, path) || any_descendant_matches(node.children(), path))
}

fn self_matches(node: &MenuNode, path: &str) -> bool {
    node.route()
        .is_some_and(|route| match_route(route, path).is_some())
}
