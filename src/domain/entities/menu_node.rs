//! Menu tree entities
//!
//! A `MenuTree` is built once per (product, package) pair and replaced
//! wholesale on rebuild. Nodes expose read accessors only.

use serde::Serialize;

use super::icon::IconDescriptor;

/// Query parameter carrying the external url of an embedded menu leaf
const EMBEDDED_URL_PARAM: &str = "url";

/// One entry in the navigation tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuNode {
    title: String,
    icon: IconDescriptor,
    /// `None` means container only, not directly navigable
    route: Option<String>,
    children: Vec<MenuNode>,
    embedded_menu: bool,
    embedded_url: Option<String>,
    permissions: Vec<String>,
}

impl MenuNode {
    /// Create a container node with no route
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            icon: IconDescriptor::Default,
            route: None,
            children: Vec::new(),
            embedded_menu: false,
            embedded_url: None,
            permissions: Vec::new(),
        }
    }

    /// Create a navigable leaf
    pub fn leaf(title: impl Into<String>, route: impl Into<String>) -> Self {
        Self::new(title).with_route(route)
    }

    /// Set the route. Blank routes leave the node as a container.
    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        let route = route.into();
        self.route = if route.trim().is_empty() {
            None
        } else {
            Some(route)
        };
        self
    }

    pub fn with_icon(mut self, icon: IconDescriptor) -> Self {
        self.icon = icon;
        self
    }

    pub fn with_children(mut self, children: Vec<MenuNode>) -> Self {
        self.children = children;
        self
    }

    pub fn with_child(mut self, child: MenuNode) -> Self {
        self.children.push(child);
        self
    }

    /// Mark as an embedded menu leaf. A blank url leaves the flag without effect.
    pub fn with_embedded(mut self, embedded_menu: bool, url: Option<String>) -> Self {
        self.embedded_menu = embedded_menu;
        self.embedded_url = url.filter(|u| !u.trim().is_empty());
        self
    }

    pub fn with_permissions(mut self, permissions: Vec<String>) -> Self {
        self.permissions = permissions;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn icon(&self) -> &IconDescriptor {
        &self.icon
    }

    pub fn route(&self) -> Option<&str> {
        self.route.as_deref()
    }

    pub fn children(&self) -> &[MenuNode] {
        &self.children
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn is_container(&self) -> bool {
        self.route.is_none()
    }

    pub fn embedded_menu(&self) -> bool {
        self.embedded_menu
    }

    pub fn embedded_url(&self) -> Option<&str> {
        self.embedded_url.as_deref()
    }

    pub fn permissions(&self) -> &[String] {
        &self.permissions
    }

    /// Where a click on this node navigates to.
    ///
    /// Embedded leaves compose the route with the percent-encoded external
    /// url as a query parameter. Containers have no target.
    pub fn navigation_target(&self) -> Option<String> {
        let route = self.route.as_deref()?;
        match (self.embedded_menu, self.embedded_url.as_deref()) {
            (true, Some(url)) => {
                let encoded: String = url::form_urlencoded::byte_serialize(url.as_bytes()).collect();
                let separator = if route.contains('?') { '&' } else { '?' };
                Some(format!(
                    "{}{}{}={}",
                    route, separator, EMBEDDED_URL_PARAM, encoded
                ))
            }
            _ => Some(route.to_string()),
        }
    }

    /// Number of nodes in this subtree, including self
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(MenuNode::node_count).sum::<usize>()
    }
}

/// The ordered list of top-level menu entries
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct MenuTree {
    nodes: Vec<MenuNode>,
}

impl MenuTree {
    pub fn new(nodes: Vec<MenuNode>) -> Self {
        Self { nodes }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn top_level(&self) -> &[MenuNode] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node by its index path from the top level
    pub fn node_at(&self, index_path: &[usize]) -> Option<&MenuNode> {
        let (first, rest) = index_path.split_first()?;
        let mut node = self.nodes.get(*first)?;
        for idx in rest {
            node = node.children.get(*idx)?;
        }
        Some(node)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.iter().map(MenuNode::node_count).sum()
    }
}
