//! Route reachability validation
//!
//! Flattens the tree into the set of navigable routes and decides whether
//! the current location may stay or must be redirected.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::domain::entities::{MenuNode, MenuTree};
use crate::domain::value_objects::route_matches;

/// Every non-null route of a tree
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct RouteSet {
    routes: BTreeSet<String>,
}

impl RouteSet {
    pub fn from_tree(tree: &MenuTree) -> Self {
        Self {
            routes: flatten_routes(tree.top_level()).into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn contains(&self, route: &str) -> bool {
        self.routes.contains(route)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(String::as_str)
    }

    /// Whether some route matches `path` exactly or as a `/`-separated prefix
    pub fn reaches(&self, path: &str) -> bool {
        self.routes.iter().any(|route| route_matches(route, path))
    }
}

/// Depth-first list of routes, in display order
pub fn flatten_routes(nodes: &[MenuNode]) -> Vec<String> {
    let mut routes = Vec::new();
    collect_routes(nodes, &mut routes);
    routes
}

fn collect_routes(nodes: &[MenuNode], out: &mut Vec<String>) {
    for node in nodes {
        if let Some(route) = node.route() {
            out.push(route.to_string());
        }
        collect_routes(node.children(), out);
    }
}

/// Where validation applies and where it sends unreachable locations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePolicy {
    /// Locations under this prefix must be reachable from the tree
    pub reserved_prefix: String,
    /// Redirect target for unreachable locations
    pub fallback_route: String,
    /// Redirect target when the tree has no routes at all
    pub no_menu_route: String,
    /// Locations under any of these prefixes are never checked
    pub skip_prefixes: Vec<String>,
}

impl Default for RoutePolicy {
    fn default() -> Self {
        Self {
            reserved_prefix: "/app".to_string(),
            fallback_route: "/app/dashboard".to_string(),
            no_menu_route: "/app/no-menu".to_string(),
            skip_prefixes: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RedirectReason {
    /// The location matches no route of the tree
    Unreachable,
    /// The tree has no routes
    NoMenu,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum RouteDecision {
    Allow,
    Redirect { to: String, reason: RedirectReason },
}

impl RouteDecision {
    pub fn is_redirect(&self) -> bool {
        matches!(self, RouteDecision::Redirect { .. })
    }

    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            RouteDecision::Redirect { to, .. } => Some(to),
            RouteDecision::Allow => None,
        }
    }

    /// Redirect to `path` itself; following it changes nothing
    pub fn redirects_to(&self, path: &str) -> bool {
        self.redirect_target() == Some(path)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RouteValidator {
    policy: RoutePolicy,
}

impl RouteValidator {
    pub fn new(policy: RoutePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &RoutePolicy {
        &self.policy
    }

    pub fn validate(&self, routes: &RouteSet, path: &str) -> RouteDecision {
        if !path.starts_with(&self.policy.reserved_prefix) {
            return RouteDecision::Allow;
        }
        if self
            .policy
            .skip_prefixes
            .iter()
            .any(|prefix| !prefix.is_empty() && path.starts_with(prefix.as_str()))
        {
            return RouteDecision::Allow;
        }

        let (to, reason) = if routes.is_empty() {
            (&self.policy.no_menu_route, RedirectReason::NoMenu)
        } else if routes.reaches(path) {
            return RouteDecision::Allow;
        } else {
            (&self.policy.fallback_route, RedirectReason::Unreachable)
        };

        RouteDecision::Redirect {
            to: to.clone(),
            reason,
        }
    }
}
