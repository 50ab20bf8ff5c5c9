//! Route matching rule
//!
//! A route matches a path exactly, or as a prefix followed by `/`.
//! Comparison is literal: query strings and trailing slashes get no
//! special treatment.

/// How a route matched a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMatch {
    Exact,
    Prefix,
}

pub fn match_route(route: &str, path: &str) -> Option<RouteMatch> {
    if route.is_empty() {
        return None;
    }
    if path == route {
        return Some(RouteMatch::Exact);
    }
    match path.strip_prefix(route) {
        Some(rest) if rest.starts_with('/') => Some(RouteMatch::Prefix),
        _ => None,
    }
}

pub fn route_matches(route: &str, path: &str) -> bool {
    match_route(route, path).is_some()
}
