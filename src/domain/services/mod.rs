//! Domain Services
//!
//! Pure navigation logic operating on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod icon_parser;
mod menu_view;
mod route_matcher;
mod route_validator;
mod tree_builder;

pub use icon_parser::{camel_case, parse_icon};
pub use menu_view::{visible_entries, VisibleEntry};
pub use route_matcher::{
    active_child_index, active_top_index, any_descendant_matches, resolve_active_branch,
    ActiveBranch,
};
pub use route_validator::{
    flatten_routes, RedirectReason, RouteDecision, RoutePolicy, RouteSet, RouteValidator,
};
pub use tree_builder::build_menu_tree;
