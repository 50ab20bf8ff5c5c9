//! portal-nav - permission-scoped navigation menu engine
//!
//! portal-nav fetches the hierarchical menu descriptor a portal backend hands
//! out per product and package, builds an immutable menu tree from it, and
//! keeps the expansion state of that tree in step with the current location.
//! It also decides whether the current location is reachable from the tree
//! or must be redirected.

pub mod application;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
pub mod ui;

// Re-exports for convenience
pub use application::{
    snapshot_channel, ApplyOutcome, FetchedMenu, MenuFetchUseCase, MenuRequest, NavigationSession,
    SnapshotPublisher, SnapshotReader,
};
pub use config::Config;
pub use domain::entities::{
    ExpansionState, IconDescriptor, IconShape, MenuDescriptor, MenuNode, MenuTree, PackageEntry,
    SvgIcon,
};
pub use domain::ports::{ApiError, MenuApi};
pub use domain::services::{
    build_menu_tree, parse_icon, resolve_active_branch, ActiveBranch, RedirectReason,
    RouteDecision, RoutePolicy, RouteSet, RouteValidator,
};
pub use domain::value_objects::{Expansion, FetchTicket};
pub use error::{NavError, NavResult};
