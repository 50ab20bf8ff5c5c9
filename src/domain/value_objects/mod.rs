//! Domain Value Objects
//!
//! Immutable value types that represent navigation concepts.

mod config_warning;
mod expansion;
mod fetch_ticket;
mod route_match;

pub use config_warning::ConfigWarning;
pub use expansion::Expansion;
pub use fetch_ticket::{FetchGenerations, FetchTicket};
pub use route_match::{match_route, route_matches, RouteMatch};
