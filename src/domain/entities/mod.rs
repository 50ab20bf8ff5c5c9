//! Domain Entities
//!
//! - `MenuDescriptor` / `PackageEntry` - Raw backend payloads
//! - `MenuNode` / `MenuTree` - The built, immutable navigation tree
//! - `IconDescriptor` - Structured icon parsed from markup
//! - `ExpansionState` - Which branches of the tree are open

mod descriptor;
mod expansion_state;
mod icon;
mod menu_node;

pub use descriptor::{MenuDescriptor, PackageEntry};
pub use expansion_state::{ExpansionState, NestedSlot};
pub use icon::{IconDescriptor, IconShape, SvgIcon};
pub use menu_node::{MenuNode, MenuTree};
