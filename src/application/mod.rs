//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `MenuFetchUseCase` - Resolves the package and fetches the menu descriptor
//! - `NavigationSession` - Applies fetch results and follows the current location
//!
//! ## Shared state
//!
//! - `snapshot_channel` - Single-writer slot holding the latest raw descriptor

pub mod menu_fetch;
pub mod session;
pub mod snapshot;

pub use menu_fetch::{select_package, FetchedMenu, MenuFetchUseCase, MenuRequest};
pub use session::{ApplyOutcome, NavigationSession};
pub use snapshot::{snapshot_channel, DescriptorSnapshot, SnapshotPublisher, SnapshotReader};
