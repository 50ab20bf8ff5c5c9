//! Domain Layer
//!
//! Pure navigation logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Menu descriptor, menu tree, icon descriptor, expansion state
//! - `value_objects/` - Immutable value types (Expansion, FetchTicket, route matching)
//! - `services/` - Icon parsing, tree building, route matching and validation
//! - `ports/` - Interface definitions for the menu service
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the network or file system directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
