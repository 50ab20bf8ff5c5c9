//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `api/` - Menu service implementations (HTTP, local files)

pub mod api;

// Re-export for convenience
pub use api::{load_descriptors, save_descriptors, FileMenuApi, HttpMenuApi};
