//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod menu_api;

pub use menu_api::{ApiError, ApiResult, MenuApi};
