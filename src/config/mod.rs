//! Configuration module for portal-nav
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (PORTAL_NAV_*)
//! 3. Project config (./portal-nav.toml)
//! 4. User config (<config dir>/portal-nav/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{apply_overrides, PROJECT_CONFIG_FILE};
pub use types::{ApiConfig, ColorMode, Config, OutputConfig, RoutingConfig};
