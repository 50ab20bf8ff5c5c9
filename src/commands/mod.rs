//! Command handlers
//!
//! Each handler receives the resolved configuration and output context,
//! runs one use case and prints its result as text or JSON.

pub mod fetch;
pub mod icon;
pub mod resolve;
pub mod routes;

use std::path::Path;

use anyhow::{Context, Result};

use crate::config::{Config, ConfigWarning};

pub use fetch::{cmd_fetch, FetchArgs};
pub use icon::cmd_icon;
pub use resolve::{cmd_resolve, parse_index_path};
pub use routes::cmd_routes;

/// Load configuration: explicit file, else discovered file, else defaults.
/// Environment overrides are applied last.
pub fn load_config(
    explicit: Option<&Path>,
    project_root: Option<&Path>,
) -> Result<(Config, Vec<ConfigWarning>)> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => Config::locate(project_root),
    };

    let (config, warnings) = match path {
        Some(path) => Config::load_with_warnings(&path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => (Config::default(), Vec::new()),
    };

    Ok((config.with_env_overrides(), warnings))
}
