//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::services::RoutePolicy;
use crate::domain::value_objects::ConfigWarning;
use crate::error::NavResult;

use super::loader;

/// Menu service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_packages_path")]
    pub packages_path: String,

    #[serde(default = "default_menu_path")]
    pub menu_path: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Product used when `--product` is not given
    #[serde(default)]
    pub product: Option<String>,

    /// Package used when `--package` is not given
    #[serde(default)]
    pub package: Option<String>,

    /// Bearer token; only ever set from the environment or the CLI
    #[serde(skip)]
    pub token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            packages_path: default_packages_path(),
            menu_path: default_menu_path(),
            timeout_secs: default_timeout_secs(),
            product: None,
            package: None,
            token: None,
        }
    }
}

impl ApiConfig {
    pub fn packages_url(&self) -> String {
        join_url(&self.base_url, &self.packages_path)
    }

    pub fn menu_url(&self) -> String {
        join_url(&self.base_url, &self.menu_path)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_packages_path() -> String {
    "/api/packages".to_string()
}

fn default_menu_path() -> String {
    "/api/menu".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

/// Route validation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingConfig {
    #[serde(default = "default_reserved_prefix")]
    pub reserved_prefix: String,

    #[serde(default = "default_fallback_route")]
    pub fallback_route: String,

    #[serde(default = "default_no_menu_route")]
    pub no_menu_route: String,

    #[serde(default)]
    pub skip_prefixes: Vec<String>,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        let policy = RoutePolicy::default();
        Self {
            reserved_prefix: policy.reserved_prefix,
            fallback_route: policy.fallback_route,
            no_menu_route: policy.no_menu_route,
            skip_prefixes: policy.skip_prefixes,
        }
    }
}

impl RoutingConfig {
    pub fn to_policy(&self) -> RoutePolicy {
        RoutePolicy {
            reserved_prefix: self.reserved_prefix.clone(),
            fallback_route: self.fallback_route.clone(),
            no_menu_route: self.no_menu_route.clone(),
            skip_prefixes: self.skip_prefixes.clone(),
        }
    }
}

fn default_reserved_prefix() -> String {
    RoutePolicy::default().reserved_prefix
}

fn default_fallback_route() -> String {
    RoutePolicy::default().fallback_route
}

fn default_no_menu_route() -> String {
    RoutePolicy::default().no_menu_route
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub routing: RoutingConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> NavResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> NavResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// First existing config file: project, then user
    pub fn locate(project_root: Option<&Path>) -> Option<PathBuf> {
        loader::locate(project_root)
    }

    /// Apply environment variable overrides (PORTAL_NAV_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    pub fn route_policy(&self) -> RoutePolicy {
        self.routing.to_policy()
    }
}
