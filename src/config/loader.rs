//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::ConfigWarning;
use crate::error::{NavError, NavResult};

use super::types::{ColorMode, Config};

/// Project config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "portal-nav.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> NavResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| NavError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Project config first, then user config
pub fn locate(project_root: Option<&Path>) -> Option<PathBuf> {
    if let Some(root) = project_root {
        let project_config = root.join(PROJECT_CONFIG_FILE);
        if project_config.exists() {
            return Some(project_config);
        }
    }

    dirs::config_dir()
        .map(|dir| dir.join("portal-nav").join("config.toml"))
        .filter(|path| path.exists())
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    let config = locate(project_root)
        .and_then(|path| Config::load(&path).ok())
        .unwrap_or_default();
    with_env_overrides(config)
}

/// Apply environment variable overrides (PORTAL_NAV_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |name| std::env::var(name).ok())
}

/// Apply overrides from any variable source
pub fn apply_overrides<F>(mut config: Config, var: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |name: &str| var(name).filter(|v| !v.trim().is_empty());

    if let Some(url) = non_empty("PORTAL_NAV_API_BASE_URL") {
        config.api.base_url = url;
    }
    if let Some(token) = non_empty("PORTAL_NAV_TOKEN") {
        config.api.token = Some(token);
    }
    if let Some(product) = non_empty("PORTAL_NAV_PRODUCT") {
        config.api.product = Some(product);
    }
    if let Some(package) = non_empty("PORTAL_NAV_PACKAGE") {
        config.api.package = Some(package);
    }
    if let Some(secs) = non_empty("PORTAL_NAV_TIMEOUT_SECS").and_then(|v| v.trim().parse().ok()) {
        config.api.timeout_secs = secs;
    }

    if let Some(prefix) = non_empty("PORTAL_NAV_RESERVED_PREFIX") {
        config.routing.reserved_prefix = prefix;
    }
    if let Some(route) = non_empty("PORTAL_NAV_FALLBACK_ROUTE") {
        config.routing.fallback_route = route;
    }
    if let Some(route) = non_empty("PORTAL_NAV_NO_MENU_ROUTE") {
        config.routing.no_menu_route = route;
    }
    // Comma-separated; an explicitly empty value clears the list
    if let Some(prefixes) = var("PORTAL_NAV_SKIP_PREFIXES") {
        config.routing.skip_prefixes = prefixes
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
    }

    if let Some(color) = non_empty("PORTAL_NAV_COLOR") {
        config.output.color = match color.to_lowercase().as_str() {
            "always" => ColorMode::Always,
            "never" => ColorMode::Never,
            _ => ColorMode::Auto,
        };
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "api",
        "base_url",
        "packages_path",
        "menu_path",
        "timeout_secs",
        "product",
        "package",
        "routing",
        "reserved_prefix",
        "fallback_route",
        "no_menu_route",
        "skip_prefixes",
        "output",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
