//! File-backed menu service
//!
//! Serves the same payloads as the HTTP service from a directory:
//!
//! ```text
//! <root>/<product>/packages.json
//! <root>/<product>/<package>.json
//! ```
//!
//! The token is ignored.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::entities::{MenuDescriptor, PackageEntry};
use crate::domain::ports::{ApiError, ApiResult, MenuApi};
use crate::error::{NavError, NavResult};

pub const PACKAGES_FILE: &str = "packages.json";

#[derive(Debug, Clone)]
pub struct FileMenuApi {
    root: PathBuf,
}

impl FileMenuApi {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn product_dir(&self, product: &str) -> ApiResult<PathBuf> {
        check_segment("product", product)?;
        Ok(self.root.join(product))
    }

    fn read<T>(&self, path: &Path) -> ApiResult<T>
    where
        T: DeserializeOwned + Default,
    {
        debug!(path = %path.display(), "reading menu payload");
        let content = fs::read_to_string(path).map_err(|e| ApiError::Transport {
            url: path.display().to_string(),
            message: e.to_string(),
        })?;
        serde_json::from_str::<Option<T>>(&content)
            .map(Option::unwrap_or_default)
            .map_err(|e| ApiError::Decode {
                source_name: path.display().to_string(),
                message: e.to_string(),
            })
    }
}

impl MenuApi for FileMenuApi {
    fn fetch_packages(&self, _token: &str, product: &str) -> ApiResult<Vec<PackageEntry>> {
        let path = self.product_dir(product)?.join(PACKAGES_FILE);
        self.read(&path)
    }

    fn fetch_menu(
        &self,
        _token: &str,
        product: &str,
        package: &str,
    ) -> ApiResult<Vec<MenuDescriptor>> {
        check_segment("package", package)?;
        let path = self.product_dir(product)?.join(format!("{package}.json"));
        self.read(&path)
    }
}

/// Reject names that would leave the product directory
fn check_segment(kind: &str, name: &str) -> ApiResult<()> {
    let trimmed = name.trim();
    if trimmed.is_empty()
        || trimmed == "."
        || trimmed == ".."
        || name.contains('/')
        || name.contains('\\')
    {
        return Err(ApiError::InvalidRequest {
            message: format!("invalid {kind} name '{name}'"),
        });
    }
    Ok(())
}

/// Read a descriptor array from a JSON file
pub fn load_descriptors(path: &Path) -> NavResult<Vec<MenuDescriptor>> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str::<Option<Vec<MenuDescriptor>>>(&content)
        .map(Option::unwrap_or_default)
        .map_err(|e| NavError::InvalidDescriptor {
            file: path.to_path_buf(),
            message: e.to_string(),
        })
}

/// Write a descriptor array as pretty JSON
pub fn save_descriptors(path: &Path, descriptors: &[MenuDescriptor]) -> NavResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(descriptors)?;
    fs::write(path, json + "\n")?;
    Ok(())
}
