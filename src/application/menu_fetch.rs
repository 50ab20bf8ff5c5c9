//! Menu Fetch Use Case
//!
//! Orchestrates the two sequential backend calls:
//! 1. Resolve the package (only when the caller did not supply one)
//! 2. Fetch the menu descriptor for the product and package
//!
//! Transport failures never surface as errors: they are logged and the
//! result is an empty menu. The only hard failure is a package resolution
//! that offers no usable package.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::domain::entities::{MenuDescriptor, PackageEntry};
use crate::domain::ports::MenuApi;
use crate::error::{NavError, NavResult};

/// Inputs of one fetch
#[derive(Debug, Clone, Copy)]
pub struct MenuRequest<'a> {
    /// Opaque bearer token
    pub token: &'a str,
    pub product: &'a str,
    /// Package to fetch; resolved from the backend when absent or blank
    pub package: Option<&'a str>,
}

impl<'a> MenuRequest<'a> {
    pub fn new(token: &'a str, product: &'a str) -> Self {
        Self {
            token,
            product,
            package: None,
        }
    }

    pub fn with_package(mut self, package: Option<&'a str>) -> Self {
        self.package = package;
        self
    }
}

/// Raw descriptor of one product and package
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchedMenu {
    pub product: String,
    /// Package actually used; `None` when resolution failed in transport
    pub package: Option<String>,
    pub descriptors: Vec<MenuDescriptor>,
}

impl FetchedMenu {
    pub fn new(
        product: impl Into<String>,
        package: Option<String>,
        descriptors: Vec<MenuDescriptor>,
    ) -> Self {
        Self {
            product: product.into(),
            package,
            descriptors,
        }
    }

    /// A menu with no entries, as produced after a transport failure
    pub fn empty(product: impl Into<String>, package: Option<String>) -> Self {
        Self::new(product, package, Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

/// Menu fetch use case
pub struct MenuFetchUseCase<A>
where
    A: MenuApi,
{
    api: A,
}

impl<A> MenuFetchUseCase<A>
where
    A: MenuApi,
{
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Fetch the menu descriptor for `request`
    pub fn fetch(&self, request: MenuRequest<'_>) -> NavResult<FetchedMenu> {
        let product = request.product;

        let package = match request.package.filter(|p| !p.trim().is_empty()) {
            Some(package) => package.to_string(),
            None => match self.api.fetch_packages(request.token, product) {
                Ok(entries) => {
                    select_package(&entries).ok_or_else(|| NavError::NoPackageAvailable {
                        product: product.to_string(),
                    })?
                }
                Err(e) => {
                    warn!(product, error = %e, "package resolution failed");
                    return Ok(FetchedMenu::empty(product, None));
                }
            },
        };

        debug!(product, package = %package, "fetching menu");
        match self.api.fetch_menu(request.token, product, &package) {
            Ok(descriptors) => {
                info!(
                    product,
                    package = %package,
                    entries = descriptors.len(),
                    "fetched menu"
                );
                Ok(FetchedMenu::new(product, Some(package), descriptors))
            }
            Err(e) => {
                warn!(product, package = %package, error = %e, "menu fetch failed");
                Ok(FetchedMenu::empty(product, Some(package)))
            }
        }
    }
}

/// First package with a non-blank name
pub fn select_package(entries: &[PackageEntry]) -> Option<String> {
    entries
        .iter()
        .find(|entry| !entry.is_blank())
        .map(|entry| entry.package_name.clone())
}
