//! MenuApi port
//!
//! The two backend calls the menu needs: package resolution and the menu
//! descriptor itself. Both are keyed by product and authorized with an
//! opaque bearer token.

use std::sync::Arc;

use crate::domain::entities::{MenuDescriptor, PackageEntry};

pub type ApiResult<T> = Result<T, ApiError>;

pub trait MenuApi: Send + Sync {
    /// Packages the token may use for `product`
    fn fetch_packages(&self, token: &str, product: &str) -> ApiResult<Vec<PackageEntry>>;

    /// Menu descriptor for a product and package
    fn fetch_menu(&self, token: &str, product: &str, package: &str)
        -> ApiResult<Vec<MenuDescriptor>>;
}

impl<T: MenuApi + ?Sized> MenuApi for Box<T> {
    fn fetch_packages(&self, token: &str, product: &str) -> ApiResult<Vec<PackageEntry>> {
        (**self).fetch_packages(token, product)
    }

    fn fetch_menu(
        &self,
        token: &str,
        product: &str,
        package: &str,
    ) -> ApiResult<Vec<MenuDescriptor>> {
        (**self).fetch_menu(token, product, package)
    }
}

impl<T: MenuApi + ?Sized> MenuApi for Arc<T> {
    fn fetch_packages(&self, token: &str, product: &str) -> ApiResult<Vec<PackageEntry>> {
        (**self).fetch_packages(token, product)
    }

    fn fetch_menu(
        &self,
        token: &str,
        product: &str,
        package: &str,
    ) -> ApiResult<Vec<MenuDescriptor>> {
        (**self).fetch_menu(token, product, package)
    }
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("request to {url} timed out after {secs}s")]
    Timeout { url: String, secs: u64 },

    #[error("{url} rejected the auth token (HTTP {status})")]
    Unauthorized { url: String, status: u16 },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("failed to decode response from {source_name}: {message}")]
    Decode {
        source_name: String,
        message: String,
    },

    #[error("invalid request: {message}")]
    InvalidRequest { message: String },
}
