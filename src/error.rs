//! Error types for portal-nav
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::ApiError;

/// Result type alias for portal-nav operations
pub type NavResult<T> = Result<T, NavError>;

/// Main error type for portal-nav operations
#[derive(Error, Debug)]
pub enum NavError {
    /// Package resolution succeeded but offered nothing usable
    #[error("no package available for product '{product}'")]
    NoPackageAvailable { product: String },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Menu descriptor file is not a descriptor array
    #[error("invalid menu descriptor in {file}: {message}")]
    InvalidDescriptor { file: PathBuf, message: String },

    /// No auth token was supplied for a remote fetch
    #[error("missing auth token - pass --token or set PORTAL_NAV_TOKEN")]
    MissingToken,

    /// No product name was supplied or configured
    #[error("missing product name - pass --product or set [api] product")]
    MissingProduct,

    /// Menu service transport error
    #[error("menu service error: {0}")]
    Api(#[from] ApiError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
