//! Menu service adapters

mod file;
mod http;

pub use file::{load_descriptors, save_descriptors, FileMenuApi, PACKAGES_FILE};
pub use http::HttpMenuApi;
