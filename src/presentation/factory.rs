//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;

use crate::application::{
    snapshot_channel, MenuFetchUseCase, NavigationSession, SnapshotReader,
};
use crate::config::Config;
use crate::domain::ports::MenuApi;
use crate::domain::services::RouteValidator;
use crate::error::NavResult;
use crate::infrastructure::{FileMenuApi, HttpMenuApi};

/// Type alias for the fetch use case over any boxed adapter
pub type ConcreteMenuFetchUseCase = MenuFetchUseCase<Box<dyn MenuApi>>;

/// Create the menu service adapter: local files when `from_dir` is given,
/// HTTP otherwise
pub fn create_menu_api(config: &Config, from_dir: Option<&Path>) -> NavResult<Box<dyn MenuApi>> {
    match from_dir {
        Some(dir) => Ok(Box::new(FileMenuApi::new(dir))),
        None => Ok(Box::new(HttpMenuApi::new(&config.api)?)),
    }
}

/// Create a fetch use case with all dependencies wired up
pub fn create_menu_fetch_use_case(
    config: &Config,
    from_dir: Option<&Path>,
) -> NavResult<ConcreteMenuFetchUseCase> {
    Ok(MenuFetchUseCase::new(create_menu_api(config, from_dir)?))
}

pub fn create_route_validator(config: &Config) -> RouteValidator {
    RouteValidator::new(config.route_policy())
}

/// Create a session at `location` plus a reader on its descriptor slot
pub fn create_session(config: &Config, location: &str) -> (NavigationSession, SnapshotReader) {
    let (publisher, reader) = snapshot_channel();
    let session = NavigationSession::new(create_route_validator(config), publisher, location);
    (session, reader)
}
