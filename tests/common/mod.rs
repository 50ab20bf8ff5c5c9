//! Shared test helpers for portal-nav integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::Mutex;

use portal_nav::domain::ports::ApiResult;
use portal_nav::{
    snapshot_channel, ApiError, MenuApi, MenuDescriptor, NavigationSession, PackageEntry,
    RoutePolicy, RouteValidator, SnapshotReader,
};
use tempfile::TempDir;

/// In-memory menu service recording every call
pub struct MockMenuApi {
    pub packages: ApiResult<Vec<PackageEntry>>,
    pub menu: ApiResult<Vec<MenuDescriptor>>,
    calls: Mutex<Vec<String>>,
}

impl MockMenuApi {
    pub fn new(packages: Vec<PackageEntry>, menu: Vec<MenuDescriptor>) -> Self {
        Self {
            packages: Ok(packages),
            menu: Ok(menu),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn offline() -> Self {
        let error = ApiError::Transport {
            url: "http://portal.test/api".to_string(),
            message: "connection refused".to_string(),
        };
        Self {
            packages: Err(error.clone()),
            menu: Err(error),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// `packages:<product>` and `menu:<product>/<package>` in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl MenuApi for MockMenuApi {
    fn fetch_packages(&self, _token: &str, product: &str) -> ApiResult<Vec<PackageEntry>> {
        self.calls.lock().unwrap().push(format!("packages:{product}"));
        self.packages.clone()
    }

    fn fetch_menu(
        &self,
        _token: &str,
        product: &str,
        package: &str,
    ) -> ApiResult<Vec<MenuDescriptor>> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("menu:{product}/{package}"));
        self.menu.clone()
    }
}

/// The portal menu used across scenarios
///
/// ```text
/// Dashboard      /app/dashboard
/// Reports
///   Daily        /app/reports/daily
///   Weekly       /app/reports/weekly
/// Admin          /app/admin
///   Users        /app/admin/users
/// ```
pub fn portal_descriptors() -> Vec<MenuDescriptor> {
    vec![
        MenuDescriptor::new("Dashboard", "/app/dashboard"),
        MenuDescriptor::new("Reports", "").with_sub_menus(vec![
            MenuDescriptor::new("Daily", "/app/reports/daily"),
            MenuDescriptor::new("Weekly", "/app/reports/weekly"),
        ]),
        MenuDescriptor::new("Admin", "/app/admin")
            .with_sub_menus(vec![MenuDescriptor::new("Users", "/app/admin/users")]),
    ]
}

pub fn portal_json() -> String {
    serde_json::to_string_pretty(&portal_descriptors()).unwrap()
}

pub fn default_session(location: &str) -> (NavigationSession, SnapshotReader) {
    let (publisher, reader) = snapshot_channel();
    let session = NavigationSession::new(
        RouteValidator::new(RoutePolicy::default()),
        publisher,
        location,
    );
    (session, reader)
}

/// Scratch directory for CLI runs, with no project config
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn write_menu(&self) -> PathBuf {
        self.write("menu.json", &portal_json())
    }

    /// Run the binary inside the workspace with a plain terminal
    pub fn run(&self, args: &[&str]) -> Output {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_portal-nav"));
        cmd.current_dir(self.dir.path())
            .args(args)
            .env("NO_COLOR", "1")
            .env("TERM", "dumb")
            .env("XDG_CONFIG_HOME", self.dir.path().join(".config"))
            .env_remove("RUST_LOG");
        for (key, _) in std::env::vars() {
            if key.starts_with("PORTAL_NAV_") {
                cmd.env_remove(key);
            }
        }
        cmd
            .output()
            .expect("Failed to execute portal-nav")
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

pub fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap_or_else(|e| {
        panic!(
            "stdout is not JSON ({e}):\n{}\nstderr:\n{}",
            stdout(output),
            stderr(output)
        )
    })
}
