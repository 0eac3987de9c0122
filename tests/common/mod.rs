//! Shared test utilities for CLI end-to-end tests.
//!
//! Fixtures build a small workspace on disk: a `.devlink.yaml` with the
//! package step disabled, a framework checkout, module checkouts and a site,
//! each with placeholder slots in its vendor directory. Nothing here needs
//! git or the network.
//!
//! ## Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new()
//!         .with_config(configs::NO_PACKAGE_STEP)
//!         .with_module("blog", &["core", "ease-auth"]);
//!     fixture.command().arg("link-module").arg("blog").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::configs;
    pub use super::TestFixture;
}

/// Workspace configurations used across tests.
#[allow(dead_code)]
pub mod configs {
    /// Default layout, no registered modules, no package step.
    pub const NO_PACKAGE_STEP: &str = "package_step: null\n";

    /// Two registered modules without locators, no package step.
    pub const TWO_MODULES: &str = r#"
package_step: null
modules:
  blog: ~
  auth: ~
"#;

    /// Invalid YAML for error testing.
    pub const INVALID_YAML: &str = "modules: [unclosed";
}

/// A temporary workspace directory.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    /// Creates an empty workspace with a framework checkout at `src/`.
    pub fn new() -> Self {
        let temp_dir = assert_fs::TempDir::new().expect("Failed to create temp directory");
        temp_dir
            .child("src/README.md")
            .write_str("framework\n")
            .expect("Failed to create framework checkout");
        Self { temp_dir }
    }

    /// Writes `.devlink.yaml` with the given content.
    pub fn with_config(self, content: &str) -> Self {
        self.temp_dir
            .child(".devlink.yaml")
            .write_str(content)
            .expect("Failed to write config file");
        self
    }

    /// Creates a module checkout whose vendor area holds placeholder slots.
    pub fn with_module(self, name: &str, slots: &[&str]) -> Self {
        let checkout = format!("project/modules/{}", name);
        self.with_checkout(&checkout, "vendor/ejsoft", slots)
    }

    /// Creates the default site checkout with placeholder slots.
    pub fn with_site(self, slots: &[&str]) -> Self {
        self.with_checkout("project/site", "protected/vendor/ejsoft", slots)
    }

    fn with_checkout(self, checkout: &str, area: &str, slots: &[&str]) -> Self {
        self.temp_dir
            .child(checkout)
            .child("README.md")
            .write_str("checkout\n")
            .expect("Failed to create checkout");
        for slot in slots {
            self.temp_dir
                .child(checkout)
                .child(area)
                .child(slot)
                .child("installed.txt")
                .write_str("installed by the package manager\n")
                .expect("Failed to create placeholder slot");
        }
        self
    }

    /// Path to the temporary workspace root.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Canonical workspace root, as symlink targets are written.
    pub fn root(&self) -> PathBuf {
        self.path()
            .canonicalize()
            .expect("Failed to canonicalize workspace root")
    }

    /// Slot path inside a module checkout.
    pub fn module_slot(&self, module: &str, slot: &str) -> PathBuf {
        self.path()
            .join("project/modules")
            .join(module)
            .join("vendor/ejsoft")
            .join(slot)
    }

    /// Slot path inside the site checkout.
    pub fn site_slot(&self, slot: &str) -> PathBuf {
        self.path()
            .join("project/site/protected/vendor/ejsoft")
            .join(slot)
    }

    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Creates a command running in the workspace root, isolated from the
    /// caller's environment.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("devlink");
        cmd.current_dir(self.path())
            .env_remove("DEVLINK_CONFIG")
            .env_remove("DEVLINK_WORKSPACE")
            .env_remove("RUST_LOG")
            .arg("--color=never");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// True if `path` is a symlink pointing at `target`.
#[allow(dead_code)]
pub fn links_to(path: &Path, target: &Path) -> bool {
    std::fs::symlink_metadata(path)
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false)
        && std::fs::read_link(path).ok().as_deref() == Some(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_creates_framework() {
        let fixture = TestFixture::new();
        assert!(fixture.path().join("src").is_dir());
    }

    #[test]
    fn test_fixture_with_module() {
        let fixture = TestFixture::new().with_module("blog", &["core", "ease-auth"]);
        assert!(fixture.module_slot("blog", "core").is_dir());
        assert!(fixture.module_slot("blog", "ease-auth").is_dir());
    }

    #[test]
    fn test_configs_are_valid_yaml() {
        for config in [configs::NO_PACKAGE_STEP, configs::TWO_MODULES] {
            serde_yaml::from_str::<serde_yaml::Value>(config).expect("Config should be valid YAML");
        }
        assert!(serde_yaml::from_str::<serde_yaml::Value>(configs::INVALID_YAML).is_err());
    }
}
