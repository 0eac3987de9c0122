//! Default values for devlink configuration.
//!
//! These mirror the directory conventions of the workspaces the tool was
//! written for. Every one of them can be overridden in `.devlink.yaml`.

/// Name of the workspace configuration file. Its directory is the workspace root.
pub const DEFAULT_CONFIG_FILENAME: &str = ".devlink.yaml";

/// Vendor namespace that holds the dependency slots.
pub const DEFAULT_ORGANIZATION: &str = "ejsoft";

/// Prefix that marks a vendor directory as a module slot.
pub const DEFAULT_SLOT_PREFIX: &str = "ease-";

/// Exact name of the slot bound to the framework sources.
pub const DEFAULT_FRAMEWORK_SLOT: &str = "core";

/// Pseudo-module the package manager itself installs under the prefix.
pub const DEFAULT_PACKAGE_MANAGER_NAME: &str = "composer";

/// Host whose SSH locators are rewritten when HTTPS is preferred.
pub const DEFAULT_SSH_HOST: &str = "github.com";

/// Framework sources, relative to the workspace root.
pub const DEFAULT_FRAMEWORK_DIR: &str = "src";

/// Directory holding one checkout per module, relative to the workspace root.
pub const DEFAULT_MODULES_DIR: &str = "project/modules";

/// Name of the default site checkout.
pub const DEFAULT_SITE_NAME: &str = "site";

/// Path of the default site checkout, relative to the workspace root.
pub const DEFAULT_SITE_DIR: &str = "project/site";

/// Directory inside the site checkout that contains its `vendor/` tree.
pub const DEFAULT_SITE_PACKAGE_ROOT: &str = "protected";

/// Package-manager program run after the link state changes.
pub const DEFAULT_PACKAGE_PROGRAM: &str = "composer";

/// Arguments for the package-manager step. Prefers pre-built dists.
pub const DEFAULT_PACKAGE_ARGS: &[&str] = &["update", "--prefer-dist"];
