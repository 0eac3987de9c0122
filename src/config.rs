//! # Workspace Configuration
//!
//! This module defines the `.devlink.yaml` file that describes a workspace:
//! where the framework, module and app checkouts live, how dependency slots
//! are named, which modules exist and where to clone them from, and which
//! package-manager command to run after relinking.
//!
//! ## Example
//!
//! ```yaml
//! organization: ejsoft
//! slot_prefix: ease-
//! framework_slot: core
//! exclude: [legacy]
//! use_https: false
//! layout:
//!   framework: src
//!   modules: project/modules
//! apps:
//!   - name: site
//!     path: project/site
//!     package_root: protected
//!     repo: git@github.com:ejsoft/project.git
//! modules:
//!   auth: git@github.com:ejsoft/ease-auth.git
//!   blog: git@github.com:ejsoft/ease-blog.git
//! package_step:
//!   program: composer
//!   args: [update, --prefer-dist]
//! ```
//!
//! Every key is optional. An empty file describes the default layout with no
//! registered modules. The `modules` mapping keeps its declaration order,
//! which is the order `link-all` processes modules in.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::defaults;
use crate::error::{Error, Result};
use crate::locator::Locator;
use crate::slot::{ModuleName, SlotNaming};

/// Parsed contents of `.devlink.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorkspaceConfig {
    /// Vendor namespace holding the dependency slots (`vendor/<organization>`).
    pub organization: String,
    /// Prefix marking a vendor directory as a module slot.
    pub slot_prefix: String,
    /// Exact directory name of the slot bound to the framework sources.
    pub framework_slot: String,
    /// Pseudo-module installed by the package manager itself; never linked.
    pub package_manager_name: String,
    /// Module names or glob patterns that are never fetched or linked.
    pub exclude: Vec<String>,
    /// Rewrite SSH locators to HTTPS before cloning.
    pub use_https: bool,
    /// Host whose `git@<host>:` locators get rewritten.
    pub ssh_host: String,
    pub layout: Layout,
    /// Site/app checkouts, in declaration order. The first is "the site".
    pub apps: Vec<AppConfig>,
    /// Module registry: module name to repository locator.
    pub modules: ModuleRegistry,
    /// External command run in a checkout after cleanup; `null` disables it.
    pub package_step: Option<PackageStep>,
}

/// Fixed directory layout of the workspace, relative to its root.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Layout {
    pub framework: PathBuf,
    pub modules: PathBuf,
}

/// A site or application checkout.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    pub name: String,
    /// Checkout location relative to the workspace root.
    pub path: PathBuf,
    /// Directory inside the checkout that contains `vendor/`.
    #[serde(default)]
    pub package_root: PathBuf,
    /// Where to clone the app from when it is missing.
    #[serde(default)]
    pub repo: Option<Locator>,
}

/// Program and arguments of the package-manager step.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackageStep {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

/// Ordered mapping from module name to an optional repository locator.
///
/// A module registered without a locator is expected to be checked out by
/// hand; it links fine once present but cannot be fetched.
#[derive(Debug, Clone, Default)]
pub struct ModuleRegistry {
    entries: Vec<(ModuleName, Option<Locator>)>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a module. Re-registering a name replaces its locator but
    /// keeps the original position.
    pub fn insert(&mut self, name: ModuleName, locator: Option<Locator>) {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = locator,
            None => self.entries.push((name, locator)),
        }
    }

    pub fn contains(&self, name: &ModuleName) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// The locator for `name`, if the module is registered with one.
    pub fn locator(&self, name: &ModuleName) -> Option<&Locator> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, l)| l.as_ref())
    }

    /// Module names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &ModuleName> {
        self.entries.iter().map(|(n, _)| n)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'de> Deserialize<'de> for ModuleRegistry {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RegistryVisitor;

        impl<'de> Visitor<'de> for RegistryVisitor {
            type Value = ModuleRegistry;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a mapping of module name to repository locator")
            }

            fn visit_unit<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
                Ok(ModuleRegistry::new())
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut registry = ModuleRegistry::new();
                while let Some((name, locator)) = map.next_entry::<String, Option<Locator>>()? {
                    let name = ModuleName::new(name.clone())
                        .map_err(|_| de::Error::custom(format!("invalid module name '{}'", name)))?;
                    if registry.contains(&name) {
                        return Err(de::Error::custom(format!("duplicate module '{}'", name)));
                    }
                    registry.insert(name, locator.filter(|l| !l.is_empty()));
                }
                Ok(registry)
            }
        }

        deserializer.deserialize_map(RegistryVisitor)
    }
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            organization: defaults::DEFAULT_ORGANIZATION.to_string(),
            slot_prefix: defaults::DEFAULT_SLOT_PREFIX.to_string(),
            framework_slot: defaults::DEFAULT_FRAMEWORK_SLOT.to_string(),
            package_manager_name: defaults::DEFAULT_PACKAGE_MANAGER_NAME.to_string(),
            exclude: Vec::new(),
            use_https: false,
            ssh_host: defaults::DEFAULT_SSH_HOST.to_string(),
            layout: Layout::default(),
            apps: vec![AppConfig {
                name: defaults::DEFAULT_SITE_NAME.to_string(),
                path: PathBuf::from(defaults::DEFAULT_SITE_DIR),
                package_root: PathBuf::from(defaults::DEFAULT_SITE_PACKAGE_ROOT),
                repo: None,
            }],
            modules: ModuleRegistry::new(),
            package_step: Some(PackageStep::default()),
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            framework: PathBuf::from(defaults::DEFAULT_FRAMEWORK_DIR),
            modules: PathBuf::from(defaults::DEFAULT_MODULES_DIR),
        }
    }
}

impl Default for PackageStep {
    fn default() -> Self {
        Self {
            program: defaults::DEFAULT_PACKAGE_PROGRAM.to_string(),
            args: defaults::DEFAULT_PACKAGE_ARGS
                .iter()
                .map(|a| a.to_string())
                .collect(),
        }
    }
}

impl WorkspaceConfig {
    /// Slot naming rules derived from this config.
    pub fn slot_naming(&self) -> Result<SlotNaming> {
        SlotNaming::new(
            self.slot_prefix.clone(),
            self.framework_slot.clone(),
            self.package_manager_name.clone(),
            &self.exclude,
        )
    }

    /// Looks up an app by name.
    pub fn app(&self, name: &str) -> Option<&AppConfig> {
        self.apps.iter().find(|a| a.name == name)
    }

    fn validate(&self) -> Result<()> {
        if self.slot_prefix.is_empty() {
            return Err(Error::ConfigParse {
                message: "slot_prefix must not be empty".to_string(),
                hint: Some("every vendor directory would look like a module slot".to_string()),
            });
        }
        if self.organization.is_empty() || self.organization.contains(['/', '\\']) {
            return Err(Error::ConfigParse {
                message: format!("invalid organization '{}'", self.organization),
                hint: Some("use the single vendor namespace directory name".to_string()),
            });
        }

        let mut seen = HashSet::new();
        for app in &self.apps {
            if app.name.is_empty() {
                return Err(Error::ConfigParse {
                    message: "app name must not be empty".to_string(),
                    hint: None,
                });
            }
            if !seen.insert(app.name.as_str()) {
                return Err(Error::ConfigParse {
                    message: format!("duplicate app '{}'", app.name),
                    hint: Some("app names must be unique".to_string()),
                });
            }
        }

        if let Some(step) = &self.package_step {
            if step.program.trim().is_empty() {
                return Err(Error::ConfigParse {
                    message: "package_step.program must not be empty".to_string(),
                    hint: Some("set package_step: null to disable the step".to_string()),
                });
            }
        }

        // compile the exclusion patterns up front
        self.slot_naming()?;
        Ok(())
    }
}

/// Parse a workspace configuration from YAML.
pub fn parse(yaml: &str) -> Result<WorkspaceConfig> {
    let value: serde_yaml::Value = serde_yaml::from_str(yaml).map_err(|e| Error::ConfigParse {
        message: e.to_string(),
        hint: Some("check the YAML syntax of .devlink.yaml".to_string()),
    })?;
    if value.is_null() {
        return Ok(WorkspaceConfig::default());
    }
    let config: WorkspaceConfig = serde_yaml::from_value(value).map_err(|e| Error::ConfigParse {
        message: e.to_string(),
        hint: None,
    })?;
    config.validate()?;
    Ok(config)
}

/// Parse a workspace configuration from a file.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<WorkspaceConfig> {
    let content = std::fs::read_to_string(path).map_err(Error::Io)?;
    parse(&content)
}

/// Finds the nearest `.devlink.yaml` at or above `start`.
///
/// Returns the path of the config file; its parent is the workspace root.
pub fn discover(start: &Path) -> Result<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(defaults::DEFAULT_CONFIG_FILENAME))
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| Error::ConfigNotFound {
            start: start.to_path_buf(),
        })
}
