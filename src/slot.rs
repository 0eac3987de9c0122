//! # Module Names and Slot Naming
//!
//! A dependency slot is a directory inside a checkout's vendor area whose
//! name encodes the module it stands in for, e.g. `ease-auth` for module
//! `auth`. The rest of the crate only ever handles [`ModuleName`] values; the
//! prefix convention lives in [`SlotNaming`] and nowhere else.

use std::fmt;

use glob::Pattern;

use crate::error::{Error, Result};

/// The logical name of a module, e.g. `auth`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleName(String);

impl ModuleName {
    /// Validates and wraps a module name.
    ///
    /// Names must be non-empty, must not be `.` or `..`, and must not contain
    /// path separators, since they are joined onto the modules directory.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if !Self::is_valid(&name) {
            return Err(Error::ConfigParse {
                message: format!("invalid module name '{}'", name),
                hint: Some(
                    "module names must be non-empty and must not contain '/' or '\\'".to_string(),
                ),
            });
        }
        Ok(Self(name))
    }

    fn is_valid(name: &str) -> bool {
        !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parsing and formatting boundary for slot directory names.
#[derive(Debug, Clone)]
pub struct SlotNaming {
    prefix: String,
    framework_slot: String,
    package_manager_name: String,
    exclude: Vec<Pattern>,
}

impl SlotNaming {
    /// Builds the naming rules. `exclude` entries are glob patterns matched
    /// against module names; a plain name matches only itself.
    pub fn new(
        prefix: impl Into<String>,
        framework_slot: impl Into<String>,
        package_manager_name: impl Into<String>,
        exclude: &[String],
    ) -> Result<Self> {
        let exclude = exclude
            .iter()
            .map(|p| Pattern::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self {
            prefix: prefix.into(),
            framework_slot: framework_slot.into(),
            package_manager_name: package_manager_name.into(),
            exclude,
        })
    }

    /// Name of the reserved framework slot.
    pub fn framework_slot(&self) -> &str {
        &self.framework_slot
    }

    /// Directory name of the slot for `module`.
    pub fn slot_dir_name(&self, module: &ModuleName) -> String {
        format!("{}{}", self.prefix, module)
    }

    /// Extracts the module name from a slot directory name.
    ///
    /// Returns `None` for names without the prefix, with nothing after it,
    /// or for the reserved framework slot.
    pub fn parse(&self, dir_name: &str) -> Option<ModuleName> {
        if dir_name == self.framework_slot {
            return None;
        }
        let rest = dir_name.strip_prefix(&self.prefix)?;
        ModuleName::new(rest).ok()
    }

    /// True for names that are never real module dependencies: the package
    /// manager pseudo-name and anything in the exclusion set.
    pub fn is_excluded(&self, module: &ModuleName) -> bool {
        module.as_str() == self.package_manager_name
            || self.exclude.iter().any(|p| p.matches(module.as_str()))
    }
}
