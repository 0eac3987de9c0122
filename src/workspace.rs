//! The workspace: one root directory holding every checkout.
//!
//! All paths the linker touches are derived here from the root and the
//! configured layout, so the rest of the crate never builds paths by hand.

use std::path::{Path, PathBuf};

use crate::config::{AppConfig, WorkspaceConfig};
use crate::error::{Error, Result};
use crate::filesystem;
use crate::slot::{ModuleName, SlotNaming};

/// A workspace root together with its configuration.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
    config: WorkspaceConfig,
    naming: SlotNaming,
}

impl Workspace {
    /// Opens the workspace rooted at `root`.
    ///
    /// The root is canonicalized, so every symlink the linker creates points
    /// at an absolute path.
    pub fn open(root: &Path, config: WorkspaceConfig) -> Result<Self> {
        let root = root.canonicalize().map_err(|source| Error::DirectoryUnreadable {
            path: root.to_path_buf(),
            source,
        })?;
        let naming = config.slot_naming()?;
        Ok(Self {
            root,
            config,
            naming,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &WorkspaceConfig {
        &self.config
    }

    pub fn naming(&self) -> &SlotNaming {
        &self.naming
    }

    /// Canonical location of the framework sources.
    pub fn framework_path(&self) -> PathBuf {
        self.root.join(&self.config.layout.framework)
    }

    /// Directory holding one checkout per module.
    pub fn modules_dir(&self) -> PathBuf {
        self.root.join(&self.config.layout.modules)
    }

    /// Canonical checkout location of `module`.
    pub fn module_path(&self, module: &ModuleName) -> PathBuf {
        self.modules_dir().join(module.as_str())
    }

    /// Checkout location of an app.
    pub fn app_path(&self, app: &AppConfig) -> PathBuf {
        self.root.join(&app.path)
    }

    /// The site: the first configured app.
    pub fn site(&self) -> Result<&AppConfig> {
        self.config.apps.first().ok_or_else(|| Error::UnknownApp {
            name: crate::defaults::DEFAULT_SITE_NAME.to_string(),
        })
    }

    /// Looks up an app by name.
    pub fn app(&self, name: &str) -> Result<&AppConfig> {
        self.config.app(name).ok_or_else(|| Error::UnknownApp {
            name: name.to_string(),
        })
    }

    /// The vendor area holding the slots of the checkout at `checkout`.
    /// `package_root` is the directory inside the checkout that owns `vendor/`.
    pub fn dependency_area(&self, checkout: &Path, package_root: &Path) -> PathBuf {
        checkout
            .join(package_root)
            .join("vendor")
            .join(&self.config.organization)
    }

    /// Path of the reserved framework slot inside a dependency area.
    pub fn framework_slot(&self, area: &Path) -> PathBuf {
        area.join(self.naming.framework_slot())
    }

    /// Path of the slot for `module` inside a dependency area.
    pub fn module_slot(&self, area: &Path, module: &ModuleName) -> PathBuf {
        area.join(self.naming.slot_dir_name(module))
    }

    /// Every module and app checkout present on disk, sorted by path.
    ///
    /// The modules directory must be readable; apps that have not been
    /// cloned yet are skipped.
    pub fn checkout_dirs(&self) -> Result<Vec<PathBuf>> {
        let mut dirs = filesystem::list_subdirectories(&self.modules_dir())?;
        dirs.extend(
            self.config
                .apps
                .iter()
                .map(|app| self.app_path(app))
                .filter(|path| path.is_dir()),
        );
        dirs.sort();
        dirs.dedup();
        Ok(dirs)
    }

    /// `path` relative to the root, for display.
    pub fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}
