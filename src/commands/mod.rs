//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the `devlink`
//! command-line tool. Each subcommand is defined in its own file.
//!
//! ## Structure
//!
//! Each command module contains:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args` (and the global
//!   options) and performs the command's logic.
//!
//! Commands that touch the workspace start by building a [`Context`], which
//! locates the config file, opens the workspace and wires up the fetcher,
//! the package step and the reporter.

pub mod completions;
pub mod link_all;
pub mod link_app;
pub mod link_module;
pub mod link_site;
pub mod run;
pub mod status;

use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};

use devlink::config;
use devlink::locator::LocatorTransform;
use devlink::orchestrator::Orchestrator;
use devlink::output::{OutputConfig, Reporter};
use devlink::package::{CommandPackageManager, PackageManager};
use devlink::repository::RepositoryFetcher;
use devlink::workspace::Workspace;

use crate::cli::GlobalArgs;

/// A loaded workspace plus the collaborators a link run needs.
pub struct Context {
    pub workspace: Workspace,
    pub fetcher: RepositoryFetcher,
    pub package_manager: Option<CommandPackageManager>,
    pub reporter: Reporter,
}

impl Context {
    /// Locates and loads the workspace described by the global options.
    pub fn load(global: &GlobalArgs) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        let (config_path, root) = locate(global, &cwd)?;
        log::debug!(
            "using config {} with workspace root {}",
            config_path.display(),
            root.display()
        );

        let config = config::from_file(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

        let transform = LocatorTransform::new(&config.ssh_host, global.use_https || config.use_https);
        let package_manager = config.package_step.clone().map(CommandPackageManager::new);
        let workspace = Workspace::open(&root, config)?;

        Ok(Self {
            workspace,
            fetcher: RepositoryFetcher::new(transform),
            package_manager,
            reporter: Reporter::stdout(&OutputConfig::from_env_and_flag(&global.color)),
        })
    }

    pub fn orchestrator(&self) -> Orchestrator<'_> {
        Orchestrator::new(
            &self.workspace,
            &self.fetcher,
            self.package_manager
                .as_ref()
                .map(|m| m as &dyn PackageManager),
            &self.reporter,
        )
    }
}

/// Returns the config file and the workspace root.
///
/// An explicit `--config` wins; otherwise the config is searched for upward
/// from `--workspace` (or the current directory). The root is `--workspace`
/// when given, else the directory holding the config file.
fn locate(global: &GlobalArgs, cwd: &Path) -> Result<(PathBuf, PathBuf)> {
    let config_path = match &global.config {
        Some(path) => cwd.join(path),
        None => {
            let start = global
                .workspace
                .as_ref()
                .map(|w| cwd.join(w))
                .unwrap_or_else(|| cwd.to_path_buf());
            config::discover(&start)?
        }
    };

    let root = match &global.workspace {
        Some(dir) => cwd.join(dir),
        None => config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| cwd.to_path_buf()),
    };
    Ok((config_path, root))
}
