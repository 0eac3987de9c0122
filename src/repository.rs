//! # Repository Fetching
//!
//! This module provides the `RepositoryFetcher`, which makes sure a checkout
//! exists at a given path, cloning it when it is missing. It owns nothing
//! beyond the clone itself: no pulls, no updates.
//!
//! ## Design
//!
//! The actual clone sits behind the **`GitOperations`** trait.
//! `DefaultGitOperations` runs the system `git`; tests substitute an
//! implementation that creates directories directly, so resolution logic can
//! be exercised without network access or a git binary.
//!
//! Locators pass through a [`LocatorTransform`] before cloning, which turns
//! `git@github.com:` locators into HTTPS ones when the workspace prefers it.

use std::path::Path;

use crate::error::{Error, Result};
use crate::locator::{Locator, LocatorTransform};

/// Trait for git operations - allows mocking in tests
pub trait GitOperations {
    /// Clones `url` into `target_dir`.
    fn clone_repo(&self, url: &str, target_dir: &Path) -> Result<()>;
}

/// The default implementation of `GitOperations`, which uses the system's
/// `git` command.
pub struct DefaultGitOperations;

impl GitOperations for DefaultGitOperations {
    fn clone_repo(&self, url: &str, target_dir: &Path) -> Result<()> {
        crate::git::clone(url, target_dir)
    }
}

/// Whether `ensure_checkout` had to clone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Checkout {
    Existing,
    Cloned,
}

/// Ensures checkouts exist, cloning on demand.
pub struct RepositoryFetcher {
    git_ops: Box<dyn GitOperations>,
    transform: LocatorTransform,
}

impl RepositoryFetcher {
    /// A fetcher that clones with the system `git`.
    pub fn new(transform: LocatorTransform) -> Self {
        Self::with_operations(Box::new(DefaultGitOperations), transform)
    }

    /// A fetcher with custom git operations, used to inject mocks.
    pub fn with_operations(git_ops: Box<dyn GitOperations>, transform: LocatorTransform) -> Self {
        Self { git_ops, transform }
    }

    pub fn transform(&self) -> &LocatorTransform {
        &self.transform
    }

    /// Makes sure a checkout exists at `path`.
    ///
    /// An existing path is left alone. Otherwise the (possibly rewritten)
    /// locator is cloned into `path`, and the clone only counts as
    /// successful if a directory is actually there afterwards.
    pub fn ensure_checkout(&self, path: &Path, locator: &Locator) -> Result<Checkout> {
        if path.exists() {
            return Ok(Checkout::Existing);
        }

        let url = self.transform.apply(locator);
        log::info!("cloning {} into {}", url, path.display());
        self.git_ops.clone_repo(url.as_str(), path)?;

        if !path.is_dir() {
            return Err(Error::FetchFailed {
                locator: url.to_string(),
                path: path.to_path_buf(),
                message: "clone did not produce a directory".to_string(),
            });
        }
        Ok(Checkout::Cloned)
    }
}
