//! # Error Handling
//!
//! This module defines the centralized error type for `devlink`. It uses the
//! `thiserror` library to build a single `Error` enum that covers every
//! failure the linker can report, each variant carrying enough context (a
//! path, a module name, a locator) to tell the operator what went wrong.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum. The first group of variants mirrors the
//!   linker's failure taxonomy:
//!   - `DirectoryUnreadable`: a required directory could not be enumerated.
//!   - `UnresolvableDependency`: a slot names a module with no known locator.
//!   - `FetchFailed`: a clone did not materialize the expected checkout.
//!   - `PackageStepFailed`: the external package-manager step failed.
//!   - `DependencyCycle`: a module was re-entered while still being resolved.
//!
//!   The remaining variants cover configuration loading and wrapped library
//!   errors.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! None of these errors are retried anywhere. They propagate up through the
//! recursive resolver to the command that started the run.

use std::path::PathBuf;

use thiserror::Error;

use crate::exit_codes;

/// Main error type for devlink operations
#[derive(Error, Debug)]
pub enum Error {
    /// A directory that must be listed could not be opened.
    #[error("Unable to open directory {}: {source}", path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A checkout is missing and no locator is known for it: a slot names an
    /// unregistered module, or an app has no `repo` configured.
    #[error("Repo argument is required for '{module}'\n  hint: pass a locator on the command line or register '{module}' in the workspace config")]
    UnresolvableDependency { module: String },

    /// Cloning did not produce a directory at the expected path.
    #[error("Error cloning repo {locator} into {}: {message}", path.display())]
    FetchFailed {
        locator: String,
        path: PathBuf,
        message: String,
    },

    /// The external package-manager step returned failure.
    #[error("Package step failed in {}: {message}", dir.display())]
    PackageStepFailed { dir: PathBuf, message: String },

    /// A module was encountered again while its own resolution was still on
    /// the stack.
    #[error("Cycle detected in module dependencies: {cycle}")]
    DependencyCycle { cycle: String },

    /// The requested site/app is not declared in the workspace config.
    #[error("Unknown app '{name}'")]
    UnknownApp { name: String },

    /// The workspace configuration file could not be parsed or is invalid.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// No workspace configuration was found walking up from a directory.
    #[error("No {} found in {} or any parent directory", crate::defaults::DEFAULT_CONFIG_FILENAME, start.display())]
    ConfigNotFound { start: PathBuf },

    /// A filesystem mutation (removal, symlink creation) failed.
    #[error("Filesystem operation error at {}: {message}", path.display())]
    Filesystem { path: PathBuf, message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A glob pattern error, wrapped from `glob::PatternError`.
    #[error("Glob pattern error: {0}")]
    Glob(#[from] glob::PatternError),
}

impl Error {
    /// Process exit code the binary reports for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::FetchFailed { .. } => exit_codes::FETCH_FAILED,
            _ => exit_codes::ERROR,
        }
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
