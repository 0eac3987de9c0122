//! # devlink
//!
//! Links the checkouts of a multi-repository workspace together. A workspace
//! holds a framework checkout, a directory of module checkouts and one or
//! more site/app checkouts. Each checkout's package manager installs its
//! sibling dependencies as plain directories under `vendor/<organization>/`;
//! devlink replaces those directories with symlinks to the sibling
//! checkouts, so code edited in one checkout is immediately visible in every
//! checkout that depends on it.
//!
//! ## Core Concepts
//!
//! - **Configuration (`config`)**: the `.devlink.yaml` file describing the
//!   layout, the slot naming convention and the module registry.
//! - **Slots (`slot`)**: module names and the `<prefix><module>` directory
//!   naming convention, confined to one parsing boundary.
//! - **Filesystem (`filesystem`)**: listing, classifying and replacing slot
//!   directories, with platform-correct symlink removal.
//! - **Repositories (`repository`, `git`)**: cloning checkouts that are
//!   missing, optionally rewriting SSH locators to HTTPS (`locator`).
//! - **Resolution (`resolver`)**: the cleanup / package step / link pass,
//!   recursing into freshly cloned modules.
//! - **Orchestration (`orchestrator`)**: link-all, link-module, link-site,
//!   and running a command in every checkout.
//!
//! ## Example
//!
//! ```no_run
//! use devlink::config;
//! use devlink::locator::LocatorTransform;
//! use devlink::orchestrator::Orchestrator;
//! use devlink::output::Reporter;
//! use devlink::repository::RepositoryFetcher;
//! use devlink::slot::ModuleName;
//! use devlink::workspace::Workspace;
//!
//! # fn main() -> devlink::error::Result<()> {
//! let config_path = config::discover(&std::env::current_dir()?)?;
//! let config = config::from_file(&config_path)?;
//! let root = config_path.parent().expect("config file has a parent");
//! let workspace = Workspace::open(root, config)?;
//!
//! let fetcher = RepositoryFetcher::new(LocatorTransform::identity());
//! let reporter = Reporter::silent();
//! let orchestrator = Orchestrator::new(&workspace, &fetcher, None, &reporter);
//! orchestrator.link_module(&ModuleName::new("blog")?, None, true)?;
//! # Ok(())
//! # }
//! ```
//!
//! Runs are single-threaded and blocking. External commands (git, the
//! package manager, batch commands) have no timeout.

pub mod config;
pub mod defaults;
pub mod error;
pub mod exec;
pub mod exit_codes;
pub mod filesystem;
pub mod git;
pub mod locator;
pub mod orchestrator;
pub mod output;
pub mod package;
pub mod repository;
pub mod resolver;
pub mod slot;
pub mod status;
pub mod workspace;
