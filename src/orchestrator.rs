//! # Workspace Orchestrator
//!
//! Top-level sequencing of link runs, plus the batch runner that executes a
//! command in every checkout.
//!
//! Each `link_*` operation starts a fresh [`Resolver`] and stops at the first
//! error. `run_in_all` is the exception: it is best-effort and keeps going
//! after a directory fails.

use std::path::PathBuf;

use crate::error::Result;
use crate::exec;
use crate::locator::Locator;
use crate::output::Reporter;
use crate::package::PackageManager;
use crate::repository::RepositoryFetcher;
use crate::resolver::Resolver;
use crate::slot::ModuleName;
use crate::workspace::Workspace;

/// Everything a link run needs.
pub struct Orchestrator<'a> {
    workspace: &'a Workspace,
    fetcher: &'a RepositoryFetcher,
    package_manager: Option<&'a dyn PackageManager>,
    reporter: &'a Reporter,
}

/// Outcome of one directory in a batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub dir: PathBuf,
    /// Exit code, `None` if the process was killed by a signal or could not
    /// be started.
    pub code: Option<i32>,
    pub success: bool,
}

/// Result of `run_in_all`, in execution order.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub outcomes: Vec<RunOutcome>,
}

impl RunSummary {
    pub fn failures(&self) -> impl Iterator<Item = &RunOutcome> {
        self.outcomes.iter().filter(|o| !o.success)
    }

    pub fn all_succeeded(&self) -> bool {
        self.failures().next().is_none()
    }
}

impl<'a> Orchestrator<'a> {
    pub fn new(
        workspace: &'a Workspace,
        fetcher: &'a RepositoryFetcher,
        package_manager: Option<&'a dyn PackageManager>,
        reporter: &'a Reporter,
    ) -> Self {
        Self {
            workspace,
            fetcher,
            package_manager,
            reporter,
        }
    }

    fn resolver(&self) -> Resolver<'a> {
        Resolver::new(
            self.workspace,
            self.fetcher,
            self.package_manager,
            self.reporter,
        )
    }

    /// Links every registered module in declaration order, then the site.
    ///
    /// Confirmation is the caller's job. Stops at the first failure.
    pub fn link_all(&self) -> Result<()> {
        for module in self.workspace.config().modules.names() {
            self.link_module(module, None, false)?;
        }
        self.link_site(None)
    }

    /// Checks out (if needed) and links one module.
    pub fn link_module(
        &self,
        module: &ModuleName,
        locator: Option<&Locator>,
        skip_package_step: bool,
    ) -> Result<()> {
        self.resolver()
            .link_module(module, locator, !skip_package_step)
    }

    /// Checks out (if needed) and links the site, the first configured app.
    pub fn link_site(&self, locator: Option<&Locator>) -> Result<()> {
        let site = self.workspace.site()?;
        self.resolver().link_app(site, locator)
    }

    /// Checks out (if needed) and links the named app.
    pub fn link_app(&self, name: &str, locator: Option<&Locator>) -> Result<()> {
        let app = self.workspace.app(name)?;
        self.resolver().link_app(app, locator)
    }

    /// Runs `command` through the shell in every checkout, sorted by path.
    ///
    /// Listing the checkouts can fail; running them cannot. A command that
    /// fails or cannot be started is recorded and the next directory runs.
    pub fn run_in_all(&self, command: &str) -> Result<RunSummary> {
        let dirs = self.workspace.checkout_dirs()?;
        let mut summary = RunSummary::default();

        for dir in dirs {
            self.reporter.step(&format!(
                "Running '{}' in {}...",
                command,
                self.workspace.display_path(&dir)
            ));
            let outcome = match exec::run_shell(command, &dir) {
                Ok(status) => RunOutcome {
                    dir,
                    code: status.code(),
                    success: status.success(),
                },
                Err(e) => {
                    self.reporter
                        .error(&format!("failed to run '{}': {}", command, e));
                    RunOutcome {
                        dir,
                        code: None,
                        success: false,
                    }
                }
            };
            if outcome.success {
                self.reporter.done();
            } else {
                self.reporter.error(&format!(
                    "'{}' failed in {}",
                    command,
                    self.workspace.display_path(&outcome.dir)
                ));
            }
            summary.outcomes.push(outcome);
        }
        Ok(summary)
    }
}
