//! The package-manager step.
//!
//! After a checkout's stale links are cleaned up, the package manager is run
//! so it can reinstall placeholder directories for every dependency slot.
//! The resolver then turns those placeholders into links. A failing step is
//! terminal for that checkout and is never retried.

use std::path::Path;

use crate::config::PackageStep;
use crate::error::{Error, Result};
use crate::exec;

/// Installs a checkout's dependencies. Mocked in tests.
pub trait PackageManager {
    /// Runs the install step with `checkout` as working directory.
    fn install(&self, checkout: &Path) -> Result<()>;

    /// Human-readable command line, for progress output.
    fn describe(&self) -> String;
}

/// Runs the configured external command.
pub struct CommandPackageManager {
    step: PackageStep,
}

impl CommandPackageManager {
    pub fn new(step: PackageStep) -> Self {
        Self { step }
    }
}

impl PackageManager for CommandPackageManager {
    fn install(&self, checkout: &Path) -> Result<()> {
        let status = exec::run_program(&self.step.program, &self.step.args, checkout).map_err(
            |e| Error::PackageStepFailed {
                dir: checkout.to_path_buf(),
                message: format!("failed to run {}: {}", self.step.program, e),
            },
        )?;

        if !status.success() {
            return Err(Error::PackageStepFailed {
                dir: checkout.to_path_buf(),
                message: format!("'{}' exited with {}", self.describe(), status),
            });
        }
        Ok(())
    }

    fn describe(&self) -> String {
        std::iter::once(self.step.program.as_str())
            .chain(self.step.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
