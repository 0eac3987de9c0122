//! # Run Command Implementation
//!
//! Runs one shell command in every checkout of the workspace (each module
//! checkout, then each cloned app, sorted by path). A failure in one
//! directory does not stop the others; the command as a whole fails if any
//! directory failed.

use anyhow::Result;
use clap::Args;

use super::Context;
use crate::cli::GlobalArgs;

/// Run a shell command in every checkout
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Command to run; the words are joined with spaces and passed to the shell
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

impl RunArgs {
    pub fn command_line(&self) -> String {
        self.command.join(" ")
    }
}

/// Execute the `run` command.
pub fn execute(args: RunArgs, global: &GlobalArgs) -> Result<()> {
    let context = Context::load(global)?;
    let summary = context.orchestrator().run_in_all(&args.command_line())?;

    let failed: Vec<String> = summary
        .failures()
        .map(|o| context.workspace.display_path(&o.dir))
        .collect();
    if !failed.is_empty() {
        anyhow::bail!(
            "'{}' failed in {} of {} directories: {}",
            args.command_line(),
            failed.len(),
            summary.outcomes.len(),
            failed.join(", ")
        );
    }
    Ok(())
}
