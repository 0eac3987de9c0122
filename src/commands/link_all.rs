//! # Link-All Command Implementation
//!
//! Links every module in the registry, in declaration order, and then the
//! site. Because this can clone many repositories and rewrite every
//! dependency slot in the workspace, it asks for confirmation first unless
//! `--yes` is given. Declining is reported as a failure.

use anyhow::{Context as _, Result};
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

use super::Context;
use crate::cli::GlobalArgs;

/// Link every registered module, then the site
#[derive(Args, Debug)]
pub struct LinkAllArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Execute the `link-all` command.
pub fn execute(args: LinkAllArgs, global: &GlobalArgs) -> Result<()> {
    let context = Context::load(global)?;

    if !args.yes {
        let modules = context.workspace.config().modules.len();
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!(
                "Link {} module(s) and the site in {}?",
                modules,
                context.workspace.root().display()
            ))
            .default(false)
            .interact()
            .context("Confirmation prompt failed (use --yes when not running in a terminal)")?;

        if !confirmed {
            anyhow::bail!("Aborted.");
        }
    }

    context.orchestrator().link_all()?;
    Ok(())
}
