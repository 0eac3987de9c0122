//! Link-app command implementation

use anyhow::Result;
use clap::Args;

use devlink::locator::Locator;

use super::Context;
use crate::cli::GlobalArgs;

/// Check out (if needed) and link a named app
#[derive(Args, Debug)]
pub struct LinkAppArgs {
    /// App name from the `apps` list of the workspace config
    pub name: String,

    /// Repository to clone the app from; defaults to the app's `repo`
    pub locator: Option<String>,
}

/// Execute the `link-app` command.
pub fn execute(args: LinkAppArgs, global: &GlobalArgs) -> Result<()> {
    let locator = args.locator.map(Locator::new);
    let context = Context::load(global)?;
    context.orchestrator().link_app(&args.name, locator.as_ref())?;
    Ok(())
}
