//! Link-site command implementation

use anyhow::Result;
use clap::Args;

use devlink::locator::Locator;

use super::Context;
use crate::cli::GlobalArgs;

/// Check out (if needed) and link the site
#[derive(Args, Debug)]
pub struct LinkSiteArgs {
    /// Repository to clone the site from; defaults to the site's `repo`
    pub locator: Option<String>,
}

/// Execute the `link-site` command.
pub fn execute(args: LinkSiteArgs, global: &GlobalArgs) -> Result<()> {
    let locator = args.locator.map(Locator::new);
    let context = Context::load(global)?;
    context.orchestrator().link_site(locator.as_ref())?;
    Ok(())
}
