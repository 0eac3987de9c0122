//! # Link-Module Command Implementation
//!
//! Checks out a single module if it is missing, then links its dependency
//! slots. Slots naming modules that are not checked out yet are fetched
//! recursively.

use anyhow::Result;
use clap::Args;

use devlink::locator::Locator;
use devlink::slot::ModuleName;

use super::Context;
use crate::cli::GlobalArgs;

/// Check out (if needed) and link one module
#[derive(Args, Debug)]
pub struct LinkModuleArgs {
    /// Module name, as it appears under the modules directory
    pub module: String,

    /// Repository to clone from; defaults to the module's registry entry
    pub locator: Option<String>,

    /// Do not run the package step before linking
    #[arg(long)]
    pub skip_package_step: bool,
}

/// Execute the `link-module` command.
pub fn execute(args: LinkModuleArgs, global: &GlobalArgs) -> Result<()> {
    let module = ModuleName::new(args.module)?;
    let locator = args.locator.map(Locator::new);

    let context = Context::load(global)?;
    context
        .orchestrator()
        .link_module(&module, locator.as_ref(), args.skip_package_step)?;
    Ok(())
}
