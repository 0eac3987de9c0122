//! CLI argument parsing and command dispatch

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands;

/// devlink - Link the checkouts of a multi-repository workspace together
#[derive(Parser, Debug)]
#[command(name = "devlink")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalArgs,
}

/// Options shared by every subcommand.
#[derive(clap::Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    pub color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(
        long,
        global = true,
        value_name = "LEVEL",
        default_value = "warn",
        value_parser = ["off", "error", "warn", "info", "debug", "trace"]
    )]
    pub log_level: String,

    /// Rewrite SSH locators to HTTPS before cloning
    #[arg(long, global = true)]
    pub use_https: bool,

    /// Path to the workspace config file (defaults to searching upward for .devlink.yaml)
    #[arg(long, global = true, value_name = "FILE", env = "DEVLINK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Workspace root directory (defaults to the config file's directory)
    #[arg(long, global = true, value_name = "DIR", env = "DEVLINK_WORKSPACE")]
    pub workspace: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Link every registered module, then the site
    LinkAll(commands::link_all::LinkAllArgs),

    /// Check out (if needed) and link one module
    LinkModule(commands::link_module::LinkModuleArgs),

    /// Check out (if needed) and link the site
    LinkSite(commands::link_site::LinkSiteArgs),

    /// Check out (if needed) and link a named app
    LinkApp(commands::link_app::LinkAppArgs),

    /// Run a shell command in every checkout
    #[command(alias = "run-everywhere")]
    Run(commands::run::RunArgs),

    /// Show the link state of every dependency slot
    Status(commands::status::StatusArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.global.log_level)?;

        match self.command {
            Commands::LinkAll(args) => commands::link_all::execute(args, &self.global),
            Commands::LinkModule(args) => commands::link_module::execute(args, &self.global),
            Commands::LinkSite(args) => commands::link_site::execute(args, &self.global),
            Commands::LinkApp(args) => commands::link_app::execute(args, &self.global),
            Commands::Run(args) => commands::run::execute(args, &self.global),
            Commands::Status(args) => commands::status::execute(args, &self.global),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

/// Starts `env_logger` at `level`; `RUST_LOG` takes precedence when set.
fn init_logging(level: &str) -> Result<()> {
    let filter: log::LevelFilter = level
        .parse()
        .with_context(|| format!("invalid log level '{}'", level))?;
    // a second init (e.g. from tests) is harmless
    let _ = env_logger::Builder::new()
        .filter_level(filter)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
    Ok(())
}
