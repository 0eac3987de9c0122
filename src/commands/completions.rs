//! `devlink completions <shell>`: prints a completion script to stdout.
//!
//! The script covers every subcommand and the global flags, including the
//! `run-everywhere` alias. It is generated from the same clap definition the
//! binary parses with, so it never drifts from `--help`.
//!
//! ```bash
//! # bash: picked up by bash-completion on the next shell start
//! devlink completions bash > ~/.local/share/bash-completion/completions/devlink
//! # zsh: any directory on $fpath, before compinit runs
//! devlink completions zsh > ~/.zfunc/_devlink
//! # fish
//! devlink completions fish > ~/.config/fish/completions/devlink.fish
//! ```

use anyhow::Result;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io::{self, Write};

use crate::cli::Cli;

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to print the completion script for
    #[arg(value_enum)]
    pub shell: Shell,
}

pub fn execute(args: CompletionsArgs) -> Result<()> {
    write_script(args.shell, &mut io::stdout().lock())?;
    Ok(())
}

fn write_script(shell: Shell, out: &mut impl Write) -> io::Result<()> {
    let mut cli = Cli::command();
    let bin_name = cli.get_name().to_string();
    generate(shell, &mut cli, bin_name, out);
    out.flush()
}
