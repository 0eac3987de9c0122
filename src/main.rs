//! # devlink CLI
//!
//! This is the binary entry point for the `devlink` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Executing the appropriate command based on the parsed arguments.
//! - Translating the first failure into a message on stderr and a process
//!   exit code (see [`devlink::exit_codes`]).
//!
//! The core application logic is defined in the `lib.rs` library crate, ensuring
//! that the binary is a thin wrapper around the reusable library functionality.

mod cli;
mod commands;

use clap::Parser;
use std::process::ExitCode;

use devlink::exit_codes;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    match cli.execute() {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            let code = err
                .downcast_ref::<devlink::error::Error>()
                .map(|e| e.exit_code())
                .unwrap_or(exit_codes::ERROR);
            ExitCode::from(code as u8)
        }
    }
}
