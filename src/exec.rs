//! Running external commands inside a checkout.
//!
//! The working directory is always passed to the child process explicitly;
//! the process-wide current directory is never changed. Calls block until
//! the child exits and have no timeout, so a hung command hangs the run.

use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};

/// Runs `program` with `args` in `dir`, inheriting stdio.
pub fn run_program(program: &str, args: &[String], dir: &Path) -> io::Result<ExitStatus> {
    log::debug!("running {} {:?} in {}", program, args, dir.display());
    Command::new(program).args(args).current_dir(dir).status()
}

/// Runs a command line through the platform shell in `dir`, inheriting stdio.
pub fn run_shell(command: &str, dir: &Path) -> io::Result<ExitStatus> {
    log::debug!("running '{}' in {}", command, dir.display());
    shell_command(command).current_dir(dir).status()
}

#[cfg(windows)]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(command);
    cmd
}

#[cfg(not(windows))]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_run_shell_uses_given_directory() {
        let temp = TempDir::new().unwrap();
        let before = std::env::current_dir().unwrap();

        let status = run_shell("pwd > where.txt", temp.path()).unwrap();

        assert!(status.success());
        let recorded = fs::read_to_string(temp.path().join("where.txt")).unwrap();
        assert_eq!(
            fs::canonicalize(recorded.trim()).unwrap(),
            fs::canonicalize(temp.path()).unwrap()
        );
        assert_eq!(std::env::current_dir().unwrap(), before);
    }

    #[test]
    fn test_run_shell_reports_failure() {
        let temp = TempDir::new().unwrap();
        let status = run_shell("exit 4", temp.path()).unwrap();
        assert_eq!(status.code(), Some(4));
    }

    #[test]
    fn test_run_program_missing_binary() {
        let temp = TempDir::new().unwrap();
        assert!(run_program("devlink-no-such-program", &[], temp.path()).is_err());
    }
}
