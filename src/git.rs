use std::fs;
use std::path::Path;
use std::process::Command;

use crate::error::Error;

/// Clone a repository into `target_dir` with the system git command.
///
/// Using the git binary picks up whatever authentication the operator has
/// configured: SSH keys and agents, credential helpers, access tokens.
pub fn clone(url: &str, target_dir: &Path) -> Result<(), Error> {
    // Create parent directory if it doesn't exist
    if let Some(parent) = target_dir.parent() {
        fs::create_dir_all(parent)?;
    }

    log::debug!("git clone {} {}", url, target_dir.display());
    let output = Command::new("git")
        .arg("clone")
        .arg(url)
        .arg(target_dir)
        .output()
        .map_err(|e| Error::FetchFailed {
            locator: url.to_string(),
            path: target_dir.to_path_buf(),
            message: format!("failed to run git: {}", e),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);

        let message = if stderr.contains("Permission denied")
            || stderr.contains("Could not read from remote repository")
        {
            format!(
                "Authentication failed. Make sure you have access to the repository,\n\
                or rerun with --use-https to clone over HTTPS instead of SSH.\n\
                Error: {}",
                stderr.trim()
            )
        } else {
            stderr.trim().to_string()
        };

        return Err(Error::FetchFailed {
            locator: url.to_string(),
            path: target_dir.to_path_buf(),
            message,
        });
    }

    Ok(())
}
