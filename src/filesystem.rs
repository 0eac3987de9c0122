//! # Filesystem Prober
//!
//! Directory listing and slot mutation primitives used by the resolver.
//!
//! Directory symlinks are not the same OS object everywhere. On Windows a
//! symlink to a directory must be removed with the directory-removal call,
//! while POSIX systems unlink every symlink the same way. [`remove_slot`]
//! hides that difference, and never follows the link: removing a linked
//! slot leaves the target's contents untouched.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::slot::{ModuleName, SlotNaming};

/// State of a path that may hold a dependency slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotState {
    /// Nothing at the path.
    Absent,
    /// A real directory, typically a placeholder installed by the package manager.
    Placeholder,
    /// A symlink whose target exists.
    Linked(PathBuf),
    /// A symlink whose target is missing.
    Dangling(PathBuf),
    /// Something else, such as a regular file.
    Other,
}

/// Classifies `path` without following a symlink at the final component.
pub fn slot_state(path: &Path) -> SlotState {
    let meta = match fs::symlink_metadata(path) {
        Ok(meta) => meta,
        Err(_) => return SlotState::Absent,
    };
    if meta.file_type().is_symlink() {
        let target = fs::read_link(path).unwrap_or_default();
        return if path.exists() {
            SlotState::Linked(target)
        } else {
            SlotState::Dangling(target)
        };
    }
    if meta.is_dir() {
        SlotState::Placeholder
    } else {
        SlotState::Other
    }
}

/// True if `path` itself is a symlink.
pub fn is_symlink(path: &Path) -> bool {
    fs::symlink_metadata(path)
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false)
}

/// True if `path` is a directory and not a symlink to one.
pub fn is_real_dir(path: &Path) -> bool {
    fs::symlink_metadata(path)
        .map(|m| m.is_dir())
        .unwrap_or(false)
}

/// Lists every direct, non-hidden subdirectory of `dir`.
///
/// Symlinks to directories count as directories. Results are sorted by
/// name. Failing to open `dir` is an error, never an empty result.
pub fn list_subdirectories(dir: &Path) -> Result<Vec<PathBuf>> {
    let unreadable = |source: io::Error| Error::DirectoryUnreadable {
        path: dir.to_path_buf(),
        source,
    };

    let mut dirs = Vec::new();
    for entry in fs::read_dir(dir).map_err(unreadable)? {
        let entry = entry.map_err(unreadable)?;
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        let path = entry.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// Lists the modules that have a slot directory in `dir`.
///
/// A missing or unreadable dependency area simply has no slots. Entries are
/// directories or symlinks (dangling ones included, so stale links can be
/// cleaned up) whose name parses as a slot; the reserved framework slot is
/// never reported. Sorted by module name.
pub fn list_slot_candidates(dir: &Path, naming: &SlotNaming) -> Vec<ModuleName> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::debug!("no slots in {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut modules: Vec<ModuleName> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            let path = entry.path();
            path.is_dir() || is_symlink(&path)
        })
        .filter_map(|entry| naming.parse(&entry.file_name().to_string_lossy()))
        .collect();
    modules.sort();
    modules
}

/// Removes a slot: a symlink (without touching its target) or a real
/// directory tree. A missing path is not an error.
pub fn remove_slot(path: &Path) -> Result<()> {
    let meta = match fs::symlink_metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(fs_error(path, e)),
    };

    let result = if meta.file_type().is_symlink() {
        remove_symlink(path)
    } else if meta.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    result.map_err(|e| fs_error(path, e))
}

#[cfg(windows)]
fn remove_symlink(path: &Path) -> io::Result<()> {
    // directory symlinks and junctions are directory entries on Windows
    if path.is_dir() {
        fs::remove_dir(path)
    } else {
        fs::remove_file(path)
    }
}

#[cfg(not(windows))]
fn remove_symlink(path: &Path) -> io::Result<()> {
    fs::remove_file(path)
}

/// Makes `path` a symlink to the directory `target`, deleting whatever was
/// there first. Running it again with the same arguments gives the same
/// result.
pub fn replace_with_symlink(path: &Path, target: &Path) -> Result<()> {
    remove_slot(path)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| fs_error(parent, e))?;
    }
    symlink_dir(target, path).map_err(|e| fs_error(path, e))
}

#[cfg(unix)]
fn symlink_dir(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn symlink_dir(target: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_dir(target, link)
}

fn fs_error(path: &Path, e: io::Error) -> Error {
    Error::Filesystem {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
}
