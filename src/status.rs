//! Read-only report of the link state of every checkout in a workspace.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::filesystem::{self, SlotState};
use crate::slot::ModuleName;
use crate::workspace::Workspace;

/// What a slot is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotKind {
    Framework,
    Module(ModuleName),
    /// A module slot the linker never touches.
    Excluded(ModuleName),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotStatus {
    pub dir_name: String,
    pub kind: SlotKind,
    pub state: SlotState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutStatus {
    /// Module name or app name.
    pub name: String,
    pub path: PathBuf,
    pub slots: Vec<SlotStatus>,
}

/// Collects the slots of every module checkout and every cloned app.
///
/// A missing modules directory just means there are no module checkouts.
pub fn collect(workspace: &Workspace) -> Result<Vec<CheckoutStatus>> {
    let mut checkouts = Vec::new();

    let modules_dir = workspace.modules_dir();
    if modules_dir.is_dir() {
        for path in filesystem::list_subdirectories(&modules_dir)? {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let area = workspace.dependency_area(&path, Path::new(""));
            checkouts.push(CheckoutStatus {
                name,
                slots: slots(workspace, &area),
                path,
            });
        }
    }

    for app in &workspace.config().apps {
        let path = workspace.app_path(app);
        if !path.is_dir() {
            continue;
        }
        let area = workspace.dependency_area(&path, &app.package_root);
        checkouts.push(CheckoutStatus {
            name: app.name.clone(),
            slots: slots(workspace, &area),
            path,
        });
    }

    Ok(checkouts)
}

fn slots(workspace: &Workspace, area: &Path) -> Vec<SlotStatus> {
    let naming = workspace.naming();
    let Ok(entries) = fs::read_dir(area) else {
        return Vec::new();
    };

    let mut slots: Vec<SlotStatus> = entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            let dir_name = entry.file_name().to_string_lossy().into_owned();
            let kind = if dir_name == naming.framework_slot() {
                SlotKind::Framework
            } else {
                let module = naming.parse(&dir_name)?;
                if naming.is_excluded(&module) {
                    SlotKind::Excluded(module)
                } else {
                    SlotKind::Module(module)
                }
            };
            let state = filesystem::slot_state(&entry.path());
            Some(SlotStatus {
                dir_name,
                kind,
                state,
            })
        })
        .collect();
    slots.sort_by(|a, b| a.dir_name.cmp(&b.dir_name));
    slots
}
