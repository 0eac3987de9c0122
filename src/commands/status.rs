//! # Status Command Implementation
//!
//! Displays every checkout of the workspace as a tree, with each dependency
//! slot and what it currently is: a placeholder directory installed by the
//! package manager, a live link, or a link whose target is gone.
//!
//! This command is a safe, read-only operation that does not modify any files.

use anyhow::{Context as _, Result};
use clap::Args;
use ptree::TreeItem;
use std::borrow::Cow;
use std::io::{self, Write};

use devlink::filesystem::SlotState;
use devlink::status::{self, CheckoutStatus, SlotKind, SlotStatus};
use devlink::workspace::Workspace;

use super::Context;
use crate::cli::GlobalArgs;

/// Show the link state of every dependency slot
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Hide checkouts whose slots are all linked
    #[arg(long)]
    pub problems: bool,
}

/// Execute the `status` command.
pub fn execute(args: StatusArgs, global: &GlobalArgs) -> Result<()> {
    let context = Context::load(global)?;
    let checkouts = status::collect(&context.workspace)?;
    let tree = build_tree(&context.workspace, &checkouts, args.problems);

    let stdout = io::stdout();
    ptree::write_tree(&tree, stdout.lock()).context("Failed to display status tree")?;
    io::stdout().flush()?;
    Ok(())
}

fn build_tree(workspace: &Workspace, checkouts: &[CheckoutStatus], problems_only: bool) -> TreeNode {
    let children = checkouts
        .iter()
        .filter(|c| !problems_only || c.slots.iter().any(needs_attention))
        .map(|checkout| TreeNode {
            label: workspace.display_path(&checkout.path),
            children: checkout
                .slots
                .iter()
                .map(|slot| TreeNode {
                    label: slot_label(slot),
                    children: Vec::new(),
                })
                .collect(),
        })
        .collect();

    TreeNode {
        label: workspace.root().display().to_string(),
        children,
    }
}

fn needs_attention(slot: &SlotStatus) -> bool {
    match slot.kind {
        SlotKind::Excluded(_) => false,
        _ => !matches!(slot.state, SlotState::Linked(_)),
    }
}

fn slot_label(slot: &SlotStatus) -> String {
    let state = match &slot.state {
        SlotState::Linked(target) => format!("linked -> {}", target.display()),
        SlotState::Dangling(target) => format!("dangling -> {}", target.display()),
        SlotState::Placeholder => "placeholder".to_string(),
        SlotState::Absent => "missing".to_string(),
        SlotState::Other => "not a directory".to_string(),
    };
    match slot.kind {
        SlotKind::Excluded(_) => format!("{}: {} (excluded)", slot.dir_name, state),
        _ => format!("{}: {}", slot.dir_name, state),
    }
}

/// Tree node structure for ptree visualization
#[derive(Clone, Debug)]
struct TreeNode {
    label: String,
    children: Vec<TreeNode>,
}

impl TreeItem for TreeNode {
    type Child = TreeNode;

    fn write_self<W: io::Write>(&self, f: &mut W, _style: &ptree::Style) -> io::Result<()> {
        write!(f, "{}", self.label)
    }

    fn children(&self) -> Cow<'_, [Self::Child]> {
        Cow::Borrowed(&self.children)
    }
}
