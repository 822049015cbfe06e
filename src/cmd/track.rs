// git-shadow: per-branch shadow storage for untracked files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tracking command implementations: `add`, `remove`, `ls`.

use crate::cli::track::{AddArgs, LsArgs, RemoveArgs};
use crate::error::Result;
use crate::git::storage;
use crate::shadow::{ShadowContext, ops};

/// Handler for the `add` command.
///
/// # Errors
///
/// Returns an error if any path is missing or any copy/commit fails.
pub fn run_add_command(args: &AddArgs, ctx: &ShadowContext) -> Result<()> {
    let added = ops::add(ctx, &args.paths)?;
    if added.is_empty() {
        println!("No new files to add");
        return Ok(());
    }
    for path in &added {
        println!("Added {path}");
    }
    println!("Added {} file(s)", added.len());
    Ok(())
}

/// Handler for the `remove` command.
///
/// # Errors
///
/// Returns an error if the registry rewrite or the commit fails.
pub fn run_remove_command(args: &RemoveArgs, ctx: &ShadowContext) -> Result<()> {
    let removed = ops::remove(ctx, &args.path)?;
    println!("Removed {removed}");
    Ok(())
}

/// Handler for the `ls` command.
///
/// # Errors
///
/// Returns an error if the registry or branch listing fails.
pub fn run_ls_command(args: &LsArgs, ctx: &ShadowContext) -> Result<()> {
    ctx.ensure_initialized()?;
    if args.branches {
        for branch in storage::branches(ctx.storage_path())? {
            println!("{branch}");
        }
    } else {
        for entry in ctx.registry()?.entries() {
            println!("{entry}");
        }
    }
    Ok(())
}
