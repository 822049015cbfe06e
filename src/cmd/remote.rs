// git-shadow: per-branch shadow storage for untracked files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Remote command implementations: `push`, `pull`, `remote`, `gc`.

use crate::cli::remote::{PullArgs, PushArgs, RemoteArgs, RemoteSubcommand};
use crate::error::Result;
use crate::git::storage;
use crate::shadow::ShadowContext;

/// Handler for the `push` command.
///
/// # Errors
///
/// Returns an error if the push fails.
pub fn run_push_command(args: &PushArgs, ctx: &ShadowContext) -> Result<()> {
    ctx.ensure_initialized()?;
    let remote = args
        .remote
        .as_deref()
        .unwrap_or(&ctx.settings().default_remote);
    storage::push_all(ctx.storage_path(), remote)?;
    println!("Pushed all branches to {remote}");
    Ok(())
}

/// Handler for the `pull` command. Pulls the storage repository's current
/// branch only; other shadow branches are left untouched.
///
/// # Errors
///
/// Returns an error if the pull fails.
pub fn run_pull_command(args: &PullArgs, ctx: &ShadowContext) -> Result<()> {
    ctx.ensure_initialized()?;
    let remote = args
        .remote
        .as_deref()
        .unwrap_or(&ctx.settings().default_remote);
    let branch = storage::current_branch(ctx.storage_path())?
        .unwrap_or_else(|| ctx.settings().default_branch.clone());
    storage::pull(ctx.storage_path(), remote, &branch)?;
    println!("Pulled {branch} from {remote}");
    Ok(())
}

/// Handler for the `remote` command.
///
/// # Errors
///
/// Returns an error if the remote operation fails.
pub fn run_remote_command(args: &RemoteArgs, ctx: &ShadowContext) -> Result<()> {
    ctx.ensure_initialized()?;
    match &args.subcommand {
        RemoteSubcommand::Add { name, url } => {
            storage::add_remote(ctx.storage_path(), name, url)?;
            println!("Added remote {name}");
        }
        RemoteSubcommand::Remove { name } => {
            storage::remove_remote(ctx.storage_path(), name)?;
            println!("Removed remote {name}");
        }
        RemoteSubcommand::List => {
            let listing = storage::remotes(ctx.storage_path())?;
            if !listing.is_empty() {
                println!("{listing}");
            }
        }
    }
    Ok(())
}

/// Handler for the `gc` command.
///
/// # Errors
///
/// Returns an error if garbage collection fails.
pub fn run_gc_command(ctx: &ShadowContext) -> Result<()> {
    ctx.ensure_initialized()?;
    storage::gc_aggressive(ctx.storage_path())?;
    println!("Garbage collection complete");
    Ok(())
}
