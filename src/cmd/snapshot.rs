// git-shadow: per-branch shadow storage for untracked files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Snapshot command implementations: `save`, `restore`, `status`, `diff`,
//! `log`, `sync`, `checkout`.

use crate::cli::snapshot::{CheckoutArgs, DiffArgs, LogArgs, SaveArgs, StatusArgs, SyncArgs};
use crate::error::Result;
use crate::git::storage::{self, CommitOutcome};
use crate::shadow::{CheckoutOutcome, RestoreReport, ShadowContext, ops};

/// Handler for the `save` command.
///
/// # Errors
///
/// Returns an error if the save fails.
pub fn run_save_command(args: &SaveArgs, ctx: &ShadowContext) -> Result<()> {
    let report = ops::save(ctx, args.message.as_deref())?;
    match report.outcome {
        CommitOutcome::Committed => println!("Saved to {}", report.branch),
        CommitOutcome::NoChanges => println!("No changes"),
    }
    Ok(())
}

/// Handler for the `restore` command.
///
/// # Errors
///
/// Returns an error if the restore fails.
pub fn run_restore_command(ctx: &ShadowContext) -> Result<()> {
    let report = ops::restore(ctx)?;
    print_restore(&report);
    Ok(())
}

/// Handler for the `status` command.
///
/// # Errors
///
/// Returns an error if classification fails.
pub fn run_status_command(args: &StatusArgs, ctx: &ShadowContext) -> Result<()> {
    let report = ops::status(ctx)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    for entry in &report {
        println!("{:10} {}", entry.status.as_str(), entry.path);
    }
    Ok(())
}

/// Handler for the `diff` command.
///
/// # Errors
///
/// Returns an error when given only one branch name, or if the diff fails.
pub fn run_diff_command(args: &DiffArgs, ctx: &ShadowContext) -> Result<()> {
    ctx.ensure_initialized()?;
    let refs = match (args.from.as_deref(), args.to.as_deref()) {
        (Some(from), Some(to)) => Some((from, to)),
        (None, None) => None,
        _ => anyhow::bail!("diff takes either no branch names or exactly two"),
    };
    let output = storage::diff(ctx.storage_path(), refs)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

/// Handler for the `log` command.
///
/// # Errors
///
/// Returns an error if the history query fails.
pub fn run_log_command(args: &LogArgs, ctx: &ShadowContext) -> Result<()> {
    ctx.ensure_initialized()?;
    let count = args.count.unwrap_or(ctx.settings().log_count);
    let output = storage::log(ctx.storage_path(), args.file.as_deref(), count)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

/// Handler for the `sync` command.
///
/// # Errors
///
/// Returns an error if the sync or the following restore fails.
pub fn run_sync_command(args: &SyncArgs, ctx: &ShadowContext) -> Result<()> {
    let from = args
        .branch
        .clone()
        .unwrap_or_else(|| ctx.settings().default_branch.clone());
    let report = ops::sync(ctx, &from)?;
    print_restore(&report);
    println!("Synced from {from}");
    Ok(())
}

/// Handler for the `checkout` command.
///
/// # Errors
///
/// Returns an error if the ref or file does not exist.
pub fn run_checkout_command(args: &CheckoutArgs, ctx: &ShadowContext) -> Result<()> {
    match ops::checkout(ctx, &args.refname, args.file.as_deref())? {
        CheckoutOutcome::SingleFile { file, refname } => {
            println!("Restored {file} from {refname}");
        }
        CheckoutOutcome::Full(report) => print_restore(&report),
    }
    Ok(())
}

fn print_restore(report: &RestoreReport) {
    if report.fallback
        && let Some(branch) = &report.branch
    {
        println!("No shadow branch for this branch yet; restored from {branch}");
    }
    for path in &report.restored {
        println!("Restored {path}");
    }
}
