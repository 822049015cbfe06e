// git-shadow: per-branch shadow storage for untracked files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Init command implementation.

use crate::error::Result;
use crate::shadow::{InitOutcome, ShadowContext, ops};

/// Handler for the `init` command.
///
/// # Errors
///
/// Returns an error if the storage repository cannot be created.
pub fn run_init_command(ctx: &ShadowContext) -> Result<()> {
    match ops::init(ctx)? {
        InitOutcome::Initialized => {
            println!("Initialized shadow at {}", ctx.storage_path().display());
        }
        InitOutcome::AlreadyInitialized => {
            println!(
                "Shadow already initialized at {}",
                ctx.storage_path().display()
            );
        }
    }
    Ok(())
}
