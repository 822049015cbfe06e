// git-shadow: per-branch shadow storage for untracked files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Hook command implementations: `install-hooks`, `uninstall-hooks`.

use crate::error::Result;
use crate::hooks;
use crate::shadow::ShadowContext;

/// Handler for the `install-hooks` command.
///
/// # Errors
///
/// Returns an error if a foreign hook is in the way or the write fails.
pub fn run_install_hooks_command(ctx: &ShadowContext) -> Result<()> {
    let path = hooks::install(ctx.work_dir())?;
    println!("Installed post-checkout hook at {}", path.display());
    Ok(())
}

/// Handler for the `uninstall-hooks` command.
///
/// # Errors
///
/// Returns an error if a foreign hook is found or the removal fails.
pub fn run_uninstall_hooks_command(ctx: &ShadowContext) -> Result<()> {
    if hooks::uninstall(ctx.work_dir())? {
        println!("Removed post-checkout hook");
    } else {
        println!("No post-checkout hook installed");
    }
    Ok(())
}
