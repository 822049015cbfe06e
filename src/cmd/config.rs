// git-shadow: per-branch shadow storage for untracked files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Options command implementation.

use crate::error::Result;
use crate::shadow::ShadowContext;

/// Handler for the `options` command. Prints the effective settings after
/// all configuration layers have been applied.
///
/// # Errors
///
/// Infallible today; kept fallible to match the other handlers.
pub fn run_options_command(ctx: &ShadowContext) -> Result<()> {
    for line in ctx.settings().format_options() {
        println!("{line}");
    }
    Ok(())
}
