// git-shadow: per-branch shadow storage for untracked files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the snapshot commands: `save`, `status`, `diff`, `log`,
//! `sync`, `checkout`.

use clap::Args;

/// Arguments for the `save` command.
#[derive(Debug, Clone, Default, Args)]
pub struct SaveArgs {
    /// Commit message (defaults to "save <branch>").
    #[arg(value_name = "MESSAGE")]
    pub message: Option<String>,
}

/// Arguments for the `status` command.
#[derive(Debug, Clone, Default, Args)]
pub struct StatusArgs {
    /// Emits the classification as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `diff` command.
#[derive(Debug, Clone, Default, Args)]
pub struct DiffArgs {
    /// First branch to compare.
    #[arg(value_name = "FROM")]
    pub from: Option<String>,

    /// Second branch to compare.
    #[arg(value_name = "TO", requires = "from")]
    pub to: Option<String>,
}

/// Arguments for the `log` command.
#[derive(Debug, Clone, Default, Args)]
pub struct LogArgs {
    /// Restricts history to a single tracked file.
    #[arg(value_name = "FILE")]
    pub file: Option<String>,

    /// Number of commits to show (defaults to the configured log_count).
    #[arg(short = 'n', long = "count", value_name = "N")]
    pub count: Option<usize>,
}

/// Arguments for the `sync` command.
#[derive(Debug, Clone, Default, Args)]
pub struct SyncArgs {
    /// Source shadow branch (defaults to the configured default branch).
    #[arg(value_name = "BRANCH")]
    pub branch: Option<String>,
}

/// Arguments for the `checkout` command.
#[derive(Debug, Clone, Args)]
pub struct CheckoutArgs {
    /// Ref to restore from (branch, tag, or commit).
    #[arg(value_name = "REF")]
    pub refname: String,

    /// Single file to restore; omits the full restore.
    #[arg(value_name = "FILE")]
    pub file: Option<String>,
}
