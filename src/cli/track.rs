// git-shadow: per-branch shadow storage for untracked files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the tracking commands: `add`, `remove`, `ls`.

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `add` command.
#[derive(Debug, Clone, Args)]
pub struct AddArgs {
    /// Files or directories to track. Directories expand recursively.
    #[arg(value_name = "PATH", required = true, num_args = 1..)]
    pub paths: Vec<PathBuf>,
}

/// Arguments for the `remove` command.
#[derive(Debug, Clone, Args)]
pub struct RemoveArgs {
    /// Tracked file to remove.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

/// Arguments for the `ls` command.
#[derive(Debug, Clone, Default, Args)]
pub struct LsArgs {
    /// Lists shadow branches instead of tracked files.
    #[arg(long)]
    pub branches: bool,
}
