// git-shadow: per-branch shadow storage for untracked files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the remote commands: `push`, `pull`, `remote`.

use clap::{Args, Subcommand};

/// Arguments for the `push` command.
#[derive(Debug, Clone, Default, Args)]
pub struct PushArgs {
    /// Remote to push to (defaults to the configured default remote).
    #[arg(value_name = "REMOTE")]
    pub remote: Option<String>,
}

/// Arguments for the `pull` command.
#[derive(Debug, Clone, Default, Args)]
pub struct PullArgs {
    /// Remote to pull from (defaults to the configured default remote).
    #[arg(value_name = "REMOTE")]
    pub remote: Option<String>,
}

/// Arguments for the `remote` command.
#[derive(Debug, Clone, Args)]
pub struct RemoteArgs {
    /// Remote subcommand.
    #[command(subcommand)]
    pub subcommand: RemoteSubcommand,
}

/// Remote subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum RemoteSubcommand {
    /// Adds a remote to the storage repository.
    Add {
        /// Remote name.
        name: String,
        /// Remote URL.
        url: String,
    },

    /// Removes a remote from the storage repository.
    Remove {
        /// Remote name.
        name: String,
    },

    /// Lists configured remotes.
    List,
}
