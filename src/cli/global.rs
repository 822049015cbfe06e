// git-shadow: per-branch shadow storage for untracked files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! ```text
//! --config FILE       ← Additional config files (can repeat)
//! --storage-root DIR  ← storage_root override
//! --log-level N       ← Console verbosity (0-5)
//! --log-file FILE     ← Log file path
//!
//! Precedence: CLI flags > GIT_SHADOW_* env > config files > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Storage root directory (overrides config and GIT_SHADOW_DIR).
    #[arg(long = "storage-root", value_name = "DIR")]
    pub storage_root: Option<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}
