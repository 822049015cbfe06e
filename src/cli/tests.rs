// git-shadow: per-branch shadow storage for untracked files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Cli, Command};
use clap::Parser;

#[test]
fn parses_init() {
    let cli = Cli::try_parse_from(["git-shadow", "init"]).unwrap();
    assert!(matches!(cli.command, Command::Init));
}

#[test]
fn parses_add_multiple_paths() {
    let cli = Cli::try_parse_from(["git-shadow", "add", ".env", "config"]).unwrap();
    match cli.command {
        Command::Add(args) => assert_eq!(args.paths.len(), 2),
        other => panic!("expected add, got {other:?}"),
    }
}

#[test]
fn add_requires_a_path() {
    assert!(Cli::try_parse_from(["git-shadow", "add"]).is_err());
}

#[test]
fn parses_save_message() {
    let cli = Cli::try_parse_from(["git-shadow", "save", "wip config"]).unwrap();
    match cli.command {
        Command::Save(args) => assert_eq!(args.message.as_deref(), Some("wip config")),
        other => panic!("expected save, got {other:?}"),
    }
}

#[test]
fn diff_to_requires_from() {
    assert!(Cli::try_parse_from(["git-shadow", "diff", "main", "feature"]).is_ok());
    assert!(Cli::try_parse_from(["git-shadow", "diff"]).is_ok());
}

#[test]
fn rejects_unknown_command() {
    assert!(Cli::try_parse_from(["git-shadow", "frobnicate"]).is_err());
}

#[test]
fn rejects_out_of_range_log_level() {
    assert!(Cli::try_parse_from(["git-shadow", "-l", "9", "status"]).is_err());
}
