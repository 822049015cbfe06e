// git-shadow: per-branch shadow storage for untracked files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::Settings;
use std::path::PathBuf;

#[test]
fn test_defaults() {
    let settings = Settings::default();
    assert_eq!(settings.default_branch, "main");
    assert_eq!(settings.default_remote, "origin");
    assert_eq!(settings.log_count, 10);
    assert!(settings.storage_root.is_none());
}

#[test]
fn test_parse_toml() {
    let settings = Settings::parse(
        r#"
        storage_root = "/var/shadow"
        default_branch = "trunk"
        log_count = 25
        "#,
    )
    .unwrap();
    assert_eq!(settings.storage_root, Some(PathBuf::from("/var/shadow")));
    assert_eq!(settings.default_branch, "trunk");
    assert_eq!(settings.default_remote, "origin");
    assert_eq!(settings.log_count, 25);
}

#[test]
fn test_parse_invalid_toml() {
    assert!(Settings::parse("default_branch = [").is_err());
}

#[test]
fn test_storage_root_explicit() {
    let settings = Settings {
        storage_root: Some(PathBuf::from("/tmp/shadow-root")),
        ..Settings::default()
    };
    assert_eq!(
        settings.storage_root().unwrap(),
        PathBuf::from("/tmp/shadow-root")
    );
}

#[test]
fn test_format_options() {
    let settings = Settings {
        storage_root: Some(PathBuf::from("/srv/shadow")),
        ..Settings::default()
    };
    insta::assert_yaml_snapshot!(settings.format_options(), @r"
    - default_branch = main
    - default_remote = origin
    - log_count      = 10
    - log_level      = 2
    - storage_root   = /srv/shadow
    ");
}
