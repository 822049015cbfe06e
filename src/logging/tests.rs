// git-shadow: per-branch shadow storage for untracked files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel};

#[test]
fn test_log_level_conversion() {
    assert_eq!(LogLevel::from_u8(0), Some(LogLevel::SILENT));
    assert_eq!(LogLevel::from_u8(3), Some(LogLevel::INFO));
    assert_eq!(LogLevel::from_u8(5), Some(LogLevel::TRACE));
    assert_eq!(LogLevel::from_u8(6), None);
}

#[test]
fn test_log_level_filter_strings() {
    let filters: Vec<&str> = (0..=5)
        .map(|n| LogLevel::from_u8(n).unwrap().to_filter_string())
        .collect();
    insta::assert_yaml_snapshot!(filters, @r#"
    - "off"
    - error
    - warn
    - info
    - debug
    - trace
    "#);
}

#[test]
fn test_log_level_new_rejects_out_of_range() {
    assert!(LogLevel::new(9).is_err());
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::WARN);
    assert_eq!(config.file_level(), LogLevel::DEBUG);
    assert!(config.log_file().is_none());
}
