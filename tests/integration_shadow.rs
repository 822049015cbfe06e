// git-shadow: per-branch shadow storage for untracked files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! End-to-end tests for the shadow operations.
//!
//! Each test builds a real primary repository and an isolated storage
//! repository in a temp directory, then drives the operations the way the
//! command handlers do.

use git_shadow::config::Settings;
use git_shadow::git::storage;
use git_shadow::shadow::{CheckoutOutcome, FileStatus, ShadowContext, ops};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Commit identity for every git process spawned below, so the tests run
/// without any global git configuration.
fn ensure_git_identity() {
    static ONCE: std::sync::Once = std::sync::Once::new();
    ONCE.call_once(|| {
        for (key, value) in [
            ("GIT_AUTHOR_NAME", "Test"),
            ("GIT_AUTHOR_EMAIL", "test@test.com"),
            ("GIT_COMMITTER_NAME", "Test"),
            ("GIT_COMMITTER_EMAIL", "test@test.com"),
        ] {
            // SAFETY: runs once, before any test spawns a git process.
            unsafe { std::env::set_var(key, value) };
        }
    });
}

fn run_git(args: &[&str], cwd: &Path) -> bool {
    Command::new("git")
        .args(args)
        .current_dir(cwd)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Primary repository on branch `main` with one commit.
fn init_primary(dir: &Path) {
    assert!(run_git(&["init", "-q", "-b", "main"], dir));
    fs::write(dir.join("README.md"), "# test\n").unwrap();
    assert!(run_git(&["add", "."], dir));
    assert!(run_git(&["commit", "-q", "-m", "initial"], dir));
}

/// Temp layout with a primary repo and a storage path that bypasses
/// identity resolution.
fn fixture() -> (TempDir, ShadowContext) {
    ensure_git_identity();
    let temp = tempfile::tempdir().expect("failed to create temp dir");

    let primary = temp.path().join("primary");
    fs::create_dir_all(&primary).unwrap();
    init_primary(&primary);

    let storage = temp.path().join("storage").join("abc123def456");
    let ctx = ShadowContext::with_storage_path(Settings::default(), primary, storage);
    (temp, ctx)
}

/// Fixture with an initialized storage repository.
fn initialized_fixture() -> (TempDir, ShadowContext) {
    let (temp, ctx) = fixture();
    assert_eq!(ops::init(&ctx).unwrap(), ops::InitOutcome::Initialized);
    (temp, ctx)
}

fn write_local(ctx: &ShadowContext, rel: &str, content: &str) {
    let path = ctx.work_dir().join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn read_local(ctx: &ShadowContext, rel: &str) -> String {
    fs::read_to_string(ctx.work_dir().join(rel)).unwrap()
}

// =============================================================================
// init
// =============================================================================

#[test]
fn init_creates_storage_and_is_idempotent() {
    let (_temp, ctx) = fixture();

    assert_eq!(ops::init(&ctx).unwrap(), ops::InitOutcome::Initialized);
    assert!(storage::is_repo(ctx.storage_path()));
    assert!(ctx.storage_path().join(".shadowconfig").is_file());
    assert_eq!(
        storage::current_branch(ctx.storage_path()).unwrap(),
        Some("main".to_string())
    );

    assert_eq!(ops::init(&ctx).unwrap(), ops::InitOutcome::AlreadyInitialized);
}

#[test]
fn operations_fail_before_init() {
    let (_temp, ctx) = fixture();
    write_local(&ctx, ".env", "SECRET=1\n");
    assert!(ops::add(&ctx, &[PathBuf::from(".env")]).is_err());
    assert!(ops::save(&ctx, None).is_err());
}

// =============================================================================
// add / remove
// =============================================================================

#[test]
fn add_tracks_and_mirrors() {
    let (_temp, ctx) = initialized_fixture();
    write_local(&ctx, ".env", "SECRET=1\n");

    let added = ops::add(&ctx, &[PathBuf::from(".env")]).unwrap();
    assert_eq!(added, vec![".env"]);
    assert_eq!(
        fs::read_to_string(ctx.storage_path().join(".env")).unwrap(),
        "SECRET=1\n"
    );
    assert!(ctx.registry().unwrap().contains(".env"));

    // Re-adding a tracked file is a no-op.
    let again = ops::add(&ctx, &[PathBuf::from(".env")]).unwrap();
    assert!(again.is_empty());
}

#[test]
fn add_missing_path_is_an_error() {
    let (_temp, ctx) = initialized_fixture();
    assert!(ops::add(&ctx, &[PathBuf::from("no-such-file")]).is_err());
}

#[test]
fn add_directory_expands_recursively() {
    let (_temp, ctx) = initialized_fixture();
    write_local(&ctx, "conf/a.toml", "a = 1\n");
    write_local(&ctx, "conf/sub/b.toml", "b = 2\n");

    let added = ops::add(&ctx, &[PathBuf::from("conf")]).unwrap();
    assert_eq!(added, vec!["conf/a.toml", "conf/sub/b.toml"]);
    assert!(ctx.storage_path().join("conf/sub/b.toml").is_file());
}

#[test]
fn remove_untracks_and_commits() {
    let (_temp, ctx) = initialized_fixture();
    write_local(&ctx, ".env", "SECRET=1\n");
    ops::add(&ctx, &[PathBuf::from(".env")]).unwrap();

    let removed = ops::remove(&ctx, Path::new(".env")).unwrap();
    assert_eq!(removed, ".env");
    assert!(!ctx.registry().unwrap().contains(".env"));
    assert!(!ctx.storage_path().join(".env").exists());

    let log = storage::log(ctx.storage_path(), None, 10).unwrap();
    assert!(log.contains("remove .env"));

    // The local copy is never touched.
    assert_eq!(read_local(&ctx, ".env"), "SECRET=1\n");

    // Removing an already-removed path is a no-op, not an error.
    ops::remove(&ctx, Path::new(".env")).unwrap();
}

// =============================================================================
// save / restore
// =============================================================================

#[test]
fn save_then_restore_round_trips() {
    let (_temp, ctx) = initialized_fixture();
    write_local(&ctx, ".env", "SECRET=1\n");
    ops::add(&ctx, &[PathBuf::from(".env")]).unwrap();

    write_local(&ctx, ".env", "SECRET=2\n");
    let report = ops::save(&ctx, None).unwrap();
    assert_eq!(report.branch, "main");
    assert_eq!(report.outcome, storage::CommitOutcome::Committed);

    fs::remove_file(ctx.work_dir().join(".env")).unwrap();
    let restored = ops::restore(&ctx).unwrap();
    assert!(!restored.fallback);
    assert_eq!(restored.restored, vec![".env"]);
    assert_eq!(read_local(&ctx, ".env"), "SECRET=2\n");

    // Nothing changed since the last save.
    let report = ops::save(&ctx, None).unwrap();
    assert_eq!(report.outcome, storage::CommitOutcome::NoChanges);
}

#[test]
fn save_uses_custom_message() {
    let (_temp, ctx) = initialized_fixture();
    write_local(&ctx, ".env", "SECRET=1\n");
    ops::add(&ctx, &[PathBuf::from(".env")]).unwrap();
    write_local(&ctx, ".env", "SECRET=2\n");

    ops::save(&ctx, Some("before rotation")).unwrap();
    let log = storage::log(ctx.storage_path(), None, 5).unwrap();
    assert!(log.contains("before rotation"));
}

#[test]
fn branches_keep_isolated_content() {
    let (_temp, ctx) = initialized_fixture();
    write_local(&ctx, ".env", "main-secret\n");
    ops::add(&ctx, &[PathBuf::from(".env")]).unwrap();
    ops::save(&ctx, None).unwrap();

    assert!(run_git(&["checkout", "-q", "-b", "feature"], ctx.work_dir()));
    write_local(&ctx, ".env", "feature-secret\n");
    let report = ops::save(&ctx, None).unwrap();
    assert_eq!(report.branch, "feature");

    assert!(run_git(&["checkout", "-q", "main"], ctx.work_dir()));
    ops::restore(&ctx).unwrap();
    assert_eq!(read_local(&ctx, ".env"), "main-secret\n");

    assert!(run_git(&["checkout", "-q", "feature"], ctx.work_dir()));
    ops::restore(&ctx).unwrap();
    assert_eq!(read_local(&ctx, ".env"), "feature-secret\n");
}

#[test]
fn restore_recreates_nested_directories() {
    let (_temp, ctx) = initialized_fixture();
    write_local(&ctx, "config/env/local.conf", "nested\n");
    ops::add(&ctx, &[PathBuf::from("config/env/local.conf")]).unwrap();

    fs::remove_dir_all(ctx.work_dir().join("config")).unwrap();
    let report = ops::restore(&ctx).unwrap();
    assert_eq!(report.restored, vec!["config/env/local.conf"]);
    assert_eq!(read_local(&ctx, "config/env/local.conf"), "nested\n");
}

#[test]
fn restore_falls_back_to_default_branch() {
    let (_temp, ctx) = initialized_fixture();
    write_local(&ctx, ".env", "main-secret\n");
    ops::add(&ctx, &[PathBuf::from(".env")]).unwrap();
    ops::save(&ctx, None).unwrap();

    // No shadow branch exists for the new primary branch yet.
    assert!(run_git(&["checkout", "-q", "-b", "topic"], ctx.work_dir()));
    fs::remove_file(ctx.work_dir().join(".env")).unwrap();

    let report = ops::restore(&ctx).unwrap();
    assert!(report.fallback);
    assert_eq!(report.branch.as_deref(), Some("main"));
    assert_eq!(read_local(&ctx, ".env"), "main-secret\n");
}

// =============================================================================
// sync
// =============================================================================

#[test]
fn sync_pulls_content_from_another_branch() {
    let (_temp, ctx) = initialized_fixture();
    write_local(&ctx, "shared.txt", "from-main\n");
    ops::add(&ctx, &[PathBuf::from("shared.txt")]).unwrap();

    assert!(run_git(&["checkout", "-q", "-b", "feature"], ctx.work_dir()));
    write_local(&ctx, "shared.txt", "feature-version\n");
    ops::save(&ctx, None).unwrap();

    let report = ops::sync(&ctx, "main").unwrap();
    assert_eq!(report.branch.as_deref(), Some("feature"));
    assert_eq!(read_local(&ctx, "shared.txt"), "from-main\n");

    let log = storage::log(ctx.storage_path(), None, 5).unwrap();
    assert!(log.contains("sync from main"));
}

// =============================================================================
// status
// =============================================================================

#[test]
fn status_covers_every_classification() {
    let (_temp, ctx) = initialized_fixture();

    // Craft the registry and both sides directly; status only compares
    // bytes, it never touches git history.
    let mut registry = ctx.registry().unwrap();
    for entry in ["missing.txt", "new.txt", "deleted.txt", "same.txt", "edited.txt"] {
        registry.add(entry);
    }
    registry.save().unwrap();

    write_local(&ctx, "new.txt", "n\n");
    write_local(&ctx, "same.txt", "s\n");
    write_local(&ctx, "edited.txt", "local\n");
    fs::write(ctx.storage_path().join("deleted.txt"), "d\n").unwrap();
    fs::write(ctx.storage_path().join("same.txt"), "s\n").unwrap();
    fs::write(ctx.storage_path().join("edited.txt"), "stored\n").unwrap();

    let report = ops::status(&ctx).unwrap();
    let by_path: Vec<(&str, FileStatus)> = report
        .iter()
        .map(|e| (e.path.as_str(), e.status))
        .collect();
    assert_eq!(
        by_path,
        vec![
            ("missing.txt", FileStatus::Missing),
            ("new.txt", FileStatus::New),
            ("deleted.txt", FileStatus::Deleted),
            ("same.txt", FileStatus::Unchanged),
            ("edited.txt", FileStatus::Modified),
        ]
    );
}

// =============================================================================
// checkout
// =============================================================================

#[test]
fn checkout_single_file_restores_historical_content() {
    let (_temp, ctx) = initialized_fixture();
    write_local(&ctx, "f.txt", "v1\n");
    ops::add(&ctx, &[PathBuf::from("f.txt")]).unwrap();
    write_local(&ctx, "f.txt", "v2\n");
    ops::save(&ctx, None).unwrap();

    let outcome = ops::checkout(&ctx, "main~1", Some("f.txt")).unwrap();
    match outcome {
        CheckoutOutcome::SingleFile { file, refname } => {
            assert_eq!(file, "f.txt");
            assert_eq!(refname, "main~1");
        }
        other => panic!("expected single-file checkout, got {other:?}"),
    }
    assert_eq!(read_local(&ctx, "f.txt"), "v1\n");

    // Neither the registry nor the storage branch pointer moved.
    assert!(ctx.registry().unwrap().contains("f.txt"));
    assert_eq!(
        storage::current_branch(ctx.storage_path()).unwrap(),
        Some("main".to_string())
    );
}

#[test]
fn checkout_full_detaches_and_restores_everything() {
    let (_temp, ctx) = initialized_fixture();
    write_local(&ctx, "f.txt", "v1\n");
    ops::add(&ctx, &[PathBuf::from("f.txt")]).unwrap();
    write_local(&ctx, "f.txt", "v2\n");
    ops::save(&ctx, None).unwrap();

    let outcome = ops::checkout(&ctx, "main~1", None).unwrap();
    match outcome {
        CheckoutOutcome::Full(report) => {
            assert_eq!(report.branch, None);
            assert_eq!(report.restored, vec!["f.txt"]);
        }
        other => panic!("expected full checkout, got {other:?}"),
    }
    assert_eq!(read_local(&ctx, "f.txt"), "v1\n");
}

// =============================================================================
// registry file tolerance
// =============================================================================

#[test]
fn registry_comments_survive_adds() {
    let (_temp, ctx) = initialized_fixture();

    let registry_file = ctx.storage_path().join(".shadowconfig");
    let mut content = fs::read_to_string(&registry_file).unwrap();
    content.push_str("# local notes\n\nnotes.txt\n");
    fs::write(&registry_file, &content).unwrap();
    fs::write(ctx.storage_path().join("notes.txt"), "kept\n").unwrap();

    write_local(&ctx, ".env", "SECRET=1\n");
    ops::add(&ctx, &[PathBuf::from(".env")]).unwrap();

    let rewritten = fs::read_to_string(&registry_file).unwrap();
    assert!(rewritten.contains("# local notes"));
    assert!(rewritten.contains("notes.txt"));
    assert!(rewritten.contains(".env"));

    let restored = ops::restore(&ctx).unwrap();
    assert!(restored.restored.contains(&"notes.txt".to_string()));
    assert_eq!(read_local(&ctx, "notes.txt"), "kept\n");
}
