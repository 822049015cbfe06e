// git-shadow: per-branch shadow storage for untracked files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Settings --> Logging --> Command Dispatch
//!   Init | Add | Remove | Save | Restore | Status | Ls | Diff
//!   Log | Sync | Checkout | Push | Pull | Remote | Gc | Hooks
//! ```

use std::process::ExitCode;

use git_shadow::cli::global::GlobalOptions;
use git_shadow::cli::{self, Command};
use git_shadow::cmd::config::run_options_command;
use git_shadow::cmd::hooks::{run_install_hooks_command, run_uninstall_hooks_command};
use git_shadow::cmd::init::run_init_command;
use git_shadow::cmd::remote::{
    run_gc_command, run_pull_command, run_push_command, run_remote_command,
};
use git_shadow::cmd::snapshot::{
    run_checkout_command, run_diff_command, run_log_command, run_restore_command, run_save_command,
    run_status_command, run_sync_command,
};
use git_shadow::cmd::track::{run_add_command, run_ls_command, run_remove_command};
use git_shadow::config::Settings;
use git_shadow::logging::{LogConfig, LogLevel, init_logging};
use git_shadow::shadow::ShadowContext;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let settings = match load_settings(&cli.global) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = build_log_config(&cli.global, &settings);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, settings)
}

fn load_settings(global: &GlobalOptions) -> git_shadow::error::Result<Settings> {
    let mut loader = Settings::builder().add_default_files();
    for config_path in &global.configs {
        loader = loader.add_toml_file(config_path);
    }
    let mut settings = loader.build()?;

    // CLI flags beat every other layer, including GIT_SHADOW_DIR.
    if let Some(root) = &global.storage_root {
        settings.storage_root = Some(root.clone());
    }
    if let Some(level) = global.log_level.and_then(LogLevel::from_u8) {
        settings.log_level = level;
    }
    if let Some(file) = &global.log_file {
        settings.log_file = Some(file.clone());
    }
    Ok(settings)
}

fn build_log_config(global: &GlobalOptions, settings: &Settings) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(settings.log_level);

    LogConfig::builder()
        .with_console_level(console_level)
        .maybe_with_log_file(settings.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

fn dispatch_command(cli: &cli::Cli, settings: Settings) -> ExitCode {
    let result = resolve_context(settings).and_then(|ctx| match &cli.command {
        Command::Init => run_init_command(&ctx),
        Command::Add(args) => run_add_command(args, &ctx),
        Command::Remove(args) => run_remove_command(args, &ctx),
        Command::Save(args) => run_save_command(args, &ctx),
        Command::Restore => run_restore_command(&ctx),
        Command::Status(args) => run_status_command(args, &ctx),
        Command::Ls(args) => run_ls_command(args, &ctx),
        Command::Diff(args) => run_diff_command(args, &ctx),
        Command::Log(args) => run_log_command(args, &ctx),
        Command::Sync(args) => run_sync_command(args, &ctx),
        Command::Checkout(args) => run_checkout_command(args, &ctx),
        Command::Push(args) => run_push_command(args, &ctx),
        Command::Pull(args) => run_pull_command(args, &ctx),
        Command::Remote(args) => run_remote_command(args, &ctx),
        Command::Gc => run_gc_command(&ctx),
        Command::InstallHooks => run_install_hooks_command(&ctx),
        Command::UninstallHooks => run_uninstall_hooks_command(&ctx),
        Command::Options => run_options_command(&ctx),
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn resolve_context(settings: Settings) -> git_shadow::error::Result<ShadowContext> {
    let work_dir = std::env::current_dir()?;
    ShadowContext::resolve(settings, work_dir)
}
