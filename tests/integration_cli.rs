// outbase: Build Output Relocation Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use clap::Parser;
use outbase::cli::{Cli, Command};

// =============================================================================
// Version Command
// =============================================================================

#[test]
fn cli_version_command() {
    let cli = Cli::try_parse_from(["outbase", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_version_alias() {
    let cli = Cli::try_parse_from(["outbase", "-v"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

// =============================================================================
// Resolve Command
// =============================================================================

#[test]
fn cli_resolve_no_args() {
    let cli = Cli::try_parse_from(["outbase", "resolve"]).unwrap();
    let Some(Command::Resolve(args)) = cli.command else {
        panic!("expected resolve command");
    };
    assert!(args.modules.is_empty());
    assert!(!args.json);
}

#[test]
fn cli_resolve_with_modules_and_json() {
    let cli = Cli::try_parse_from(["outbase", "resolve", "--json", "app", "feature_*"]).unwrap();
    let Some(Command::Resolve(args)) = cli.command else {
        panic!("expected resolve command");
    };
    assert!(args.json);
    assert_eq!(args.modules, ["app", "feature_*"]);
}

// =============================================================================
// Clean Command
// =============================================================================

#[test]
fn cli_clean_no_args() {
    let cli = Cli::try_parse_from(["outbase", "clean"]).unwrap();
    let Some(Command::Clean(args)) = cli.command else {
        panic!("expected clean command");
    };
    assert!(args.modules.is_empty());
    assert!(!args.force);
}

#[test]
fn cli_clean_force_and_patterns() {
    let cli = Cli::try_parse_from(["outbase", "clean", "--force", "feature_*"]).unwrap();
    let Some(Command::Clean(args)) = cli.command else {
        panic!("expected clean command");
    };
    assert!(args.force);
    assert_eq!(args.modules, ["feature_*"]);
}

// =============================================================================
// Check Command
// =============================================================================

#[test]
fn cli_check_default_timeout() {
    let cli = Cli::try_parse_from(["outbase", "check"]).unwrap();
    let Some(Command::Check(args)) = cli.command else {
        panic!("expected check command");
    };
    assert_eq!(args.timeout_secs, None);
}

#[test]
fn cli_check_custom_timeout() {
    let cli = Cli::try_parse_from(["outbase", "check", "-t", "30"]).unwrap();
    let Some(Command::Check(args)) = cli.command else {
        panic!("expected check command");
    };
    assert_eq!(args.timeout_secs, Some(30));
}

// =============================================================================
// Global Options
// =============================================================================

#[test]
fn cli_global_options_base() {
    let cli = Cli::try_parse_from(["outbase", "-b", "../../build", "resolve"]).unwrap();
    assert_eq!(
        cli.global.base.as_deref(),
        Some(std::path::Path::new("../../build"))
    );
}

#[test]
fn cli_global_options_log_levels() {
    let cli = Cli::try_parse_from(["outbase", "-l", "5", "--file-log-level", "3", "resolve"])
        .unwrap();
    assert_eq!(cli.global.log_level, Some(5));
    assert_eq!(cli.global.file_log_level, Some(3));
}

#[test]
fn cli_global_options_dry_run() {
    let cli = Cli::try_parse_from(["outbase", "--dry", "clean"]).unwrap();
    assert!(cli.global.dry);
}

#[test]
fn cli_global_options_multiple_configs() {
    let cli = Cli::try_parse_from([
        "outbase",
        "-c",
        "base.toml",
        "-c",
        "override.toml",
        "options",
    ])
    .unwrap();
    assert_eq!(cli.global.configs.len(), 2);
}

#[test]
fn cli_global_options_set_options() {
    let cli = Cli::try_parse_from([
        "outbase",
        "-s",
        "layout/base=../out",
        "-s",
        "global/dry=true",
        "resolve",
    ])
    .unwrap();
    assert_eq!(cli.global.options.len(), 2);

    let overrides = cli.global.to_config_overrides();
    assert!(overrides.contains(&"layout/base=../out".to_string()));
    assert!(overrides.contains(&"global/dry=true".to_string()));
}

#[test]
fn cli_no_default_config_flag() {
    let cli = Cli::try_parse_from(["outbase", "--no-default-config", "files"]).unwrap();
    assert!(cli.global.no_default_config);
}

#[test]
fn cli_rejects_out_of_range_log_level() {
    assert!(Cli::try_parse_from(["outbase", "--log-level", "9", "resolve"]).is_err());
}

#[test]
fn cli_rejects_unknown_command() {
    assert!(Cli::try_parse_from(["outbase", "teleport"]).is_err());
}
