// outbase: Build Output Relocation Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::{Cli, Command};
use clap::Parser;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["outbase", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_global_options() {
    let cli =
        Cli::try_parse_from(["outbase", "-l", "5", "-b", "../out", "--dry", "resolve"]).unwrap();
    assert_eq!(cli.global.log_level, Some(5));
    assert_eq!(cli.global.base.as_deref(), Some(std::path::Path::new("../out")));
    assert!(cli.global.dry);
    assert!(matches!(cli.command, Some(Command::Resolve(_))));
}

#[test]
fn test_parse_clean_modules() {
    let cli = Cli::try_parse_from(["outbase", "clean", "-f", "app", "feature_*"]).unwrap();
    let Some(Command::Clean(args)) = cli.command else {
        panic!("expected clean command");
    };
    assert!(args.force);
    assert_eq!(args.modules, ["app", "feature_*"]);
}

#[test]
fn test_parse_check_timeout() {
    let cli = Cli::try_parse_from(["outbase", "check", "--timeout", "3"]).unwrap();
    let Some(Command::Check(args)) = cli.command else {
        panic!("expected check command");
    };
    assert_eq!(args.timeout_secs, Some(3));
}

#[test]
fn test_global_options_to_overrides() {
    let cli = Cli::try_parse_from(["outbase", "--dry", "-l", "4", "options"]).unwrap();
    let overrides = cli.global.to_config_overrides();
    assert!(overrides.contains(&"global/dry=true".to_string()));
    assert!(overrides.contains(&"global/output_log_level=4".to_string()));
    // file level falls back to the console level
    assert!(overrides.contains(&"global/file_log_level=4".to_string()));
}

#[test]
fn test_log_level_out_of_range_rejected() {
    assert!(Cli::try_parse_from(["outbase", "-l", "7", "resolve"]).is_err());
}
