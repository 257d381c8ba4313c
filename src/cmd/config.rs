// outbase: Build Output Relocation Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The `options` and `files` reporting commands.

use crate::config::Config;

/// Prints every effective option as `key = value`, one per line.
pub fn run_options_command(config: &Config) {
    for line in config.format_options() {
        println!("{line}");
    }
}

/// Prints the configuration sources that went into the merge.
pub fn run_files_command(sources: &[String]) {
    if sources.is_empty() {
        println!("No configuration files loaded");
        return;
    }
    for line in sources {
        println!("{line}");
    }
}
