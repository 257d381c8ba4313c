// outbase: Build Output Relocation Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Check command implementation for outbase.

use std::time::Duration;

use crate::cli::check::CheckArgs;
use crate::config::Config;
use crate::error::Result;
use crate::net;

/// Main handler for check command.
///
/// Probes every declared repository and prints the pinned plugin table.
/// Any unavailable repository fails the command.
///
/// # Errors
///
/// Returns an error if endpoint resolution fails or any repository is
/// unavailable.
pub async fn run_check_command(args: &CheckArgs, config: &Config) -> Result<()> {
    let timeout = Duration::from_secs(
        args.timeout_secs
            .unwrap_or(config.repositories.timeout_secs),
    );
    let repos = net::endpoints(&config.repositories)?;

    let mut failures = 0usize;
    for repo in &repos {
        match net::probe_repository(repo, timeout).await {
            Ok(status) => {
                println!("{}: ok ({status})", repo.name());
            }
            Err(e) => {
                println!("{}: unavailable ({e})", repo.name());
                failures += 1;
            }
        }
    }

    println!();
    println!("plugins:");
    for pin in &config.plugins {
        println!(
            "  {} {} (apply {})",
            pin.id,
            pin.version,
            if pin.apply { "true" } else { "false" }
        );
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} repositories unavailable", repos.len());
    }
    Ok(())
}
