// outbase: Build Output Relocation Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Clean command implementation for outbase.

use crate::clean::{CleanOptions, CleanTarget, clean_targets};
use crate::cli::clean::CleanArgs;
use crate::config::Config;
use crate::error::Result;
use crate::layout::BuildLayout;
use tokio_util::sync::CancellationToken;

/// Main handler for clean command.
///
/// Without module patterns the whole build root is deleted; with patterns,
/// only the matching modules' output directories.
///
/// # Errors
///
/// Returns an error if layout resolution fails or the clean run fails.
pub async fn run_clean_command(args: &CleanArgs, config: &Config, dry_run: bool) -> Result<()> {
    let layout = BuildLayout::from_config(config)?;

    let targets: Vec<CleanTarget> = if args.modules.is_empty() {
        vec![CleanTarget::new(
            layout.project_name(),
            layout.root_output(),
        )]
    } else {
        layout
            .select(&args.modules)?
            .into_iter()
            .map(|m| CleanTarget::new(m.name(), m.output()))
            .collect()
    };

    let options = CleanOptions::builder()
        .with_dry(dry_run || config.global.dry)
        .with_force(args.force)
        .build();

    let cancel = CancellationToken::new();
    let signal_token = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Received Ctrl+C, interrupting clean...");
            signal_token.cancel();
        }
    });

    let report = clean_targets(&targets, layout.project_dir(), &options, &cancel).await?;

    if options.dry() {
        tracing::info!(
            files = report.files(),
            bytes = report.bytes(),
            "dry run complete, nothing deleted"
        );
    } else {
        tracing::info!(
            removed = report.removed(),
            skipped = report.skipped(),
            files = report.files(),
            bytes = report.bytes(),
            "clean complete"
        );
    }

    Ok(())
}
