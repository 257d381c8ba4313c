// outbase: Build Output Relocation Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Resolve command arguments.

use clap::Args;

/// Arguments for the `resolve` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ResolveArgs {
    /// Prints the layout as JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Modules to show. Globs like 'feature_*' are supported.
    /// Shows all modules when omitted.
    #[arg(value_name = "MODULE")]
    pub modules: Vec<String>,
}
