// outbase: Build Output Relocation Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Clean command arguments.
//!
//! ```text
//! clean              deletes the whole build root
//! clean feature_*    deletes matching module outputs only
//! --force            deletes even VCS-controlled targets
//! ```

use clap::Args;

/// Arguments for the `clean` command.
#[derive(Debug, Clone, Default, Args)]
pub struct CleanArgs {
    /// Deletes targets even if they contain version-control metadata.
    #[arg(short = 'f', long)]
    pub force: bool,

    /// Modules whose output directories to delete. Globs like
    /// 'feature_*' are supported. Deletes the whole build root when omitted.
    #[arg(value_name = "MODULE")]
    pub modules: Vec<String>,
}
