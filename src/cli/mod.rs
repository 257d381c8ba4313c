// outbase: Build Output Relocation Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for outbase using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! outbase [global options] <command>
//! resolve [modules...] [--json]
//! clean [modules...] [--force]
//! check [--timeout SECS]
//! options
//! files
//! version
//! ```

pub mod check;
pub mod clean;
pub mod global;
pub mod resolve;

#[cfg(test)]
mod tests;

use crate::cli::check::CheckArgs;
use crate::cli::clean::CleanArgs;
use crate::cli::global::GlobalOptions;
use crate::cli::resolve::ResolveArgs;
use clap::{Parser, Subcommand};

/// Build Output Relocation Tool
///
/// Redirects a multi-module Android project's build output directories.
#[derive(Debug, Parser)]
#[command(
    name = "outbase",
    author,
    version,
    about = "Build Output Relocation Tool",
    long_about = "outbase Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Resolves a relocated build root for a multi-module Android\n\
                  project and owns the operations on it: `outbase resolve`\n\
                  prints every module's redirected output directory, `outbase\n\
                  clean` deletes the build root. See `outbase <command> --help`\n\
                  for more information about a command.",
    after_help = "CONFIG FILES:\n\n\
                  By default, outbase loads `outbase.toml` from the current\n\
                  directory when present. Additional files can be specified\n\
                  with --config; later files override earlier ones, and\n\
                  OUTBASE_* environment variables and --set override the\n\
                  files. Use --no-default-config to disable auto detection\n\
                  and only use --config."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values from the config files.
    Options,

    /// Lists the config files used by outbase.
    Files,

    /// Resolves and prints the build layout.
    Resolve(ResolveArgs),

    /// Deletes the resolved build root (or selected module outputs).
    Clean(CleanArgs),

    /// Probes the declared artifact repositories and prints plugin pins.
    Check(CheckArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
