// outbase: Build Output Relocation Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Resolve command implementation for outbase.

use crate::cli::resolve::ResolveArgs;
use crate::config::Config;
use crate::error::Result;
use crate::layout::BuildLayout;

/// Main handler for resolve command.
///
/// # Errors
///
/// Returns an error if layout resolution fails or a module pattern is
/// not a valid glob.
pub fn run_resolve_command(args: &ResolveArgs, config: &Config) -> Result<()> {
    let layout = BuildLayout::from_config(config)?;
    let selected = layout.select(&args.modules)?;

    if args.json {
        let modules: Vec<_> = selected
            .iter()
            .map(|m| {
                serde_json::json!({
                    "name": m.name(),
                    "output": m.output(),
                })
            })
            .collect();
        let doc = serde_json::json!({
            "project": layout.project_name(),
            "project_dir": layout.project_dir(),
            "root_output": layout.root_output(),
            "modules": modules,
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    println!("project:    {}", layout.project_name());
    println!("directory:  {}", layout.project_dir().display());
    println!("build root: {}", layout.root_output().display());

    if selected.is_empty() {
        println!("no modules");
    } else {
        let max_name_len = selected.iter().map(|m| m.name().len()).max().unwrap_or(0);
        for module in selected {
            println!(
                "  {:<max_name_len$}  {}",
                module.name(),
                module.output().display()
            );
        }
    }

    Ok(())
}
