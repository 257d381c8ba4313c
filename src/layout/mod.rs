// outbase: Build Output Relocation Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build directory resolution.
//!
//! ```text
//! project_dir (absolute)      base ("../../build")
//!          \                   /
//!           v                 v
//!    root_output = normalize(project_dir / base)
//!            |
//!            +---> module "app"        root_output/app
//!            +---> module "feature_x"  root_output/feature_x
//!
//! Primary module first, then declared order.
//! Purely lexical: nothing here touches the filesystem.
//! ```

use regex::Regex;
use serde::Serialize;
use std::path::{Component, Path, PathBuf};
use std::sync::OnceLock;

use crate::config::Config;
use crate::error::{LayoutError, Result};


/// Module names must be single normal path components: no separators,
/// no `..`, no leading dot. This is what makes `join` unable to escape
/// the build root.
fn module_name_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9_][A-Za-z0-9_.\-]*$").unwrap_or_else(|_| unreachable!())
    })
}

/// Checks whether `name` is usable as a module name.
#[must_use]
pub fn is_valid_module_name(name: &str) -> bool {
    module_name_pattern().is_match(name) && !name.contains("..")
}

/// Lexically normalizes a path: `.` components are removed and `..`
/// components fold the preceding normal component.
///
/// No filesystem access happens, so the path does not have to exist.
/// `..` at the root of an absolute path stays at the root, matching how
/// build tools resolve relative directory redirections.
#[must_use]
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }

    out
}

/// A module's resolved output directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleOutput {
    name: String,
    output: PathBuf,
}

impl ModuleOutput {
    /// Returns the module name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the module's output directory.
    #[must_use]
    pub fn output(&self) -> &Path {
        &self.output
    }
}

/// The resolved build layout for a root project and its modules.
///
/// Computed once at configuration time and immutable thereafter. Every
/// module's output directory is a child of [`BuildLayout::root_output`],
/// named after the module.
#[derive(Debug, Clone, Serialize)]
pub struct BuildLayout {
    project_name: String,
    project_dir: PathBuf,
    root_output: PathBuf,
    modules: Vec<ModuleOutput>,
}

impl BuildLayout {
    /// Resolves the layout for a project.
    ///
    /// `project_dir` must be absolute; callers absolutize against the
    /// current directory before getting here. `base` is resolved relative
    /// to `project_dir` when relative, then lexically normalized. The
    /// primary module (when given) is ordered first.
    ///
    /// # Errors
    ///
    /// Returns a [`LayoutError`] for a relative project directory, an empty
    /// base path, an invalid or duplicate module name, or a primary module
    /// that is not among the declared modules.
    pub fn resolve(
        project_name: &str,
        project_dir: &Path,
        base: &Path,
        modules: &[String],
        primary: Option<&str>,
    ) -> std::result::Result<Self, LayoutError> {
        if project_dir.is_relative() {
            return Err(LayoutError::RelativeProjectDir {
                path: project_dir.display().to_string(),
            });
        }
        if base.as_os_str().is_empty() {
            return Err(LayoutError::EmptyBasePath);
        }

        for name in modules {
            if !is_valid_module_name(name) {
                return Err(LayoutError::InvalidModuleName { name: name.clone() });
            }
        }
        if let Some(dup) = first_duplicate(modules) {
            return Err(LayoutError::DuplicateModule {
                name: dup.to_string(),
            });
        }
        if let Some(primary) = primary
            && !modules.iter().any(|m| m == primary)
        {
            return Err(LayoutError::UnknownPrimary {
                name: primary.to_string(),
            });
        }

        let root_output = if base.is_absolute() {
            normalize_lexically(base)
        } else {
            normalize_lexically(&project_dir.join(base))
        };

        let ordered = order_modules(modules, primary);
        let modules = ordered
            .into_iter()
            .map(|name| ModuleOutput {
                output: root_output.join(&name),
                name,
            })
            .collect();

        Ok(Self {
            project_name: project_name.to_string(),
            project_dir: normalize_lexically(project_dir),
            root_output,
            modules,
        })
    }

    /// Resolves the layout from the loaded configuration.
    ///
    /// Absolutizes the project directory against the current directory and
    /// derives the project name from the directory basename when unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined or if
    /// layout resolution fails.
    pub fn from_config(config: &Config) -> Result<Self> {
        let project_dir = if config.project.dir.is_absolute() {
            config.project.dir.clone()
        } else {
            std::env::current_dir()?.join(&config.project.dir)
        };
        let project_dir = normalize_lexically(&project_dir);

        let name = if config.project.name.is_empty() {
            project_dir
                .file_name()
                .map_or_else(|| "root".to_string(), |n| n.to_string_lossy().into_owned())
        } else {
            config.project.name.clone()
        };

        let layout = Self::resolve(
            &name,
            &project_dir,
            &config.layout.base,
            &config.project.modules,
            config.project.effective_primary(),
        )?;
        Ok(layout)
    }

    /// Returns the root project name.
    #[must_use]
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Returns the absolute project directory.
    #[must_use]
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Returns the relocated build root.
    #[must_use]
    pub fn root_output(&self) -> &Path {
        &self.root_output
    }

    /// Returns the resolved modules, primary first.
    #[must_use]
    pub fn modules(&self) -> &[ModuleOutput] {
        &self.modules
    }

    /// Looks up a module's output directory by name.
    #[must_use]
    pub fn output(&self, name: &str) -> Option<&Path> {
        self.modules
            .iter()
            .find(|m| m.name == name)
            .map(ModuleOutput::output)
    }

    /// Selects modules by glob patterns, preserving layout order.
    ///
    /// An empty pattern list selects every module. A pattern that matches
    /// nothing produces a warning, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern is not a valid glob.
    pub fn select(&self, patterns: &[String]) -> Result<Vec<&ModuleOutput>> {
        use wax::Program as _;

        if patterns.is_empty() {
            return Ok(self.modules.iter().collect());
        }

        let mut globs = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            let glob = wax::Glob::new(pattern)
                .map_err(|e| anyhow::anyhow!("invalid module pattern '{pattern}': {e}"))?;
            globs.push((pattern, glob, false));
        }

        let mut selected: Vec<&ModuleOutput> = Vec::new();
        for module in &self.modules {
            let mut wanted = false;
            for (pattern, glob, matched) in &mut globs {
                if module.name == **pattern || glob.is_match(module.name.as_str()) {
                    wanted = true;
                    *matched = true;
                }
            }
            if wanted {
                selected.push(module);
            }
        }

        for (pattern, _, matched) in &globs {
            if !matched {
                tracing::warn!(pattern = %pattern, "no module matches pattern");
            }
        }

        Ok(selected)
    }
}

fn first_duplicate(modules: &[String]) -> Option<&str> {
    let mut seen = std::collections::BTreeSet::new();
    modules
        .iter()
        .find(|name| !seen.insert(name.as_str()))
        .map(String::as_str)
}

/// Primary module first, then declared order.
fn order_modules(modules: &[String], primary: Option<&str>) -> Vec<String> {
    let Some(primary) = primary else {
        return modules.to_vec();
    };

    std::iter::once(primary.to_string())
        .chain(modules.iter().filter(|m| *m != primary).cloned())
        .collect()
}
