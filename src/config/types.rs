// outbase: Build Output Relocation Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for outbase.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, ProjectConfig, LayoutConfig,
//!         Vec<PluginPin>, RepositoriesConfig
//! ```
//!
//! Defaults mirror a stock Android root project: modules `["app"]`,
//! build root `../../build`, google + maven-central repositories, and
//! the usual application/library/kotlin plugin trio.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Simulate filesystem operations without making changes.
    pub dry: bool,
    /// Log level for stdout output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file.
    pub log_file: PathBuf,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            dry: false,
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: PathBuf::from("outbase.log"),
        }
    }
}

/// Root project description.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Project name. Empty means "derive from the project directory's basename".
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Project directory, absolutized against the current directory when relative.
    pub dir: PathBuf,
    /// Declared modules (subprojects).
    pub modules: Vec<String>,
    /// The module every other module's configuration depends on.
    /// Resolved first. Empty means "no primary".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            dir: PathBuf::from("."),
            modules: vec!["app".to_string()],
            primary: None,
        }
    }
}

impl ProjectConfig {
    /// Returns the effective primary module.
    ///
    /// An explicit `primary` wins (empty string disables it). When unset,
    /// `app` is the primary if and only if it is a declared module.
    #[must_use]
    pub fn effective_primary(&self) -> Option<&str> {
        match &self.primary {
            Some(p) if p.is_empty() => None,
            Some(p) => Some(p.as_str()),
            None => self
                .modules
                .iter()
                .find(|m| m.as_str() == "app")
                .map(String::as_str),
        }
    }
}

/// Output directory relocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Relocated build root, resolved relative to the project directory
    /// when relative.
    pub base: PathBuf,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            base: PathBuf::from("../../build"),
        }
    }
}

/// A pinned build-tool plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PluginPin {
    /// Plugin identifier, e.g. `com.android.application`.
    pub id: String,
    /// Pinned semantic version string.
    pub version: String,
    /// Whether the plugin is applied to the root project itself.
    #[serde(default)]
    pub apply: bool,
}

impl PluginPin {
    /// Creates a pin with `apply = false`.
    #[must_use]
    pub fn new(id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version: version.into(),
            apply: false,
        }
    }
}

/// The stock plugin trio of an Android root project.
#[must_use]
pub fn default_plugins() -> Vec<PluginPin> {
    vec![
        PluginPin::new("com.android.application", "8.11.1"),
        PluginPin::new("com.android.library", "8.11.1"),
        PluginPin::new("org.jetbrains.kotlin.android", "1.9.0"),
    ]
}

/// Artifact repository declarations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RepositoriesConfig {
    /// Well-known repository names to consult.
    #[serde(rename = "use")]
    pub use_repos: Vec<String>,
    /// Additional repository URLs, used verbatim.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub custom: Vec<String>,
    /// Reachability probe timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for RepositoriesConfig {
    fn default() -> Self {
        Self {
            use_repos: vec!["google".to_string(), "maven-central".to_string()],
            custom: Vec::new(),
            timeout_secs: 10,
        }
    }
}
