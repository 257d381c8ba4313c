// outbase: Build Output Relocation Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for outbase.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. outbase.toml (cwd)
//! 3. --config FILE(s)
//! 4. OUTBASE_* env vars
//! 5. --set / CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! OUTBASE_GLOBAL_DRY=true       → global.dry = true
//! OUTBASE_LAYOUT_BASE=../out    → layout.base = "../out"
//! OUTBASE_PROJECT_NAME=myapp    → project.name = "myapp"
//! ```

pub mod loader;
pub mod types;


use semver::Version;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ConfigError, Result};
use crate::net;

use loader::ConfigLoader;
use types::{GlobalConfig, LayoutConfig, PluginPin, ProjectConfig, RepositoriesConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Root project description.
    pub project: ProjectConfig,
    /// Output directory relocation.
    pub layout: LayoutConfig,
    /// Pinned build-tool plugins.
    pub plugins: Vec<PluginPin>,
    /// Artifact repositories.
    pub repositories: RepositoriesConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            global: GlobalConfig::default(),
            project: ProjectConfig::default(),
            layout: LayoutConfig::default(),
            plugins: types::default_plugins(),
            repositories: RepositoriesConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use outbase::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("outbase.toml")
    ///     .with_env_prefix("OUTBASE")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file (simple API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Validates the declarative parts of the configuration.
    ///
    /// Runs at load time, before any command: a bad pin or repository is
    /// fatal to the whole invocation, matching the configuration-phase
    /// abort semantics of the build tool this mirrors.
    ///
    /// # Errors
    ///
    /// Returns an error for duplicate or conflicting plugin pins, a version
    /// string that is not a semantic version, an unknown well-known
    /// repository name, or a custom repository URL without an http(s) scheme.
    pub fn validate(&self) -> Result<()> {
        self.validate_plugins()?;
        self.validate_repositories()?;
        Ok(())
    }

    fn validate_plugins(&self) -> Result<()> {
        let mut seen: BTreeMap<&str, &str> = BTreeMap::new();

        for pin in &self.plugins {
            Version::parse(&pin.version).map_err(|e| ConfigError::InvalidValue {
                section: "plugins".to_string(),
                key: pin.id.clone(),
                message: format!("'{}' is not a semantic version: {e}", pin.version),
            })?;

            if let Some(first) = seen.insert(&pin.id, &pin.version) {
                let err = if first == pin.version {
                    ConfigError::DuplicatePlugin { id: pin.id.clone() }
                } else {
                    ConfigError::VersionConflict {
                        id: pin.id.clone(),
                        first: first.to_string(),
                        second: pin.version.clone(),
                    }
                };
                return Err(err.into());
            }
        }
        Ok(())
    }

    fn validate_repositories(&self) -> Result<()> {
        for name in &self.repositories.use_repos {
            if net::well_known_url(name).is_none() {
                return Err(ConfigError::UnknownRepository(name.clone()).into());
            }
        }
        for url in &self.repositories.custom {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::InvalidValue {
                    section: "repositories".to_string(),
                    key: "custom".to_string(),
                    message: format!("'{url}' is not an http(s) URL"),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Looks up a plugin pin by id.
    #[must_use]
    pub fn plugin(&self, id: &str) -> Option<&PluginPin> {
        self.plugins.iter().find(|p| p.id == id)
    }

    /// Format configuration options for display.
    ///
    /// Returns a vector of formatted strings representing all configuration
    /// options. Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_project_options(&mut options);
        self.format_layout_options(&mut options);
        self.format_plugin_options(&mut options);
        self.format_repository_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("global.dry".into(), self.global.dry.to_string());
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global.log_file.display().to_string(),
        );
    }

    fn format_project_options(&self, options: &mut BTreeMap<String, String>) {
        if !self.project.name.is_empty() {
            options.insert("project.name".into(), self.project.name.clone());
        }
        options.insert("project.dir".into(), self.project.dir.display().to_string());
        options.insert("project.modules".into(), self.project.modules.join(", "));
        if let Some(primary) = self.project.effective_primary() {
            options.insert("project.primary".into(), primary.to_string());
        }
    }

    fn format_layout_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("layout.base".into(), self.layout.base.display().to_string());
    }

    fn format_plugin_options(&self, options: &mut BTreeMap<String, String>) {
        for pin in &self.plugins {
            options.insert(format!("plugins.{}.version", pin.id), pin.version.clone());
            options.insert(format!("plugins.{}.apply", pin.id), pin.apply.to_string());
        }
    }

    fn format_repository_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "repositories.use".into(),
            self.repositories.use_repos.join(", "),
        );
        if !self.repositories.custom.is_empty() {
            options.insert(
                "repositories.custom".into(),
                self.repositories.custom.join(", "),
            );
        }
        options.insert(
            "repositories.timeout_secs".into(),
            self.repositories.timeout_secs.to_string(),
        );
    }
}
