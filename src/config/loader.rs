// outbase: Build Output Relocation Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file(req)
//!   .add_toml_file_optional(opt)
//!   .add_toml_str()
//!   .with_env_prefix()
//!   .apply_overrides()
//!        |
//!        v
//!    build() --> validated Config
//! ```

use config::{Environment, File, FileFormat};
use std::fmt;
use std::path::{Path, PathBuf};

use super::Config;
use crate::error::Result;

/// How a configuration source got into the loader, for `outbase files`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Required file, `build()` fails when it is missing.
    File,
    /// Optional file that was present at load time.
    Optional,
    /// Inline TOML string.
    Inline,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Optional => write!(f, "optional"),
            Self::Inline => write!(f, "string"),
        }
    }
}

/// Builder that layers TOML files, environment variables, and explicit
/// overrides into a validated [`Config`]. Later sources win.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
    files: Vec<(SourceKind, PathBuf)>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            files: Vec::new(),
        }
    }

    /// Adds a TOML file that must exist when `build()` runs.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(true));
        self.files.push((SourceKind::File, p.to_path_buf()));
        self
    }

    /// Adds a TOML file that is silently skipped when absent.
    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(mut self, path: P) -> Self {
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(false));
        if p.exists() {
            self.files.push((SourceKind::Optional, p.to_path_buf()));
        }
        self
    }

    /// Adds inline TOML content.
    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.files
            .push((SourceKind::Inline, PathBuf::from("<string>")));
        self
    }

    /// Layers `PREFIX_SECTION_KEY` environment variables on top of the
    /// files.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Sets a single override by dotted key. Overrides beat every file
    /// and environment source.
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid key.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(|e| anyhow::anyhow!("Config error: {e}"))?;
        Ok(self)
    }

    /// Applies `section/key=value` override strings, as produced by the CLI.
    ///
    /// # Errors
    ///
    /// Returns an error if an override string has no `=` or an invalid key.
    pub fn apply_overrides(mut self, overrides: &[String]) -> Result<Self> {
        for option in overrides {
            let (key, value) = option
                .split_once('=')
                .ok_or_else(|| anyhow::anyhow!("invalid override '{option}', expected key=value"))?;
            let key = key.replace('/', ".");
            self = self.set(&key, value)?;
        }
        Ok(self)
    }

    /// Merges every source, deserializes, and validates.
    ///
    /// # Errors
    ///
    /// Returns an error when a required file is missing or unreadable,
    /// the merged tree does not deserialize into [`Config`], or
    /// validation rejects a plugin pin or repository.
    pub fn build(self) -> Result<Config> {
        let builder = match &self.env_prefix {
            Some(prefix) => self.builder.add_source(
                Environment::with_prefix(prefix)
                    .separator("_")
                    .try_parsing(true),
            ),
            None => self.builder,
        };
        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// The file sources registered so far, in layering order.
    #[must_use]
    pub fn loaded_files(&self) -> &[(SourceKind, PathBuf)] {
        &self.files
    }

    /// Human-readable source list for `outbase files`.
    #[must_use]
    pub fn format_loaded_files(&self) -> Vec<String> {
        self.files
            .iter()
            .enumerate()
            .map(|(i, (kind, path))| format!("{}. [{}] {}", i + 1, kind, path.display()))
            .collect()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
