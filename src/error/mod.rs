// outbase: Build Output Relocation Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            OutbaseError (~24 bytes)
//!                   |
//!   +--------+------+------+--------+
//!   |    |   |      |      |      | |
//!   v    v   v      v      v      v v
//! Bail  Cfg Layout  Fs    Net  Io/Other
//!       Box  Box    Box   Box  Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Config  ReadError, ParseError, MissingKey, InvalidValue,
//!           DuplicatePlugin, VersionConflict, UnknownRepository
//!   Layout  RelativeProjectDir, EmptyBasePath, InvalidModuleName,
//!           DuplicateModule, UnknownPrimary
//!   Fs      NotFound, PermissionDenied, IoError
//!   Network Reqwest, HttpError, Timeout, InvalidUrl
//!
//! All variants boxed => OutbaseError fits in 24 bytes.
//! ```

use thiserror::Error;

/// Crate-wide result alias; call sites chain context with `anyhow::Context`.
pub type Result<T> = anyhow::Result<T>;

/// Result carrying the typed [`OutbaseError`].
pub type OutbaseResult<T> = std::result::Result<T, OutbaseError>;

/// Top-level error type.
///
/// Every payload is boxed so the enum stays at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum OutbaseError {
    /// Fatal condition, terminates the invocation.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Layout resolution error.
    #[error("layout error: {0}")]
    Layout(#[from] Box<LayoutError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// Network operation failed.
    #[error("network error: {0}")]
    Network(#[from] Box<NetworkError>),

    /// Raw I/O error without further classification.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Freeform message.
    #[error("{0}")]
    Other(Box<str>),
}

/// Builds a fatal [`OutbaseError::Bailed`].
pub fn bail_out(message: impl Into<String>) -> OutbaseError {
    OutbaseError::Bailed(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Generates `From` impls that box the source error into a variant.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for OutbaseError {
                fn from(err: $error) -> Self {
                    OutbaseError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    LayoutError => Layout,
    FsError => Fs,
    NetworkError => Network,
    std::io::Error => Io,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Configuration file not found.
    #[error("config file not found: {0}")]
    NotFound(String),

    /// The same plugin id was pinned twice with the same version.
    #[error("plugin '{id}' is declared more than once")]
    DuplicatePlugin { id: String },

    /// The same plugin id was pinned with two different versions.
    #[error("version conflict for plugin '{id}': '{first}' vs '{second}'")]
    VersionConflict {
        id: String,
        first: String,
        second: String,
    },

    /// Repository name is not one of the well-known repositories.
    #[error("unknown repository '{0}' (expected 'google' or 'maven-central')")]
    UnknownRepository(String),
}

// --- Layout Errors ---

/// Build layout resolution errors.
///
/// All of these are configuration errors from the user's point of view:
/// resolution is purely lexical, so nothing here touches the filesystem.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// The project directory handed to the resolver was not absolute.
    #[error("project directory must be absolute: {path}")]
    RelativeProjectDir { path: String },

    /// The relocated base path is empty.
    #[error("layout base path is empty")]
    EmptyBasePath,

    /// Module name contains separators, `..`, or other invalid characters.
    #[error("invalid module name '{name}': must be a single plain path component")]
    InvalidModuleName { name: String },

    /// The same module was declared twice.
    #[error("duplicate module '{name}'")]
    DuplicateModule { name: String },

    /// The primary module is not among the declared modules.
    #[error("primary module '{name}' is not a declared module")]
    UnknownPrimary { name: String },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("path not found: {0}")]
    NotFound(String),

    /// Permission denied.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Network Errors ---

/// Network operation errors.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Error from reqwest library.
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Server answered with a 5xx status.
    #[error("http error {status}: {url}")]
    HttpError { status: u16, url: String },

    /// Connection timeout.
    #[error("connection timeout: {url}")]
    Timeout { url: String },

    /// Invalid URL.
    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

#[cfg(test)]
mod tests;
