// outbase: Build Output Relocation Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Network module with async repository probes.
//!
//! ```text
//! endpoints(&RepositoriesConfig)
//!   "google"        --> https://maven.google.com/
//!   "maven-central" --> https://repo.maven.apache.org/maven2/
//!   custom URLs     --> used verbatim
//!        |
//!        v
//!   probe_repository(repo, timeout)   HTTP HEAD
//!        |
//!        v
//!   status < 500     Ok(status)
//!   5xx              NetworkError::HttpError
//!   timed out        NetworkError::Timeout
//!   no connection    NetworkError::Reqwest
//!
//! Global client: OnceLock, connection pool, keep-alive
//! ```

use crate::config::types::RepositoriesConfig;
use crate::error::{NetworkError, OutbaseResult};
use reqwest::Client;
use std::sync::OnceLock;
use std::time::Duration;

/// Global HTTP client - initialized once, reused across all probes.
/// Falls back to a basic client if custom configuration fails.
fn global_client() -> &'static Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        Client::builder()
            .user_agent(format!("outbase/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}

/// Maps a well-known repository name to its endpoint URL.
#[must_use]
pub fn well_known_url(name: &str) -> Option<&'static str> {
    match name {
        "google" => Some("https://maven.google.com/"),
        "maven-central" => Some("https://repo.maven.apache.org/maven2/"),
        _ => None,
    }
}

/// A declared artifact repository with its resolved endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    name: String,
    url: String,
}

impl Repository {
    /// Creates a repository from a custom URL. The display name is the URL.
    #[must_use]
    pub fn custom(url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            name: url.clone(),
            url,
        }
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the endpoint URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Resolves the declared repositories to concrete endpoints.
///
/// Well-known names must already have been validated at config load, but an
/// unknown name still surfaces as an error here rather than a panic.
///
/// # Errors
///
/// Returns a `NetworkError::InvalidUrl` for an unknown well-known name.
pub fn endpoints(config: &RepositoriesConfig) -> OutbaseResult<Vec<Repository>> {
    let mut repos = Vec::with_capacity(config.use_repos.len() + config.custom.len());

    for name in &config.use_repos {
        let url = well_known_url(name)
            .ok_or_else(|| NetworkError::InvalidUrl(format!("unknown repository '{name}'")))?;
        repos.push(Repository {
            name: name.clone(),
            url: url.to_string(),
        });
    }
    for url in &config.custom {
        repos.push(Repository::custom(url.clone()));
    }

    Ok(repos)
}

/// Probes a repository with an HTTP HEAD request.
///
/// A repository is reachable when the server answers with a status below
/// 500; the probe does not care about 3xx/4xx because an artifact server
/// routinely rejects HEAD on its root while serving artifacts fine.
///
/// # Errors
///
/// Returns `NetworkError::Timeout` when the probe times out,
/// `NetworkError::HttpError` for a 5xx answer, and `NetworkError::Reqwest`
/// for connection failures.
pub async fn probe_repository(repo: &Repository, timeout: Duration) -> OutbaseResult<u16> {
    let response = global_client()
        .head(repo.url())
        .timeout(timeout)
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                NetworkError::Timeout {
                    url: repo.url().to_string(),
                }
            } else {
                NetworkError::Reqwest(e)
            }
        })?;

    let status = response.status();
    if status.is_server_error() {
        return Err(NetworkError::HttpError {
            status: status.as_u16(),
            url: repo.url().to_string(),
        }
        .into());
    }

    Ok(status.as_u16())
}
