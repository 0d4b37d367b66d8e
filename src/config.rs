//! Run configuration
//!
//! Target coordinates and the expected blob SHA come from a TOML file and/or
//! command-line flags; flags win. The SHA is taken as given and never looked
//! up, so a run is only valid while the remote file still matches it.

use crate::credential::{CredentialSource, EnvCredential, PromptCredential};
use crate::github::error::{GitHubError, GitHubResult};
use crate::github::request::DEFAULT_API_BASE;
use crate::github::update_file::UpdateFileRequest;
use log::{debug, info};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Default local file holding the new content.
pub const DEFAULT_SOURCE: &str = "new_readme.md";

/// Every setting optional, as read from a file or collected from flags.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PartialConfig {
    pub api_base: Option<String>,
    pub owner: Option<String>,
    pub repo: Option<String>,
    pub path: Option<String>,
    pub sha: Option<String>,
    pub message: Option<String>,
    pub branch: Option<String>,
    pub source: Option<PathBuf>,
    /// Read the token from this environment variable instead of prompting.
    pub token_env: Option<String>,
}

impl PartialConfig {
    /// Parse a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> GitHubResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            GitHubError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        let parsed = Self::parse(&text)?;
        info!("Loaded configuration from {}", path.display());
        Ok(parsed)
    }

    pub fn parse(text: &str) -> GitHubResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Layer `other` on top of `self`; set fields in `other` win.
    #[must_use]
    pub fn merge(self, other: PartialConfig) -> PartialConfig {
        PartialConfig {
            api_base: other.api_base.or(self.api_base),
            owner: other.owner.or(self.owner),
            repo: other.repo.or(self.repo),
            path: other.path.or(self.path),
            sha: other.sha.or(self.sha),
            message: other.message.or(self.message),
            branch: other.branch.or(self.branch),
            source: other.source.or(self.source),
            token_env: other.token_env.or(self.token_env),
        }
    }

    /// Fill defaults and require the target coordinates.
    pub fn finish(self) -> GitHubResult<UpdateConfig> {
        fn required(value: Option<String>, name: &str) -> GitHubResult<String> {
            match value {
                Some(v) if !v.trim().is_empty() => Ok(v),
                _ => Err(GitHubError::Config(format!("missing required setting `{name}`"))),
            }
        }

        let config = UpdateConfig {
            api_base: self.api_base.unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            owner: required(self.owner, "owner")?,
            repo: required(self.repo, "repo")?,
            path: required(self.path, "path")?,
            sha: required(self.sha, "sha")?,
            message: required(self.message, "message")?,
            branch: self.branch.filter(|b| !b.is_empty()),
            source: self.source.unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE)),
            token_env: self.token_env.filter(|v| !v.is_empty()),
        };
        debug!("{config:?}");
        Ok(config)
    }
}

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateConfig {
    pub api_base: String,
    pub owner: String,
    pub repo: String,
    pub path: String,
    pub sha: String,
    pub message: String,
    pub branch: Option<String>,
    pub source: PathBuf,
    pub token_env: Option<String>,
}

impl UpdateConfig {
    /// Commit descriptor for the given file content.
    #[must_use]
    pub fn commit(&self, content: String) -> UpdateFileRequest {
        UpdateFileRequest {
            owner: self.owner.clone(),
            repo: self.repo.clone(),
            path: self.path.clone(),
            message: self.message.clone(),
            content,
            sha: self.sha.clone(),
            branch: self.branch.clone(),
        }
    }

    /// Environment variable when `token_env` is set, masked prompt otherwise.
    #[must_use]
    pub fn credential_source(&self) -> Arc<dyn CredentialSource> {
        match &self.token_env {
            Some(var) => Arc::new(EnvCredential::new(var.clone())),
            None => Arc::new(PromptCredential::default()),
        }
    }
}
