//! Command-line surface.

use crate::config::{PartialConfig, UpdateConfig};
use crate::github::error::GitHubResult;
use clap::Parser;
use std::path::PathBuf;

/// Replace a file in a GitHub repository with the contents of a local file.
#[derive(Debug, Parser)]
#[command(name = "kodegen-file-update", version, about)]
pub struct Cli {
    /// TOML file with default settings; flags override it
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Local file whose content is committed [default: new_readme.md]
    #[arg(long, short = 's')]
    pub source: Option<PathBuf>,

    /// Repository owner (user or organization)
    #[arg(long)]
    pub owner: Option<String>,

    /// Repository name
    #[arg(long)]
    pub repo: Option<String>,

    /// Path of the file inside the repository
    #[arg(long)]
    pub path: Option<String>,

    /// Blob SHA of the remote file being replaced
    #[arg(long)]
    pub sha: Option<String>,

    /// Commit message
    #[arg(long, short = 'm')]
    pub message: Option<String>,

    /// Branch to commit to (repository default when omitted)
    #[arg(long)]
    pub branch: Option<String>,

    /// API base URL, for GitHub Enterprise [default: https://api.github.com]
    #[arg(long)]
    pub api_base: Option<String>,

    /// Read the token from this environment variable instead of prompting
    #[arg(long)]
    pub token_env: Option<String>,
}

impl Cli {
    fn overrides(&self) -> PartialConfig {
        PartialConfig {
            api_base: self.api_base.clone(),
            owner: self.owner.clone(),
            repo: self.repo.clone(),
            path: self.path.clone(),
            sha: self.sha.clone(),
            message: self.message.clone(),
            branch: self.branch.clone(),
            source: self.source.clone(),
            token_env: self.token_env.clone(),
        }
    }

    /// Config file (if any) with flags layered on top.
    pub fn resolve(&self) -> GitHubResult<UpdateConfig> {
        let base = match &self.config {
            Some(path) => PartialConfig::load(path)?,
            None => PartialConfig::default(),
        };
        base.merge(self.overrides()).finish()
    }
}
