//! Error types for the contents update flow
//!
//! Only local failures live here. A non-200 answer from the remote is a
//! reportable outcome, see [`crate::report::Outcome`].

use std::path::PathBuf;
use thiserror::Error;

/// Error types for a contents update run
#[derive(Debug, Error)]
pub enum GitHubError {
    /// Local source file could not be read as UTF-8 text
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Connection, DNS or TLS failure before an HTTP exchange completed
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Request body could not be serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Missing or malformed configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal prompt failed (closed stdin, no tty)
    #[error("Credential prompt failed: {0}")]
    Prompt(String),

    /// No credential available from a non-interactive source
    #[error("Authentication required")]
    AuthRequired,

    /// HTTP client setup error
    #[error("Client setup failed: {0}")]
    ClientSetup(String),

    /// Invalid input parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Task was dropped before it produced a result
    #[error("Task channel closed: {0}")]
    TaskChannel(#[from] tokio::sync::oneshot::error::RecvError),
}

impl GitHubError {
    /// Build an I/O error tagged with the file it concerns.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GitHubError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenience result alias for contents update operations
pub type GitHubResult<T> = Result<T, GitHubError>;

impl From<toml::de::Error> for GitHubError {
    fn from(e: toml::de::Error) -> Self {
        GitHubError::Config(e.to_string())
    }
}

impl From<dialoguer::Error> for GitHubError {
    fn from(e: dialoguer::Error) -> Self {
        GitHubError::Prompt(e.to_string())
    }
}
