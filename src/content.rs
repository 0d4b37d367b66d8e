//! Local content loading.

use crate::github::error::{GitHubError, GitHubResult};
use log::debug;
use std::path::Path;

/// Read the whole source file as UTF-8 text.
///
/// Missing, unreadable and non-UTF-8 files all surface as [`GitHubError::Io`]
/// before anything touches the network.
pub async fn read_content(path: impl AsRef<Path>) -> GitHubResult<String> {
    let path = path.as_ref();
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| GitHubError::io(path, e))?;
    debug!("Loaded {} bytes from {}", text.len(), path.display());
    Ok(text)
}
