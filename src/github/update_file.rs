//! GitHub file update operation.

use crate::credential::Credential;
use crate::github::request::build_update_request;
use crate::github::transport::Transport;
use crate::github::{error::GitHubError, util::spawn_task};
use crate::report::Outcome;
use crate::runtime::AsyncTask;
use log::info;
use std::sync::Arc;

/// Commit descriptor for replacing an existing file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateFileRequest {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Path to the file in the repository
    pub path: String,
    /// Commit message
    pub message: String,
    /// File content as text (base64 encoded when the request is built)
    pub content: String,
    /// Blob SHA of the version being replaced. Supplied by the caller, never
    /// looked up; a stale value is answered with 409.
    pub sha: String,
    /// Branch to commit to (defaults to repository default branch)
    pub branch: Option<String>,
}

/// Replace a single file. One PUT, no retry.
pub(crate) fn update_file(
    transport: Arc<dyn Transport>,
    api_base: Arc<str>,
    credential: Credential,
    request: UpdateFileRequest,
) -> AsyncTask<Result<Outcome, GitHubError>> {
    spawn_task(async move {
        let put = build_update_request(&api_base, &request, &credential)?;
        info!(
            "Updating {}/{}:{} against blob {}",
            request.owner, request.repo, request.path, request.sha
        );
        let response = transport.send(put).await?;
        Ok(Outcome::from_response(response))
    })
}
