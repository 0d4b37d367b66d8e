//! Repositories API methods

use super::GitHubClient;
use crate::github::error::GitHubError;
use crate::report::Outcome;

impl GitHubClient {
    /// Replace a file's content with a single commit
    #[must_use]
    pub fn update_file(
        &self,
        request: crate::github::UpdateFileRequest,
    ) -> crate::runtime::AsyncTask<Result<Outcome, GitHubError>> {
        crate::github::update_file::update_file(
            self.transport.clone(),
            self.api_base.clone(),
            self.credential.clone(),
            request,
        )
    }
}
