//! GitHub contents API client
//!
//! Holds the API base, the credential and the transport used for the
//! update call.
//!
//! # Examples
//!
//! ```rust,no_run
//! use kodegen_file_update::{GitHubClient, UpdateFileRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let gh = GitHubClient::with_token("ghp_...")?;
//!
//!     let outcome = gh
//!         .update_file(UpdateFileRequest {
//!             owner: "owner".into(),
//!             repo: "repo".into(),
//!             path: "README.md".into(),
//!             message: "Refresh README".into(),
//!             content: "Hello".into(),
//!             sha: "cb68436d58ab4e9b764762d2740b5d44b5107192".into(),
//!             branch: None,
//!         })
//!         .await??;
//!
//!     println!("{outcome:?}");
//!     Ok(())
//! }
//! ```

use crate::credential::Credential;
use crate::github::error::{GitHubError, GitHubResult};
use crate::github::request::DEFAULT_API_BASE;
use crate::github::transport::{HttpTransport, Transport};
use std::fmt;
use std::sync::Arc;

mod repositories;

/// Contents API client.
///
/// Cloning is cheap (Arc clones).
#[derive(Clone)]
pub struct GitHubClient {
    transport: Arc<dyn Transport>,
    api_base: Arc<str>,
    credential: Credential,
}

impl GitHubClient {
    /// Create a new client builder
    #[must_use]
    pub fn builder() -> GitHubClientBuilder {
        GitHubClientBuilder::new()
    }

    /// Convenience: create client with personal access token
    pub fn with_token(token: impl Into<String>) -> GitHubResult<Self> {
        Self::builder().personal_token(token).build()
    }

    /// API base the client targets
    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}

impl fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitHubClient")
            .field("api_base", &self.api_base)
            .field("credential", &self.credential)
            .finish_non_exhaustive()
    }
}

/// Builder for creating `GitHubClient`
pub struct GitHubClientBuilder {
    credential: Option<Credential>,
    base_uri: Option<String>,
    transport: Option<Arc<dyn Transport>>,
}

impl GitHubClientBuilder {
    /// Create a new builder
    #[must_use]
    pub fn new() -> Self {
        Self {
            credential: None,
            base_uri: None,
            transport: None,
        }
    }

    /// Set personal access token for authentication
    pub fn personal_token(mut self, token: impl Into<String>) -> Self {
        self.credential = Some(Credential::new(token));
        self
    }

    /// Set an already obtained credential
    pub fn credential(mut self, credential: Credential) -> Self {
        self.credential = Some(credential);
        self
    }

    /// Set base URI (for GitHub Enterprise)
    pub fn base_uri(mut self, uri: impl Into<String>) -> Self {
        self.base_uri = Some(uri.into());
        self
    }

    /// Replace the HTTPS transport
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the `GitHubClient`
    pub fn build(self) -> GitHubResult<GitHubClient> {
        let credential = self.credential.ok_or(GitHubError::AuthRequired)?;

        let api_base = self
            .base_uri
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        if !(api_base.starts_with("https://") || api_base.starts_with("http://")) {
            return Err(GitHubError::ClientSetup(format!(
                "base URI must be an http(s) URL: {api_base}"
            )));
        }

        let transport = match self.transport {
            Some(t) => t,
            None => Arc::new(HttpTransport::new()?),
        };

        Ok(GitHubClient {
            transport,
            api_base: Arc::from(api_base.trim_end_matches('/')),
            credential,
        })
    }
}

impl Default for GitHubClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
