//! `kodegen_file_update` - push one local file to a GitHub repository path
//!
//! Reads the file, base64-encodes it and replaces the remote file with a
//! single `PUT /repos/{owner}/{repo}/contents/{path}`, using a blob SHA the
//! caller already knows. The remote's answer is classified into an
//! [`Outcome`] and printed; it is never retried.

// Module declarations
pub mod cli;
pub mod config;
pub mod content;
pub mod credential;
pub mod github;
pub mod report;
pub mod runtime;

use log::info;
use std::sync::Arc;

// Re-export runtime types
pub use runtime::AsyncTask;

// Re-export GitHub client types
pub use github::{GitHubClient, GitHubClientBuilder};

// Re-export GitHub error types
pub use github::{GitHubError, GitHubResult};

// Re-export operation types
pub use config::{PartialConfig, UpdateConfig};
pub use credential::{
    Credential, CredentialSource, EnvCredential, PromptCredential, StaticCredential, read_token_line,
};
pub use github::{ContentsPutRequest, RawResponse, Transport, UpdateFileRequest};
pub use report::{Outcome, report};

/// Run one update: load the source file, obtain a token, send the PUT.
///
/// The source file is read before the operator is asked for anything, so a
/// missing file aborts without a prompt and without touching the network.
/// Remote rejections come back as `Ok(Outcome::Rejected { .. })`.
pub async fn run(
    config: &UpdateConfig,
    credentials: Arc<dyn CredentialSource>,
    transport: Arc<dyn Transport>,
) -> GitHubResult<Outcome> {
    let content = content::read_content(&config.source).await?;

    let credential = AsyncTask::spawn(move || credentials.credential()).await??;

    let client = GitHubClient::builder()
        .credential(credential)
        .base_uri(config.api_base.clone())
        .transport(transport)
        .build()?;

    let outcome = client.update_file(config.commit(content)).await??;
    info!("Update finished: {outcome:?}");
    Ok(outcome)
}
