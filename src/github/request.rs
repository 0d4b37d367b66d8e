//! Request assembly for `PUT /repos/{owner}/{repo}/contents/{path}`.

use crate::credential::Credential;
use crate::github::encoding::encode_content;
use crate::github::error::{GitHubError, GitHubResult};
use crate::github::update_file::UpdateFileRequest;
use crate::github::util::encode_repo_path;
use reqwest::Method;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use serde::Serialize;

/// Public GitHub REST endpoint.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Versioned JSON media type sent as `Accept`.
pub const ACCEPT_MEDIA_TYPE: &str = "application/vnd.github.v3+json";

const CLIENT_USER_AGENT: &str = concat!("kodegen-file-update/", env!("CARGO_PKG_VERSION"));

/// Fully assembled request, ready for a [`Transport`](super::transport::Transport).
#[derive(Debug, Clone)]
pub struct ContentsPutRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl ContentsPutRequest {
    /// Body as text, for inspection.
    #[must_use]
    pub fn body_text(&self) -> &str {
        std::str::from_utf8(&self.body).unwrap_or_default()
    }
}

// Field order is the wire order.
#[derive(Serialize)]
struct ContentsPutBody<'a> {
    message: &'a str,
    content: String,
    sha: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    branch: Option<&'a str>,
}

/// Contents URL for a file in a repository.
#[must_use]
pub fn contents_url(api_base: &str, owner: &str, repo: &str, path: &str) -> String {
    format!(
        "{}/repos/{}/{}/contents/{}",
        api_base.trim_end_matches('/'),
        urlencoding::encode(owner),
        urlencoding::encode(repo),
        encode_repo_path(path),
    )
}

/// Build the update request. Pure: same inputs give a byte-identical body.
///
/// Nothing about the inputs is checked here beyond what HTTP itself forbids
/// (control characters in the token); a bad sha or path comes back from
/// the remote as a rejection.
pub fn build_update_request(
    api_base: &str,
    request: &UpdateFileRequest,
    credential: &Credential,
) -> GitHubResult<ContentsPutRequest> {
    let body = serde_json::to_vec(&ContentsPutBody {
        message: &request.message,
        content: encode_content(&request.content),
        sha: &request.sha,
        branch: request.branch.as_deref(),
    })?;

    let mut auth = HeaderValue::from_str(&format!("token {}", credential.expose()))
        .map_err(|_| GitHubError::InvalidInput("token contains invalid header characters".into()))?;
    auth.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, auth);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_MEDIA_TYPE));
    headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));

    Ok(ContentsPutRequest {
        method: Method::PUT,
        url: contents_url(api_base, &request.owner, &request.repo, &request.path),
        headers,
        body,
    })
}
