//! Transport capability: send one request, get back status and body.

use crate::github::error::{GitHubError, GitHubResult};
use crate::github::request::ContentsPutRequest;
use futures::future::BoxFuture;
use log::debug;

/// Completed HTTP exchange. Error statuses land here too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Sends an assembled request exactly once.
///
/// Implementations return `Err` only when no HTTP exchange completed
/// (connection, DNS, TLS). A 4xx/5xx answer is `Ok`.
pub trait Transport: Send + Sync {
    fn send(&self, request: ContentsPutRequest) -> BoxFuture<'_, GitHubResult<RawResponse>>;
}

/// HTTPS transport over `reqwest`. Single attempt, client default timeouts.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> GitHubResult<Self> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .map_err(|e| GitHubError::ClientSetup(e.to_string()))?;
        Ok(Self { client })
    }

    /// Wrap an already configured client.
    #[must_use]
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: ContentsPutRequest) -> BoxFuture<'_, GitHubResult<RawResponse>> {
        Box::pin(async move {
            debug!(
                "{} {} ({} byte body)",
                request.method,
                request.url,
                request.body.len()
            );
            let response = self
                .client
                .request(request.method, &request.url)
                .headers(request.headers)
                .body(request.body)
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            debug!("Response status {status}");
            Ok(RawResponse { status, body })
        })
    }
}
