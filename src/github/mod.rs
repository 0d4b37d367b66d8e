//! GitHub contents API module
//!
//! Request assembly, transport and the file update operation.

pub mod client;
pub mod encoding;
pub mod error;
pub mod request;
pub mod transport;
pub mod util;

// Re-export client types
pub use client::{GitHubClient, GitHubClientBuilder};

// Re-export error types
pub use error::{GitHubError, GitHubResult};
pub use util::spawn_task;

pub use encoding::{decode_content, encode_content};
pub use request::{ACCEPT_MEDIA_TYPE, ContentsPutRequest, DEFAULT_API_BASE, build_update_request};
pub use transport::{HttpTransport, RawResponse, Transport};
pub use update_file::UpdateFileRequest;

// GitHub API operations - Repositories (internal)
pub(crate) mod update_file;
