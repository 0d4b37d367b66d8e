//! End-to-end update scenarios against a recording transport.

use super::common::{CountingCredential, RecordingTransport, config_for};
use kodegen_file_update::{GitHubClient, GitHubError, Outcome, UpdateFileRequest, report, run};
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

fn source_with(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn rendered(outcome: &Outcome) -> String {
    let mut buf = Vec::new();
    report(outcome, &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

#[tokio::test]
async fn test_success_prints_only_success_line() {
    let source = source_with("\"Hello\"");
    let transport = Arc::new(RecordingTransport::answering(200, r#"{"content":{}}"#));
    let credentials = Arc::new(CountingCredential::new("ghp_ok"));

    let outcome = run(
        &config_for(source.path().to_path_buf()),
        credentials.clone(),
        transport.clone(),
    )
    .await
    .unwrap();

    assert_eq!(outcome, Outcome::Updated);
    assert_eq!(rendered(&outcome), "File updated successfully!\n");
    assert_eq!(credentials.calls(), 1);

    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    let body: serde_json::Value = serde_json::from_slice(&sent[0].body).unwrap();
    assert_eq!(body["content"], "IkhlbGxvIg==");
    assert_eq!(sent[0].headers["authorization"], "token ghp_ok");
}

#[tokio::test]
async fn test_stale_sha_reports_conflict_and_body() {
    let source = source_with("anything at all");
    let transport = Arc::new(RecordingTransport::answering(
        409,
        r#"{"message":"sha does not match"}"#,
    ));

    let outcome = run(
        &config_for(source.path().to_path_buf()),
        Arc::new(CountingCredential::new("t")),
        transport,
    )
    .await
    .unwrap();

    assert_eq!(outcome.exit_code(), 1);
    let text = rendered(&outcome);
    assert!(text.contains("409"));
    assert!(text.contains(r#"{"message":"sha does not match"}"#));
}

#[tokio::test]
async fn test_bad_credentials_reports_unauthorized_and_body() {
    let source = source_with("content");
    let transport = Arc::new(RecordingTransport::answering(
        401,
        r#"{"message":"Bad credentials"}"#,
    ));

    let outcome = run(
        &config_for(source.path().to_path_buf()),
        Arc::new(CountingCredential::new("")),
        transport,
    )
    .await
    .unwrap();

    assert_eq!(
        outcome,
        Outcome::Rejected {
            status: 401,
            body: r#"{"message":"Bad credentials"}"#.into(),
        }
    );
    let text = rendered(&outcome);
    assert!(text.contains("401"));
    assert!(text.contains("Bad credentials"));
}

#[tokio::test]
async fn test_missing_source_never_reaches_transport() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("new_readme.md");
    let transport = Arc::new(RecordingTransport::answering(200, ""));
    let credentials = Arc::new(CountingCredential::new("t"));

    let err = run(&config_for(missing.clone()), credentials.clone(), transport.clone())
        .await
        .unwrap_err();

    match err {
        GitHubError::Io { path, source } => {
            assert_eq!(path, missing);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected Io error, got {other:?}"),
    }
    assert!(transport.sent().is_empty());
    assert_eq!(credentials.calls(), 0);
}

#[tokio::test]
async fn test_non_utf8_source_is_an_io_error() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&[0xff, 0xfe, 0x00, 0xc3]).unwrap();
    file.flush().unwrap();
    let transport = Arc::new(RecordingTransport::answering(200, ""));

    let err = run(
        &config_for(file.path().to_path_buf()),
        Arc::new(CountingCredential::new("t")),
        transport.clone(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, GitHubError::Io { .. }));
    assert!(transport.sent().is_empty());
}

#[tokio::test]
async fn test_empty_source_still_sends_well_formed_request() {
    let source = source_with("");
    let transport = Arc::new(RecordingTransport::answering(200, "{}"));

    let outcome = run(
        &config_for(source.path().to_path_buf()),
        Arc::new(CountingCredential::new("t")),
        transport.clone(),
    )
    .await
    .unwrap();

    assert!(outcome.is_success());
    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    let body: serde_json::Value = serde_json::from_slice(&sent[0].body).unwrap();
    assert_eq!(body["content"], "");
    assert_eq!(body["sha"], "cb68436d58ab4e9b764762d2740b5d44b5107192");
}

#[tokio::test]
async fn test_client_update_file_uses_configured_base() {
    let transport = Arc::new(RecordingTransport::answering(500, "oops"));
    let client = GitHubClient::builder()
        .personal_token("t")
        .base_uri("https://ghe.example.com/api/v3/")
        .transport(transport.clone())
        .build()
        .unwrap();

    let outcome = client
        .update_file(UpdateFileRequest {
            owner: "o".into(),
            repo: "r".into(),
            path: "a/b.md".into(),
            message: "m".into(),
            content: "c".into(),
            sha: "s".into(),
            branch: Some("main".into()),
        })
        .await
        .unwrap()
        .unwrap();

    assert_eq!(
        outcome,
        Outcome::Rejected {
            status: 500,
            body: "oops".into()
        }
    );
    assert_eq!(
        transport.sent()[0].url,
        "https://ghe.example.com/api/v3/repos/o/r/contents/a/b.md"
    );
}

#[test]
fn test_builder_requires_token() {
    let err = GitHubClient::builder()
        .transport(Arc::new(RecordingTransport::answering(200, "")))
        .build()
        .unwrap_err();
    assert!(matches!(err, GitHubError::AuthRequired));
}

#[test]
fn test_builder_rejects_non_http_base() {
    let err = GitHubClient::builder()
        .personal_token("t")
        .base_uri("ftp://example.com")
        .transport(Arc::new(RecordingTransport::answering(200, "")))
        .build()
        .unwrap_err();
    assert!(matches!(err, GitHubError::ClientSetup(_)));
}
